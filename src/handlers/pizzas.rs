use axum::{response::Json, routing::get, Router};
use diesel::prelude::*;
use tracing::instrument;

use crate::error::ApiError;
use crate::views::{self, PizzaView};
use crate::{establish_connection, models, schema};

pub fn router() -> Router {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = Vec<PizzaView>),
    ),
    tag = "pizzas"
)]
#[instrument]
pub async fn list_pizzas() -> Result<Json<Vec<PizzaView>>, ApiError> {
    let conn = &mut establish_connection();
    let results = schema::pizzas::table
        .select(models::Pizza::as_select())
        .load(conn)
        .map_err(ApiError::Internal)?;

    Ok(Json(results.iter().map(views::pizza_view).collect()))
}
