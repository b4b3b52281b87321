use axum::{extract::Path, http::StatusCode, response::Json, routing::get, Router};
use diesel::prelude::*;
use tracing::instrument;

use crate::error::ApiError;
use crate::views::{self, ApiErrorResponse, RestaurantDetailView, RestaurantView};
use crate::{establish_connection, models, schema};

pub fn router() -> Router {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = Vec<RestaurantView>),
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn list_restaurants() -> Result<Json<Vec<RestaurantView>>, ApiError> {
    let conn = &mut establish_connection();
    let results = schema::restaurants::table
        .select(models::Restaurant::as_select())
        .load(conn)
        .map_err(ApiError::Internal)?;

    Ok(Json(results.iter().map(views::restaurant_view).collect()))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant with its offerings", body = RestaurantDetailView),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn get_restaurant(Path(id): Path<i32>) -> Result<Json<RestaurantDetailView>, ApiError> {
    let conn = &mut establish_connection();
    let restaurant = schema::restaurants::table
        .find(id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::Internal)?
        .ok_or(ApiError::RestaurantNotFound)?;

    let offerings = models::RestaurantPizza::belonging_to(&restaurant)
        .inner_join(schema::pizzas::table)
        .select((
            models::RestaurantPizza::as_select(),
            models::Pizza::as_select(),
        ))
        .load::<(models::RestaurantPizza, models::Pizza)>(conn)
        .map_err(ApiError::Internal)?;

    Ok(Json(views::restaurant_detail_view(&restaurant, &offerings)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its offerings deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
        (status = 500, description = "Deletion failed", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument]
pub async fn delete_restaurant(Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    let conn = &mut establish_connection();
    let restaurant = schema::restaurants::table
        .find(id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::DeleteFailed)?
        .ok_or(ApiError::RestaurantNotFound)?;

    // Dependent offerings go with the restaurant via ON DELETE CASCADE.
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(schema::restaurants::table.find(restaurant.id)).execute(conn)?;
        Ok(())
    })
    .map_err(ApiError::DeleteFailed)?;

    Ok(StatusCode::NO_CONTENT)
}
