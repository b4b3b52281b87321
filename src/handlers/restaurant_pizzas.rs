use axum::{http::StatusCode, response::Json, routing::post, Router};
use diesel::prelude::*;
use serde::Deserialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::views::{self, ApiErrorResponse, OfferingCreatedView, ValidationErrorResponse};
use crate::{establish_connection, models, schema};

pub fn router() -> Router {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

/// Fields are optional at the serde level so that an absent field produces
/// the handler's own validation response instead of a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Price of the pizza at this restaurant
    pub price: Option<f64>,
    /// ID of an existing pizza
    pub pizza_id: Option<i32>,
    /// ID of an existing restaurant
    pub restaurant_id: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Offering created", body = OfferingCreatedView),
        (status = 400, description = "Missing field or validation failure", body = ValidationErrorResponse),
        (status = 404, description = "Restaurant or pizza not found", body = ApiErrorResponse),
        (status = 500, description = "Unexpected server error", body = ApiErrorResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument]
pub async fn create_restaurant_pizza(
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<OfferingCreatedView>), ApiError> {
    let (Some(price), Some(pizza_id), Some(restaurant_id)) =
        (payload.price, payload.pizza_id, payload.restaurant_id)
    else {
        return Err(ApiError::Validation(vec![
            "Missing required fields: price, pizza_id, restaurant_id".to_string(),
        ]));
    };

    let conn = &mut establish_connection();

    let restaurant = schema::restaurants::table
        .find(restaurant_id)
        .select(models::Restaurant::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::Internal)?
        .ok_or(ApiError::RestaurantNotFound)?;

    let pizza = schema::pizzas::table
        .find(pizza_id)
        .select(models::Pizza::as_select())
        .first(conn)
        .optional()
        .map_err(ApiError::Internal)?
        .ok_or(ApiError::PizzaNotFound)?;

    let new_offering = models::NewRestaurantPizza {
        price,
        restaurant_id,
        pizza_id,
    };
    new_offering.validate().map_err(ApiError::Validation)?;

    let offering = conn
        .transaction::<models::RestaurantPizza, diesel::result::Error, _>(|conn| {
            diesel::insert_into(schema::restaurant_pizzas::table)
                .values(&new_offering)
                .returning(models::RestaurantPizza::as_returning())
                .get_result(conn)
        })
        .map_err(ApiError::from_write_error)?;

    Ok((
        StatusCode::CREATED,
        Json(views::offering_created_view(&offering, &restaurant, &pizza)),
    ))
}
