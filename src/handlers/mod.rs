pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

// Re-export routers for easier importing
pub use pizzas::router as pizza_router;
pub use restaurant_pizzas::router as restaurant_pizza_router;
pub use restaurants::router as restaurant_router;

use axum::{response::Html, routing::get, Router};
use utoipa::OpenApi;

pub async fn index() -> Html<&'static str> {
    Html("<h1>Restaurant-Pizza API</h1>")
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        pizzas::list_pizzas,
        restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::views::RestaurantView,
            crate::views::PizzaView,
            crate::views::RestaurantDetailView,
            crate::views::OfferingWithPizzaView,
            crate::views::OfferingCreatedView,
            crate::views::ApiErrorResponse,
            crate::views::ValidationErrorResponse,
            restaurant_pizzas::CreateRestaurantPizzaRequest
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant endpoints"),
        (name = "pizzas", description = "Pizza endpoints"),
        (name = "restaurant_pizzas", description = "Offering endpoints"),
    )
)]
pub struct ApiDoc;
