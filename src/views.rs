//! Response payload shapes, one per serialization context.
//!
//! Each view is built by a pure function from already-loaded model rows, so
//! relationship nesting is fixed when the view is constructed: an offering
//! embedded in a restaurant or pizza payload never carries its container
//! back-reference, and a nested restaurant/pizza never carries its own
//! offering collection.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Pizza, Restaurant, RestaurantPizza};

/// A restaurant as it appears in list responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantView {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Address of the restaurant
    pub address: String,
}

/// A pizza as it appears in list responses and nested payloads.
#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaView {
    /// Unique identifier for the pizza
    pub id: i32,
    /// Name of the pizza
    pub name: String,
    /// Comma-separated ingredient list
    pub ingredients: String,
}

/// A single restaurant with its offerings expanded one level.
#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetailView {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// Offerings sold at this restaurant, each with its pizza nested
    pub restaurant_pizzas: Vec<OfferingWithPizzaView>,
}

/// An offering nested inside a restaurant detail payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct OfferingWithPizzaView {
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaView,
}

/// The response to a successful offering creation.
#[derive(Debug, Serialize, ToSchema)]
pub struct OfferingCreatedView {
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub restaurant: RestaurantView,
    pub pizza: PizzaView,
}

/// Error body carrying a single message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

/// Error body carrying one message per violated rule.
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Validation error messages
    pub errors: Vec<String>,
}

pub fn restaurant_view(restaurant: &Restaurant) -> RestaurantView {
    RestaurantView {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
    }
}

pub fn pizza_view(pizza: &Pizza) -> PizzaView {
    PizzaView {
        id: pizza.id,
        name: pizza.name.clone(),
        ingredients: pizza.ingredients.clone(),
    }
}

pub fn restaurant_detail_view(
    restaurant: &Restaurant,
    offerings: &[(RestaurantPizza, Pizza)],
) -> RestaurantDetailView {
    RestaurantDetailView {
        id: restaurant.id,
        name: restaurant.name.clone(),
        address: restaurant.address.clone(),
        restaurant_pizzas: offerings
            .iter()
            .map(|(offering, pizza)| OfferingWithPizzaView {
                id: offering.id,
                price: offering.price,
                restaurant_id: offering.restaurant_id,
                pizza_id: offering.pizza_id,
                pizza: pizza_view(pizza),
            })
            .collect(),
    }
}

pub fn offering_created_view(
    offering: &RestaurantPizza,
    restaurant: &Restaurant,
    pizza: &Pizza,
) -> OfferingCreatedView {
    OfferingCreatedView {
        id: offering.id,
        price: offering.price,
        restaurant_id: offering.restaurant_id,
        pizza_id: offering.pizza_id,
        restaurant: restaurant_view(restaurant),
        pizza: pizza_view(pizza),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shack() -> Restaurant {
        Restaurant {
            id: 1,
            name: "Karen's Pizza Shack".to_string(),
            address: "123 Pizza Lane".to_string(),
        }
    }

    fn margherita() -> Pizza {
        Pizza {
            id: 1,
            name: "Margherita".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese, Basil".to_string(),
        }
    }

    fn offering() -> RestaurantPizza {
        RestaurantPizza {
            id: 1,
            price: 12.5,
            restaurant_id: 1,
            pizza_id: 1,
        }
    }

    #[test]
    fn list_views_omit_offering_collections() {
        let restaurant = serde_json::to_value(restaurant_view(&shack())).unwrap();
        assert_eq!(
            restaurant,
            serde_json::json!({
                "id": 1,
                "name": "Karen's Pizza Shack",
                "address": "123 Pizza Lane",
            })
        );
        assert!(restaurant.get("restaurant_pizzas").is_none());

        let pizza = serde_json::to_value(pizza_view(&margherita())).unwrap();
        assert!(pizza.get("restaurant_pizzas").is_none());
    }

    #[test]
    fn detail_view_nests_pizza_but_not_restaurant() {
        let detail = restaurant_detail_view(&shack(), &[(offering(), margherita())]);
        let value = serde_json::to_value(detail).unwrap();

        let nested = &value["restaurant_pizzas"][0];
        assert_eq!(nested["price"], 12.5);
        assert_eq!(nested["pizza"]["name"], "Margherita");
        assert!(nested.get("restaurant").is_none());
        assert!(nested["pizza"].get("restaurant_pizzas").is_none());
    }

    #[test]
    fn created_view_nests_both_parents_without_collections() {
        let created = offering_created_view(&offering(), &shack(), &margherita());
        let value = serde_json::to_value(created).unwrap();

        assert_eq!(value["price"], 12.5);
        assert_eq!(value["restaurant"]["name"], "Karen's Pizza Shack");
        assert_eq!(value["pizza"]["ingredients"], "Dough, Tomato Sauce, Cheese, Basil");
        assert!(value["restaurant"].get("restaurant_pizzas").is_none());
        assert!(value["pizza"].get("restaurant_pizzas").is_none());
    }
}
