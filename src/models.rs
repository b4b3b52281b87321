use diesel::prelude::*;

use crate::schema::{pizzas, restaurant_pizzas, restaurants};

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = restaurants)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

#[derive(Queryable, Selectable, Identifiable, Debug, PartialEq)]
#[diesel(table_name = pizzas)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, PartialEq)]
#[diesel(belongs_to(Restaurant))]
#[diesel(belongs_to(Pizza))]
#[diesel(table_name = restaurant_pizzas)]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = restaurants)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    /// Field rules checked before the row is handed to the database.
    /// Name uniqueness stays with the unique constraint on `restaurants.name`.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("Restaurant must have a name.".to_string());
        } else if self.name.chars().count() > 50 {
            errors.push("Restaurant name must be between 1 and 50 characters.".to_string());
        }
        if self.address.is_empty() {
            errors.push("Restaurant must have an address.".to_string());
        } else if self.address.chars().count() > 100 {
            errors.push("Restaurant address must be between 1 and 100 characters.".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = pizzas)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

impl NewPizza {
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("Pizza must have a name.".to_string());
        }
        if self.ingredients.is_empty() {
            errors.push("Pizza must have ingredients.".to_string());
        } else if self.ingredients.chars().count() > 255 {
            errors.push("Pizza ingredients must be at most 255 characters.".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Insertable, Debug, PartialEq)]
#[diesel(table_name = restaurant_pizzas)]
pub struct NewRestaurantPizza {
    pub price: f64,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

impl NewRestaurantPizza {
    /// Referential existence of `restaurant_id`/`pizza_id` is checked by the
    /// handler against the database, not here.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if !self.price.is_finite() {
            errors.push("Price must be a number.".to_string());
        } else if !(1.0..=30.0).contains(&self.price) {
            errors.push("Price must be between 1 and 30 (inclusive).".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offering(price: f64) -> NewRestaurantPizza {
        NewRestaurantPizza {
            price,
            restaurant_id: 1,
            pizza_id: 1,
        }
    }

    #[test]
    fn price_within_range_is_accepted() {
        assert!(offering(1.0).validate().is_ok());
        assert!(offering(12.5).validate().is_ok());
        assert!(offering(30.0).validate().is_ok());
    }

    #[test]
    fn price_outside_range_is_rejected() {
        for price in [0.0, 0.99, 30.01, 31.0, -5.0] {
            let errors = offering(price).validate().unwrap_err();
            assert_eq!(
                errors,
                vec!["Price must be between 1 and 30 (inclusive).".to_string()],
                "price {price} should be out of range"
            );
        }
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let errors = offering(f64::NAN).validate().unwrap_err();
        assert_eq!(errors, vec!["Price must be a number.".to_string()]);
    }

    #[test]
    fn restaurant_requires_name_and_address() {
        let errors = NewRestaurant {
            name: String::new(),
            address: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Restaurant must have a name.".to_string(),
                "Restaurant must have an address.".to_string(),
            ]
        );
    }

    #[test]
    fn restaurant_name_is_capped_at_50_chars() {
        let restaurant = NewRestaurant {
            name: "x".repeat(51),
            address: "123 Pizza Lane".to_string(),
        };
        let errors = restaurant.validate().unwrap_err();
        assert_eq!(
            errors,
            vec!["Restaurant name must be between 1 and 50 characters.".to_string()]
        );

        let restaurant = NewRestaurant {
            name: "x".repeat(50),
            address: "123 Pizza Lane".to_string(),
        };
        assert!(restaurant.validate().is_ok());
    }

    #[test]
    fn pizza_requires_name_and_ingredients() {
        let errors = NewPizza {
            name: String::new(),
            ingredients: String::new(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Pizza must have a name.".to_string(),
                "Pizza must have ingredients.".to_string(),
            ]
        );

        let pizza = NewPizza {
            name: "Margherita".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese, Basil".to_string(),
        };
        assert!(pizza.validate().is_ok());
    }
}
