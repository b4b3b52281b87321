use diesel::prelude::*;
use tracing::info;

use restaurant_pizza_service::{establish_connection, models, schema};

type SeedError = Box<dyn std::error::Error>;

fn create_restaurant(
    conn: &mut PgConnection,
    name: &str,
    address: &str,
) -> Result<models::Restaurant, SeedError> {
    let new = models::NewRestaurant {
        name: name.to_string(),
        address: address.to_string(),
    };
    new.validate()
        .map_err(|errors| format!("invalid restaurant {name:?}: {errors:?}"))?;
    Ok(diesel::insert_into(schema::restaurants::table)
        .values(&new)
        .returning(models::Restaurant::as_returning())
        .get_result(conn)?)
}

fn create_pizza(
    conn: &mut PgConnection,
    name: &str,
    ingredients: &str,
) -> Result<models::Pizza, SeedError> {
    let new = models::NewPizza {
        name: name.to_string(),
        ingredients: ingredients.to_string(),
    };
    new.validate()
        .map_err(|errors| format!("invalid pizza {name:?}: {errors:?}"))?;
    Ok(diesel::insert_into(schema::pizzas::table)
        .values(&new)
        .returning(models::Pizza::as_returning())
        .get_result(conn)?)
}

fn create_offering(
    conn: &mut PgConnection,
    restaurant: &models::Restaurant,
    pizza: &models::Pizza,
    price: f64,
) -> Result<models::RestaurantPizza, SeedError> {
    let new = models::NewRestaurantPizza {
        price,
        restaurant_id: restaurant.id,
        pizza_id: pizza.id,
    };
    new.validate()
        .map_err(|errors| format!("invalid offering: {errors:?}"))?;
    Ok(diesel::insert_into(schema::restaurant_pizzas::table)
        .values(&new)
        .returning(models::RestaurantPizza::as_returning())
        .get_result(conn)?)
}

fn main() -> Result<(), SeedError> {
    tracing_subscriber::fmt::init();

    let conn = &mut establish_connection();
    conn.transaction::<_, SeedError, _>(|conn| {
        info!("Deleting existing data...");
        // child rows first
        diesel::delete(schema::restaurant_pizzas::table).execute(conn)?;
        diesel::delete(schema::pizzas::table).execute(conn)?;
        diesel::delete(schema::restaurants::table).execute(conn)?;

        info!("Creating restaurants...");
        let shack = create_restaurant(conn, "Karen's Pizza Shack", "123 Pizza Lane")?;
        let bistro = create_restaurant(conn, "Sanjay's Pizza Bistro", "456 Doughnut Drive")?;
        let palace = create_restaurant(conn, "Kiki's Pizza Palace", "789 Cheese Street")?;

        info!("Creating pizzas...");
        let cheese = create_pizza(conn, "Margherita", "Dough, Tomato Sauce, Cheese, Basil")?;
        let pepperoni = create_pizza(
            conn,
            "Pepperoni Supreme",
            "Dough, Tomato Sauce, Cheese, Pepperoni",
        )?;
        let california = create_pizza(
            conn,
            "California Veggie",
            "Dough, Pesto, Ricotta, Red peppers, Spinach",
        )?;

        info!("Creating offerings...");
        create_offering(conn, &shack, &cheese, 12.50)?;
        create_offering(conn, &bistro, &pepperoni, 14.00)?;
        create_offering(conn, &palace, &california, 15.50)?;
        create_offering(conn, &shack, &pepperoni, 13.00)?;
        create_offering(conn, &bistro, &cheese, 12.75)?;

        Ok(())
    })?;

    info!("Seeding done!");
    Ok(())
}
