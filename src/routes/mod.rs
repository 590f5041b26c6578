use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{bookings, transports, traveling_data, traveling_points, users};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/register", post(users::register))
        .route("/login/{username}/{password}", get(users::login))
        .route(
            "/username/{username}",
            get(users::find_by_username),
        )
        .route("/email/{email}", get(users::find_by_email))
        .route("/all", get(users::find_all))
        .route(
            "/update-password/{username}/{new_password}/{old_password}",
            put(users::update_password),
        )
        .route(
            "/update-email/{new_email}/{old_email}/{password}",
            put(users::update_email),
        )
        .route(
            "/username/{username}/{password}",
            delete(users::delete_by_username),
        )
        .route("/email/{email}/{password}", delete(users::delete_by_email));

    let traveling_point_routes = Router::new()
        .route("/", post(traveling_points::save))
        .route(
            "/all",
            post(traveling_points::save_all).get(traveling_points::find_all),
        )
        .route("/id/{id}", get(traveling_points::find_by_id))
        .route("/name/{name}", get(traveling_points::find_by_name))
        .route(
            "/{new_name}/{old_name}",
            put(traveling_points::update_name),
        )
        .route("/{id}", delete(traveling_points::delete_by_id));

    let transport_routes = Router::new()
        .route("/bus", post(transports::save_bus))
        .route("/airplane", post(transports::save_airplane))
        .route("/all", post(transports::save_all))
        .route(
            "/{id}",
            get(transports::find_by_id).delete(transports::delete_by_id),
        )
        .route("/buses/{class}", get(transports::find_all_buses_by_class))
        .route(
            "/airplanes/{class}",
            get(transports::find_all_airplanes_by_class),
        )
        .route("/all/buses", get(transports::find_all_buses))
        .route("/all/airplanes", get(transports::find_all_airplanes))
        .route("/{class}/{id}", put(transports::update_class));

    let traveling_data_routes = Router::new()
        .route("/", post(traveling_data::save))
        .route("/dates", get(traveling_data::find_by_dates))
        .route("/all", get(traveling_data::find_all))
        .route(
            "/{id}",
            get(traveling_data::find_by_id).delete(traveling_data::delete_by_id),
        )
        .route("/dates/{id}", put(traveling_data::update_dates));

    let booking_routes = Router::new()
        .route("/", post(bookings::save))
        .route(
            "/{id}",
            get(bookings::find_by_id).delete(bookings::delete_by_id),
        )
        .route("/user/{username}", get(bookings::find_all_user_bookings))
        .route("/all", get(bookings::find_all))
        .route("/{id}/{count}", put(bookings::update_tickets));

    Router::new()
        .nest("/users", user_routes)
        .nest("/traveling_points", traveling_point_routes)
        .nest("/transports", transport_routes)
        .nest("/traveling_data", traveling_data_routes)
        .nest("/bookings", booking_routes)
        .with_state(state)
}
