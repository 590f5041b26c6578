pub mod bookings;
pub mod transports;
pub mod traveling_data;
pub mod traveling_points;
pub mod users;
