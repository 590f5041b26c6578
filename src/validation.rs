use chrono::{Local, NaiveDate};

use crate::entities::transport::FareClass;
use crate::error::{AppError, AppResult};

const USERNAME_MIN_LEN: usize = 4;
const USERNAME_MAX_LEN: usize = 32;
const PASSWORD_MIN_LEN: usize = 8;
const POINT_NAME_MIN_LEN: usize = 3;
const POINT_NAME_MAX_LEN: usize = 64;
const COORDINATE_MIN_DEG: f64 = -90.0;
const COORDINATE_MAX_DEG: f64 = 90.0;

pub fn validate_id(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::InvalidArgument("Invalid id".to_string()));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> AppResult<()> {
    let len = username.chars().count();

    if username.is_empty() || len < USERNAME_MIN_LEN || len > USERNAME_MAX_LEN {
        return Err(AppError::InvalidArgument("Invalid username".to_string()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> AppResult<()> {
    if email.is_empty() {
        return Err(AppError::InvalidArgument("Invalid email".to_string()));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> AppResult<()> {
    if password.is_empty() {
        return Err(AppError::InvalidArgument("Invalid password".to_string()));
    }
    Ok(())
}

/// Stricter check applied when a password is being set, not merely presented.
pub fn validate_new_password(password: &str) -> AppResult<()> {
    if password.is_empty() || password.chars().count() < PASSWORD_MIN_LEN {
        return Err(AppError::InvalidArgument("Invalid password".to_string()));
    }
    Ok(())
}

pub fn validate_point_name(name: &str) -> AppResult<()> {
    let len = name.chars().count();

    if name.is_empty() || len < POINT_NAME_MIN_LEN || len > POINT_NAME_MAX_LEN {
        return Err(AppError::InvalidArgument("Invalid name".to_string()));
    }
    Ok(())
}

pub fn validate_coordinates(longitude: f64, latitude: f64) -> AppResult<()> {
    if !longitude.is_finite() || !(COORDINATE_MIN_DEG..=COORDINATE_MAX_DEG).contains(&longitude) {
        return Err(AppError::InvalidArgument("Invalid longitude".to_string()));
    }
    if !latitude.is_finite() || !(COORDINATE_MIN_DEG..=COORDINATE_MAX_DEG).contains(&latitude) {
        return Err(AppError::InvalidArgument("Invalid latitude".to_string()));
    }
    Ok(())
}

pub fn validate_tickets_count(count: i32) -> AppResult<()> {
    if count <= 0 {
        return Err(AppError::InvalidArgument(
            "Invalid tickets count".to_string(),
        ));
    }
    Ok(())
}

/// Parses a fare class from its canonical uppercase name, e.g. a path
/// parameter such as `FIRST`.
pub fn parse_fare_class(value: &str) -> AppResult<FareClass> {
    if value.is_empty() {
        return Err(AppError::InvalidArgument(
            "Invalid transport class".to_string(),
        ));
    }

    match value {
        "FIRST" => Ok(FareClass::First),
        "BUSINESS" => Ok(FareClass::Business),
        "ECONOMY" => Ok(FareClass::Economy),
        _ => Err(AppError::InvalidArgument(
            "Invalid transport class name".to_string(),
        )),
    }
}

/// Date-pair check used by the update paths, where the window is not rebuilt
/// through the `DateRange` constructor.
pub fn validate_dates(from_date: NaiveDate, to_date: NaiveDate) -> AppResult<()> {
    if from_date >= to_date || from_date < Local::now().date_naive() {
        return Err(AppError::InvalidArgument(
            "Invalid from and to dates".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_must_be_positive() {
        assert!(validate_id(1).is_ok());
        assert!(validate_id(0).is_err());
        assert!(validate_id(-3).is_err());
    }

    #[test]
    fn username_bounds() {
        assert!(validate_username("anna").is_ok());
        assert!(validate_username("abc").is_err());
        assert!(validate_username("").is_err());
        assert!(validate_username(&"x".repeat(33)).is_err());
    }

    #[test]
    fn new_password_requires_eight_chars() {
        assert!(validate_new_password("longenough").is_ok());
        assert!(validate_new_password("short").is_err());
        assert!(validate_password("short").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn point_name_bounds() {
        assert!(validate_point_name("Ohrid").is_ok());
        assert!(validate_point_name("ab").is_err());
        assert!(validate_point_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn coordinates_share_the_same_bound() {
        assert!(validate_coordinates(21.43, 42.0).is_ok());
        assert!(validate_coordinates(-90.0, 90.0).is_ok());
        assert!(validate_coordinates(90.01, 0.0).is_err());
        assert!(validate_coordinates(0.0, -90.01).is_err());
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn fare_class_names_are_exact() {
        assert_eq!(parse_fare_class("FIRST").unwrap(), FareClass::First);
        assert_eq!(parse_fare_class("BUSINESS").unwrap(), FareClass::Business);
        assert_eq!(parse_fare_class("ECONOMY").unwrap(), FareClass::Economy);
        assert!(parse_fare_class("first").is_err());
        assert!(parse_fare_class("").is_err());
    }

    #[test]
    fn tickets_count_must_be_positive() {
        assert!(validate_tickets_count(1).is_ok());
        assert!(validate_tickets_count(0).is_err());
        assert!(validate_tickets_count(-5).is_err());
    }
}
