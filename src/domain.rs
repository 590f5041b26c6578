use chrono::{Local, NaiveDate};

use crate::entities::traveling_point;
use crate::error::{AppError, AppResult};

/// Travel window of an offering. The constructor is the only way to build
/// one, so a `DateRange` in hand is always ordered and not in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl DateRange {
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> AppResult<Self> {
        if from_date >= to_date || from_date < Local::now().date_naive() {
            return Err(AppError::FailedInitialization("Invalid dates".to_string()));
        }

        Ok(Self { from_date, to_date })
    }
}

/// Departure/destination pair of an offering. Equal points (by value) are
/// rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartureDestination {
    pub departure_point: traveling_point::Model,
    pub destination_point: traveling_point::Model,
}

impl DepartureDestination {
    pub fn new(
        departure_point: traveling_point::Model,
        destination_point: traveling_point::Model,
    ) -> AppResult<Self> {
        if departure_point == destination_point {
            return Err(AppError::FailedInitialization(
                "Departure point can not be the same as destination point".to_string(),
            ));
        }

        Ok(Self {
            departure_point,
            destination_point,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn point(id: i64, name: &str) -> traveling_point::Model {
        traveling_point::Model {
            id,
            name: name.to_string(),
            longitude: 21.43,
            latitude: 42.0,
        }
    }

    #[test]
    fn accepts_ordered_future_dates() {
        let range = DateRange::new(date(2030, 1, 1), date(2030, 1, 2)).unwrap();
        assert_eq!(range.from_date, date(2030, 1, 1));
    }

    #[test]
    fn rejects_reversed_equal_or_past_dates() {
        assert!(DateRange::new(date(2030, 1, 2), date(2030, 1, 1)).is_err());
        assert!(DateRange::new(date(2030, 1, 1), date(2030, 1, 1)).is_err());
        assert!(DateRange::new(date(2020, 1, 1), date(2030, 1, 1)).is_err());
    }

    #[test]
    fn rejects_equal_departure_and_destination() {
        let err = DepartureDestination::new(point(1, "Skopje"), point(1, "Skopje")).unwrap_err();
        assert!(matches!(err, AppError::FailedInitialization(_)));
        assert_eq!(
            err.to_string(),
            "Departure point can not be the same as destination point"
        );
    }

    #[test]
    fn accepts_distinct_points() {
        let pair = DepartureDestination::new(point(1, "Skopje"), point(2, "Paris")).unwrap();
        assert_eq!(pair.departure_point.id, 1);
        assert_eq!(pair.destination_point.id, 2);
    }
}
