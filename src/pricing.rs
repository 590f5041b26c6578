use crate::entities::transport::{FareClass, TransportKind};
use crate::entities::traveling_point;
use crate::error::{AppError, AppResult};
use crate::utils::geo::haversine_distance;

const AIRPLANE_AVG_SPEED_KMH: f64 = 850.5;
const BUS_AVG_SPEED_KMH: f64 = 120.5;

/// Per-minute price factor applied after dividing by the fare coefficient.
const PRICE_FACTOR: f64 = 0.05;

impl TransportKind {
    pub fn average_speed_kmh(self) -> f64 {
        match self {
            TransportKind::Airplane => AIRPLANE_AVG_SPEED_KMH,
            TransportKind::Bus => BUS_AVG_SPEED_KMH,
        }
    }
}

impl FareClass {
    pub fn price_coefficient(self) -> f64 {
        match self {
            FareClass::First => 0.1,
            FareClass::Business => 0.2,
            FareClass::Economy => 0.4,
        }
    }
}

/// Travel time of an offering, always within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelDuration {
    pub hours: u32,
    pub minutes: u32,
}

/// Converts a distance into a travel duration for the given transport kind.
/// Routes that would take 24 hours or more are rejected: an offering must fit
/// a same-day travel window.
pub fn travel_duration(kind: TransportKind, distance_km: f64) -> AppResult<TravelDuration> {
    let raw_hours = distance_km / kind.average_speed_kmh();
    let hours = raw_hours.floor();
    let minutes = ((raw_hours - hours) * 60.0).floor();

    if hours >= 24.0 {
        return Err(AppError::FailedInitialization(
            "Improper transport".to_string(),
        ));
    }

    Ok(TravelDuration {
        hours: hours as u32,
        minutes: minutes as u32,
    })
}

pub fn duration_between(
    kind: TransportKind,
    departure: &traveling_point::Model,
    destination: &traveling_point::Model,
) -> AppResult<TravelDuration> {
    let distance_km = haversine_distance(
        departure.latitude,
        departure.longitude,
        destination.latitude,
        destination.longitude,
    );

    travel_duration(kind, distance_km)
}

/// Price of a single ticket, rounded to two fractional digits.
pub fn ticket_price(fare_class: FareClass, duration: TravelDuration) -> f64 {
    let total_minutes = (duration.hours * 60 + duration.minutes) as f64;

    round_to_cents((total_minutes / fare_class.price_coefficient()) * PRICE_FACTOR)
}

/// Derived price of an offering from its fare class, transport kind and the
/// two endpoints. Deterministic: equal inputs always yield the same price.
pub fn offering_price(
    fare_class: FareClass,
    kind: TransportKind,
    departure: &traveling_point::Model,
    destination: &traveling_point::Model,
) -> AppResult<f64> {
    let duration = duration_between(kind, departure, destination)?;

    Ok(ticket_price(fare_class, duration))
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: i64, name: &str, latitude: f64, longitude: f64) -> traveling_point::Model {
        traveling_point::Model {
            id,
            name: name.to_string(),
            longitude,
            latitude,
        }
    }

    #[test]
    fn bus_duration_splits_fractional_hours_into_minutes() {
        // 150.625 km at 120.5 km/h is exactly 1.25 h: one hour and 15 minutes.
        let duration = travel_duration(TransportKind::Bus, 150.625).unwrap();
        assert_eq!(
            duration,
            TravelDuration {
                hours: 1,
                minutes: 15
            }
        );
    }

    #[test]
    fn exact_hours_have_zero_minutes() {
        let duration = travel_duration(TransportKind::Bus, 120.5).unwrap();
        assert_eq!(
            duration,
            TravelDuration {
                hours: 1,
                minutes: 0
            }
        );
    }

    #[test]
    fn day_long_routes_are_rejected() {
        // 24 h on a bus at 120.5 km/h.
        let err = travel_duration(TransportKind::Bus, 120.5 * 24.0).unwrap_err();
        assert!(matches!(err, AppError::FailedInitialization(_)));
        assert_eq!(err.to_string(), "Improper transport");
    }

    #[test]
    fn airplanes_are_faster_than_buses() {
        let by_air = travel_duration(TransportKind::Airplane, 850.5).unwrap();
        let by_bus = travel_duration(TransportKind::Bus, 850.5).unwrap();

        assert_eq!(by_air.hours, 1);
        assert!(by_bus.hours > by_air.hours);
    }

    #[test]
    fn price_formula_matches_fare_coefficients() {
        let duration = TravelDuration {
            hours: 2,
            minutes: 30,
        };

        // ((H * 60 + M) / k) * 0.05
        assert_eq!(ticket_price(FareClass::First, duration), 75.0);
        assert_eq!(ticket_price(FareClass::Business, duration), 37.5);
        assert_eq!(ticket_price(FareClass::Economy, duration), 18.75);
    }

    #[test]
    fn price_decreases_with_cheaper_fare_class() {
        let duration = TravelDuration {
            hours: 3,
            minutes: 12,
        };

        let first = ticket_price(FareClass::First, duration);
        let business = ticket_price(FareClass::Business, duration);
        let economy = ticket_price(FareClass::Economy, duration);

        assert!(first > business);
        assert!(business > economy);
    }

    #[test]
    fn offering_price_is_deterministic() {
        let skopje = point(1, "Skopje", 42.00, 21.43);
        let paris = point(2, "Paris", 48.86, 2.35);

        let first = offering_price(FareClass::First, TransportKind::Bus, &skopje, &paris).unwrap();
        let second = offering_price(FareClass::First, TransportKind::Bus, &skopje, &paris).unwrap();

        assert_eq!(first, second);
        assert!(first > 0.0);
        // Rounded to two fractional digits at the boundary.
        assert_eq!(first, (first * 100.0).round() / 100.0);
    }
}
