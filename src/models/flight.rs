//! Flight record and identifier types.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

// == Flight Id ==
/// Opaque identifier of a flight record.
///
/// Assigned by the store on insert and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FlightId(Uuid);

impl FlightId {
    /// Generates a fresh random identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The placeholder carried by records that have not been stored yet.
    pub fn unassigned() -> Self {
        Self(Uuid::nil())
    }

    /// Returns true if no identifier has been assigned yet.
    pub fn is_unassigned(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// == Flight ==
/// A flight record. Updated only by replacing the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    pub id: FlightId,
    pub origin: String,
    pub destination: String,
}

impl Flight {
    /// Creates a record awaiting an identifier from the store.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            id: FlightId::unassigned(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Creates a record with a known identifier, e.g. for an update.
    pub fn with_id(
        id: FlightId,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id,
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_flight_is_unassigned() {
        let flight = Flight::new("A", "B");
        assert!(flight.id.is_unassigned());
        assert_eq!(flight.origin, "A");
        assert_eq!(flight.destination, "B");
    }

    #[test]
    fn test_random_ids_are_distinct() {
        let a = FlightId::new_random();
        let b = FlightId::new_random();
        assert_ne!(a, b);
        assert!(!a.is_unassigned());
    }

    #[test]
    fn test_equality_is_by_fields() {
        let id = FlightId::new_random();
        assert_eq!(Flight::with_id(id, "A", "B"), Flight::with_id(id, "A", "B"));
        assert_ne!(Flight::with_id(id, "A", "B"), Flight::with_id(id, "A", "C"));
    }

    #[test]
    fn test_flight_id_serializes_as_plain_uuid() {
        let id = FlightId::new_random();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
