//! The person record and its composite parts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::attributes::{Color, Country};
use crate::error::CensusError;

/// Largest value accepted for the X coordinate.
pub const MAX_COORDINATE_X: f64 = 348.0;

/// Longest accepted location name, in characters.
pub const MAX_LOCATION_NAME_LEN: usize = 400;

/// 2-D position of a person record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f32,
}

impl Coordinates {
    pub fn new(x: f64, y: f32) -> Result<Self, CensusError> {
        check_coordinate_x(x)?;
        check_finite("coordinate y", f64::from(y))?;
        Ok(Self { x, y })
    }
}

/// Named 3-D location of a person record.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub x: f32,
    pub y: f64,
    pub z: f64,
    pub name: Option<String>,
}

impl Location {
    pub fn new(x: f32, y: f64, z: f64, name: Option<String>) -> Result<Self, CensusError> {
        check_finite("location x", f64::from(x))?;
        check_finite("location y", y)?;
        check_finite("location z", z)?;
        if let Some(name) = &name {
            check_location_name(name)?;
        }
        Ok(Self { x, y, z, name })
    }
}

/// Person record as held in the collection and on disk.
///
/// The identifier and creation timestamp are assigned by the collection on
/// insertion and never change afterwards.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub coordinates: Coordinates,
    pub creation_date: DateTime<Utc>,
    pub height: i64,
    pub eye_color: Option<Color>,
    pub hair_color: Option<Color>,
    pub nationality: Option<Country>,
    pub location: Location,
}

impl Person {
    /// Re-checks every invariant. Deserialization bypasses the validating
    /// constructors, so the store calls this on each loaded record.
    pub fn validate(&self) -> Result<(), CensusError> {
        if self.id <= 0 {
            return Err(CensusError::Validation(format!(
                "identifier must be positive, got {}",
                self.id
            )));
        }
        check_name(&self.name)?;
        check_coordinate_x(self.coordinates.x)?;
        check_finite("coordinate y", f64::from(self.coordinates.y))?;
        check_height(self.height)?;
        check_finite("location x", f64::from(self.location.x))?;
        check_finite("location y", self.location.y)?;
        check_finite("location z", self.location.z)?;
        if let Some(name) = &self.location.name {
            check_location_name(name)?;
        }
        Ok(())
    }
}

/// Field values for a record that has not been assigned an identifier yet.
///
/// Produced by data entry, consumed by [`crate::collection::PersonCollection`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub name: String,
    pub coordinates: Coordinates,
    pub height: i64,
    pub eye_color: Option<Color>,
    pub hair_color: Option<Color>,
    pub nationality: Option<Country>,
    pub location: Location,
}

impl NewPerson {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        coordinates: Coordinates,
        height: i64,
        eye_color: Option<Color>,
        hair_color: Option<Color>,
        nationality: Option<Country>,
        location: Location,
    ) -> Result<Self, CensusError> {
        let name = name.into();
        check_name(&name)?;
        check_height(height)?;
        Ok(Self {
            name,
            coordinates,
            height,
            eye_color,
            hair_color,
            nationality,
            location,
        })
    }

    /// Promote to a full record with the assigned identity.
    pub fn into_person(self, id: i64, creation_date: DateTime<Utc>) -> Person {
        Person {
            id,
            name: self.name,
            coordinates: self.coordinates,
            creation_date,
            height: self.height,
            eye_color: self.eye_color,
            hair_color: self.hair_color,
            nationality: self.nationality,
            location: self.location,
        }
    }
}

fn check_name(name: &str) -> Result<(), CensusError> {
    if name.trim().is_empty() {
        return Err(CensusError::Validation("name cannot be empty".into()));
    }
    Ok(())
}

fn check_coordinate_x(x: f64) -> Result<(), CensusError> {
    check_finite("coordinate x", x)?;
    if x > MAX_COORDINATE_X {
        return Err(CensusError::Validation(format!(
            "coordinate x must not exceed {MAX_COORDINATE_X}, got {x}"
        )));
    }
    Ok(())
}

// JSON has no representation for NaN or the infinities; serde_json writes
// them as null, which a later load cannot read back into a plain float.
fn check_finite(field: &str, value: f64) -> Result<(), CensusError> {
    if !value.is_finite() {
        return Err(CensusError::Validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

fn check_height(height: i64) -> Result<(), CensusError> {
    if height <= 0 {
        return Err(CensusError::Validation(format!(
            "height must be greater than zero, got {height}"
        )));
    }
    Ok(())
}

fn check_location_name(name: &str) -> Result<(), CensusError> {
    if name.chars().count() > MAX_LOCATION_NAME_LEN {
        return Err(CensusError::Validation(format!(
            "location name must not exceed {MAX_LOCATION_NAME_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> Location {
        Location {
            x: 1.0,
            y: 2.0,
            z: 3.0,
            name: None,
        }
    }

    #[test]
    fn coordinate_x_is_capped() {
        assert!(Coordinates::new(348.0, 0.0).is_ok());
        assert!(Coordinates::new(348.5, 0.0).is_err());
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Coordinates::new(0.0, f32::NAN).is_err());
        assert!(Location::new(f32::INFINITY, 0.0, 0.0, None).is_err());
        assert!(Location::new(0.0, f64::NAN, 0.0, None).is_err());
    }

    #[test]
    fn validate_catches_non_finite_fields() {
        let mut person = NewPerson::new(
            "Ada",
            Coordinates { x: 0.0, y: 0.0 },
            180,
            None,
            None,
            None,
            location(),
        )
        .unwrap()
        .into_person(1, Utc::now());
        assert!(person.validate().is_ok());
        person.location.z = f64::NAN;
        assert!(person.validate().is_err());
    }

    #[test]
    fn location_name_length_is_capped() {
        assert!(Location::new(0.0, 0.0, 0.0, Some("x".repeat(400))).is_ok());
        assert!(Location::new(0.0, 0.0, 0.0, Some("x".repeat(401))).is_err());
        assert!(Location::new(0.0, 0.0, 0.0, None).is_ok());
    }

    #[test]
    fn new_person_rejects_bad_fields() {
        let coords = Coordinates { x: 0.0, y: 0.0 };
        assert!(NewPerson::new("  ", coords.clone(), 180, None, None, None, location()).is_err());
        assert!(NewPerson::new("Ada", coords.clone(), 0, None, None, None, location()).is_err());
        assert!(NewPerson::new("Ada", coords, 180, None, None, None, location()).is_ok());
    }

    #[test]
    fn validate_catches_nonpositive_id() {
        let person = NewPerson::new(
            "Ada",
            Coordinates { x: 0.0, y: 0.0 },
            180,
            None,
            None,
            None,
            location(),
        )
        .unwrap()
        .into_person(0, Utc::now());
        assert!(person.validate().is_err());
    }
}
