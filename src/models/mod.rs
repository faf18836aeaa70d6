pub mod attributes;
pub mod person;

pub use attributes::{Color, Country};
pub use person::{
    Coordinates, Location, NewPerson, Person, MAX_COORDINATE_X, MAX_LOCATION_NAME_LEN,
};
