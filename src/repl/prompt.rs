//! Interactive field entry for person records.
//!
//! Every prompt loops on invalid input and aborts cleanly when the active
//! input source signals an interrupt or end-of-input. The prompts read from
//! the top of the input stack, so the same entry sequence works whether a
//! human or a script supplies the values.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::CensusError;
use crate::models::{
    attributes::values_hint, Color, Coordinates, Country, Location, NewPerson, MAX_COORDINATE_X,
    MAX_LOCATION_NAME_LEN,
};
use crate::session::Session;

use super::input::ReadError;

/// Data entry was cut short before all fields were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAbort {
    Interrupted,
    EndOfInput,
}

fn read_line(session: &mut Session, prompt: &str) -> Result<String, EntryAbort> {
    match session.input.read_line(prompt) {
        Ok(line) => Ok(line),
        Err(ReadError::Interrupted) => Err(EntryAbort::Interrupted),
        Err(ReadError::Eof) => Err(EntryAbort::EndOfInput),
        Err(ReadError::Failed(e)) => {
            session.output.error(&format!("input failure: {e}"));
            Err(EntryAbort::EndOfInput)
        }
    }
}

pub fn request_required_string(
    session: &mut Session,
    prompt: &str,
) -> Result<String, EntryAbort> {
    loop {
        let line = read_line(session, prompt)?;
        let line = line.trim();
        if line.is_empty() {
            session.output.error("this field cannot be empty");
            continue;
        }
        return Ok(line.to_string());
    }
}

pub fn request_optional_string(
    session: &mut Session,
    prompt: &str,
    max_len: usize,
) -> Result<Option<String>, EntryAbort> {
    loop {
        let line = read_line(session, prompt)?;
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        if line.chars().count() > max_len {
            session
                .output
                .error(&format!("must not exceed {max_len} characters"));
            continue;
        }
        return Ok(Some(line.to_string()));
    }
}

pub fn request_f64(
    session: &mut Session,
    prompt: &str,
    max: Option<f64>,
) -> Result<f64, EntryAbort> {
    loop {
        let line = read_line(session, prompt)?;
        let line = line.trim();
        if line.is_empty() {
            session.output.error("this field cannot be empty");
            continue;
        }
        match line.parse::<f64>() {
            Ok(value) if !value.is_finite() => {
                session.output.error("enter a finite number");
            }
            Ok(value) => {
                if let Some(max) = max {
                    if value > max {
                        session.output.error(&format!("must not exceed {max}"));
                        continue;
                    }
                }
                return Ok(value);
            }
            Err(_) => session.output.error("enter a decimal number"),
        }
    }
}

pub fn request_f32(session: &mut Session, prompt: &str) -> Result<f32, EntryAbort> {
    loop {
        let line = read_line(session, prompt)?;
        let line = line.trim();
        if line.is_empty() {
            session.output.error("this field cannot be empty");
            continue;
        }
        match line.parse::<f32>() {
            Ok(value) if value.is_finite() => return Ok(value),
            Ok(_) => session.output.error("enter a finite number"),
            Err(_) => session.output.error("enter a decimal number"),
        }
    }
}

pub fn request_i64(
    session: &mut Session,
    prompt: &str,
    min: Option<i64>,
) -> Result<i64, EntryAbort> {
    loop {
        let line = read_line(session, prompt)?;
        let line = line.trim();
        if line.is_empty() {
            session.output.error("this field cannot be empty");
            continue;
        }
        match line.parse::<i64>() {
            Ok(value) => {
                if let Some(min) = min {
                    if value < min {
                        session.output.error(&format!("must be at least {min}"));
                        continue;
                    }
                }
                return Ok(value);
            }
            Err(_) => session.output.error("enter an integer"),
        }
    }
}

/// Prompt for an enumeration value. An empty line means "unset" when
/// `optional` is true; otherwise the prompt repeats.
pub fn request_enum<T>(
    session: &mut Session,
    label: &str,
    values: &[T],
    optional: bool,
) -> Result<Option<T>, EntryAbort>
where
    T: FromStr<Err = CensusError> + Display + Copy,
{
    let hint = values_hint(values);
    let suffix = if optional { "; empty leaves it unset" } else { "" };
    let prompt = format!("{label} ({hint}{suffix}): ");
    loop {
        let line = read_line(session, &prompt)?;
        let line = line.trim();
        if line.is_empty() {
            if optional {
                return Ok(None);
            }
            session.output.error("this field cannot be empty");
            continue;
        }
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(e) => session.output.error(&e.to_string()),
        }
    }
}

/// Run the full person entry sequence.
pub fn request_person(session: &mut Session) -> Result<NewPerson, EntryAbort> {
    session.output.say("Entering person record fields.");
    let name = request_required_string(session, "name (non-empty): ")?;

    session.output.say("Coordinates:");
    let x = request_f64(
        session,
        &format!("  coordinate x (max {MAX_COORDINATE_X}): "),
        Some(MAX_COORDINATE_X),
    )?;
    let y = request_f32(session, "  coordinate y: ")?;
    let coordinates = Coordinates { x, y };

    let height = request_i64(session, "height (integer > 0): ", Some(1))?;

    let eye_color = request_enum(session, "eye color", &Color::ALL, true)?;
    let hair_color = request_enum(session, "hair color", &Color::ALL, true)?;
    let nationality = request_enum(session, "nationality", &Country::ALL, true)?;

    session.output.say("Location:");
    let loc_x = request_f32(session, "  location x: ")?;
    let loc_y = request_f64(session, "  location y: ", None)?;
    let loc_z = request_f64(session, "  location z: ", None)?;
    let loc_name = request_optional_string(
        session,
        &format!("  location name (up to {MAX_LOCATION_NAME_LEN} chars, empty to skip): "),
        MAX_LOCATION_NAME_LEN,
    )?;

    Ok(NewPerson {
        name,
        coordinates,
        height,
        eye_color,
        hair_color,
        nationality,
        location: Location {
            x: loc_x,
            y: loc_y,
            z: loc_z,
            name: loc_name,
        },
    })
}
