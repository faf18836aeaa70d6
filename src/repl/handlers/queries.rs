//! Read-only verbs over the collection.

use crate::models::{Color, Person};
use crate::repl::command::{Command, CommandResult};
use crate::repl::prompt;
use crate::repl::registry::CommandRegistry;
use crate::session::Session;

use super::crud::abort_result;

const PERSON_HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Coordinates",
    "Height",
    "Eye",
    "Hair",
    "Nationality",
    "Location",
    "Created",
];

fn opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn person_row(p: &Person) -> Vec<String> {
    vec![
        p.id.to_string(),
        p.name.clone(),
        format!("({}, {})", p.coordinates.x, p.coordinates.y),
        p.height.to_string(),
        opt(p.eye_color),
        opt(p.hair_color),
        opt(p.nationality),
        format!(
            "({}, {}, {}){}",
            p.location.x,
            p.location.y,
            p.location.z,
            p.location
                .name
                .as_deref()
                .map_or_else(String::new, |n| format!(" {n}"))
        ),
        p.creation_date.format("%Y-%m-%d %H:%M:%S").to_string(),
    ]
}

pub struct Info;

impl Command for Info {
    fn run(
        &self,
        _args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        session.output.say(&session.collection.describe());
        CommandResult::ok()
    }

    fn description(&self) -> &'static str {
        "show collection kind, initialization time, and size"
    }
}

pub struct Show;

impl Command for Show {
    fn run(
        &self,
        _args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        if session.collection.is_empty() {
            return CommandResult::success("the collection is empty");
        }
        let rows = session.collection.iter().map(person_row).collect();
        session.output.table(&PERSON_HEADERS, rows);
        CommandResult::ok()
    }

    fn description(&self) -> &'static str {
        "list every record in id order"
    }
}

pub struct AverageOfHeight;

impl Command for AverageOfHeight {
    fn run(
        &self,
        _args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let average = session.collection.average_height();
        CommandResult::success(format!("average height: {average:.2}"))
    }

    fn description(&self) -> &'static str {
        "print the arithmetic mean of the height field"
    }
}

/// Parse a hair-color argument: the literal `null` selects records with no
/// color set.
fn parse_color_arg(raw: &str) -> Result<Option<Color>, CommandResult> {
    if raw.eq_ignore_ascii_case("null") {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|e: crate::CensusError| CommandResult::error(e.to_string()))
}

pub struct CountByHairColor;

impl Command for CountByHairColor {
    fn run(
        &self,
        args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let color = match args {
            Some(raw) => match parse_color_arg(raw) {
                Ok(color) => color,
                Err(result) => return result,
            },
            None => match prompt::request_enum(session, "hair color", &Color::ALL, true) {
                Ok(color) => color,
                Err(abort) => return abort_result(abort, "count_by_hair_color"),
            },
        };
        let count = session.collection.count_by_hair_color(color);
        let label = color.map_or_else(|| "unset".to_string(), |c| c.to_string());
        CommandResult::success(format!("{count} record(s) with hair color {label}"))
    }

    fn description(&self) -> &'static str {
        "count records by hair color ('null' counts the unset ones)"
    }
}

pub struct FilterLessThanHairColor;

impl Command for FilterLessThanHairColor {
    fn run(
        &self,
        args: Option<&str>,
        _registry: &CommandRegistry,
        session: &mut Session,
    ) -> CommandResult {
        let color = match args {
            Some(raw) => match raw.parse::<Color>() {
                Ok(color) => Some(color),
                Err(e) => return CommandResult::error(e.to_string()),
            },
            None => {
                match prompt::request_enum(session, "hair color", &Color::ALL, false) {
                    Ok(color) => color,
                    Err(abort) => return abort_result(abort, "filter_less_than_hair_color"),
                }
            }
        };
        let matches = session.collection.filter_less_than_hair_color(color);
        let count = matches.len();
        let rows = matches.into_iter().map(person_row).collect();
        session.output.table(&PERSON_HEADERS, rows);
        CommandResult::success(format!("{count} record(s) matched"))
    }

    fn description(&self) -> &'static str {
        "list records whose hair color orders below the given one"
    }
}
