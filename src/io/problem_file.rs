//! # Problem files
//!
//! A line based format describing a problem in equality form together with a starting basis:
//!
//! ```text
//! # Comments start with a hash
//! maximize
//! objective 3 2
//! constraint 1 1 = 4
//! basis 1
//! ```
//!
//! The direction (`maximize` or `minimize`), `objective` and `basis` lines appear exactly once,
//! there is a `constraint` line for every constraint.
use std::str::FromStr;

use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;
use crate::data::number_types::traits::Real;
use crate::io::error::{FileLocation, ImportError, ParseError};

/// Parse the contents of a problem file.
///
/// # Errors
///
/// A `ParseError` if the text is not well formed, or `SimplexError::InvalidInput` (wrapped) if
/// the dimensions of its parts don't match.
pub fn parse<F: Real>(program: &str) -> Result<Problem<F>, ImportError> {
    let mut direction = None;
    let mut objective = None;
    let mut constraints = Vec::new();
    let mut basis = None;

    for (line_number, line) in lines(program) {
        let location = (line_number, line);
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else { continue };
        let rest = tokens.collect::<Vec<_>>();

        match keyword.to_ascii_lowercase().as_str() {
            "maximize" | "max" => set_once(&mut direction, Objective::Maximize, "direction", location, &rest)?,
            "minimize" | "min" => set_once(&mut direction, Objective::Minimize, "direction", location, &rest)?,
            "objective" => {
                let values = parse_values::<F>(&rest, location)?;
                set_once(&mut objective, values, "objective", location, &[])?;
            },
            "constraint" => constraints.push(parse_constraint::<F>(&rest, location)?),
            "basis" => {
                let indices = rest.iter()
                    .map(|token| parse_token::<usize>(token, "basis index", location))
                    .collect::<Result<Vec<_>, _>>()?;
                set_once(&mut basis, indices, "basis", location, &[])?;
            },
            other => {
                return Err(ParseError::with_file_location(
                    format!("Unknown keyword \"{}\"", other),
                    location,
                ).into());
            },
        }
    }

    let direction = direction.ok_or_else(|| ParseError::new("Missing \"maximize\" or \"minimize\" line"))?;
    let objective = objective.ok_or_else(|| ParseError::new("Missing \"objective\" line"))?;
    let basis = basis.ok_or_else(|| ParseError::new("Missing \"basis\" line"))?;
    if constraints.is_empty() {
        return Err(ParseError::new("There should be at least one \"constraint\" line").into());
    }

    Ok(Problem::new(constraints, objective, basis, direction)?)
}

/// Numbered, comment stripped, trimmed lines that are not empty.
fn lines(program: &str) -> impl Iterator<Item = FileLocation<'_>> {
    program.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    name: &str,
    location: FileLocation,
    rest: &[&str],
) -> Result<(), ParseError> {
    if !rest.is_empty() {
        return Err(ParseError::with_file_location(
            format!("Unexpected values after the {}", name),
            location,
        ));
    }
    if slot.is_some() {
        return Err(ParseError::with_file_location(
            format!("The {} is specified more than once", name),
            location,
        ));
    }

    *slot = Some(value);
    Ok(())
}

/// Coefficients followed by `=` and the right-hand side.
fn parse_constraint<F: Real>(tokens: &[&str], location: FileLocation) -> Result<Vec<F>, ParseError> {
    match tokens {
        [coefficients @ .., "=", rhs] => {
            let mut row = parse_values(coefficients, location)?;
            row.push(parse_value(rhs, location)?);
            Ok(row)
        },
        _ => Err(ParseError::with_file_location(
            "A constraint should be of the form \"constraint a0 a1 ... = b\"",
            location,
        )),
    }
}

fn parse_values<F: Real>(tokens: &[&str], location: FileLocation) -> Result<Vec<F>, ParseError> {
    tokens.iter().map(|token| parse_value(token, location)).collect()
}

fn parse_value<F: Real>(token: &str, location: FileLocation) -> Result<F, ParseError> {
    let value = parse_token::<f64>(token, "number", location)?;
    F::from_f64(value).ok_or_else(|| ParseError::with_file_location(
        format!("Number \"{}\" can't be represented", token),
        location,
    ))
}

fn parse_token<T: FromStr>(token: &str, kind: &str, location: FileLocation) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::with_file_location(
        format!("Could not parse {} \"{}\"", kind, token),
        location,
    ))
}
