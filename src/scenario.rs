//! Command line input describing the field and the cars placed on it.

use auto_driving_car::domain::{Car, CarError, Field, FieldError};
use clap::Parser;
use thiserror::Error;

/// Simulates cars driving on a grid and reports where they end up or collide.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Field size in "<width> <height>" format
    #[arg(short, long, value_name = "SIZE", allow_hyphen_values = true)]
    pub field: String,

    /// Car in "<name> <x> <y> <direction> [commands]" format, e.g. "A 1 2 N FFRFF"
    #[arg(short, long = "car", value_name = "CAR", allow_hyphen_values = true)]
    pub cars: Vec<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn build_field(&self) -> Result<Field, ScenarioError> {
        build_field(&self.field, &self.cars)
    }
}

/// Creates the field and adds the cars in the given order.
pub fn build_field<S: AsRef<str>>(field: &str, cars: &[S]) -> Result<Field, ScenarioError> {
    let mut field = parse_field(field)?;
    for car in cars {
        field.add_car(parse_car(car.as_ref())?)?;
    }
    Ok(field)
}

fn parse_field(input: &str) -> Result<Field, ScenarioError> {
    let malformed = || ScenarioError::MalformedField(input.to_owned());
    let values = input
        .split_whitespace()
        .map(|v| v.parse::<i32>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;
    match values[..] {
        [width, height] => Ok(Field::new(width, height)?),
        _ => Err(malformed()),
    }
}

fn parse_car(input: &str) -> Result<Car, ScenarioError> {
    let malformed = || ScenarioError::MalformedCar(input.to_owned());
    let tokens = input.split_whitespace().collect::<Vec<_>>();
    let (name, x, y, direction, commands) = match tokens[..] {
        [name, x, y, direction] => (name, x, y, direction, ""),
        [name, x, y, direction, commands] => (name, x, y, direction, commands),
        _ => return Err(malformed()),
    };
    let x = x.parse::<i32>().map_err(|_| malformed())?;
    let y = y.parse::<i32>().map_err(|_| malformed())?;
    Ok(Car::new(name, x, y, direction, commands)?)
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("invalid field {0:?}, expected two integers separated by a space")]
    MalformedField(String),
    #[error("invalid car {0:?}, expected <name> <x> <y> <direction> [commands]")]
    MalformedCar(String),
    #[error(transparent)]
    Car(#[from] CarError),
    #[error(transparent)]
    Field(#[from] FieldError),
}
