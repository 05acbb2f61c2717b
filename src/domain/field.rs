//! Bounded grid holding the cars.

use thiserror::Error;

use super::{Car, Command, HasCollision, Position};

pub trait HasBounds {
    fn is_within_bounds(&self, x: i32, y: i32) -> bool;
}

/// Half-open coordinate range `[0, width) x [0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Result<Self, FieldError> {
        if width <= 0 || height <= 0 {
            return Err(FieldError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl HasBounds for Bounds {
    fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    bounds: Bounds,
    cars: Vec<Car>,
}

impl Field {
    pub fn new(width: i32, height: i32) -> Result<Self, FieldError> {
        Ok(Self {
            bounds: Bounds::new(width, height)?,
            cars: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Cars in insertion order.
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, name: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.name() == name)
    }

    pub fn has_pending_commands(&self) -> bool {
        self.cars.iter().any(Car::has_commands)
    }

    pub fn add_car(&mut self, car: Car) -> Result<(), FieldError> {
        if self.car(car.name()).is_some() {
            return Err(FieldError::DuplicateName(car.name().to_owned()));
        }
        if !self.is_within_bounds(car.x(), car.y()) {
            return Err(FieldError::OutOfBounds {
                name: car.name().to_owned(),
                position: car.position(),
            });
        }
        if let Some(occupant) = self.detect_collision(&car) {
            return Err(FieldError::PositionOccupied {
                name: car.name().to_owned(),
                position: car.position(),
                occupant: occupant.name().to_owned(),
            });
        }
        self.cars.push(car);
        Ok(())
    }

    /// Returns the first other car sharing the cell of `car`. Cars are told apart by identity,
    /// so `car` may itself be an element of the field.
    pub fn detect_collision(&self, car: &Car) -> Option<&Car> {
        self.cars
            .iter()
            .find(|c| !std::ptr::eq(*c, car) && c.has_collision(car))
    }

    /// Pops the next command of the car at `idx` and executes it against the field bounds.
    pub fn execute_next_command(&mut self, idx: usize) -> Option<Command> {
        let bounds = self.bounds;
        let car = self.cars.get_mut(idx)?;
        let command = car.next_command()?;
        car.execute_command(command, &bounds);
        Some(command)
    }
}

impl HasBounds for Field {
    fn is_within_bounds(&self, x: i32, y: i32) -> bool {
        self.bounds.is_within_bounds(x, y)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("field size {width} x {height} is invalid, width and height must be greater than 0")]
    InvalidSize { width: i32, height: i32 },
    #[error("car name {0:?} already exists")]
    DuplicateName(String),
    #[error("position {position} of car {name:?} is out of bounds")]
    OutOfBounds { name: String, position: Position },
    #[error("position {position} of car {name:?} is already occupied by car {occupant:?}")]
    PositionOccupied {
        name: String,
        position: Position,
        occupant: String,
    },
}
