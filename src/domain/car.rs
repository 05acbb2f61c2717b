//! Car driving on a grid by executing a queue of single-letter commands.

use std::collections::VecDeque;

use thiserror::Error;

use super::{Command, Direction, HasBounds, HasCollision, Position};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    name: String,
    position: Position,
    direction: Direction,
    commands: VecDeque<Command>,
    initial_info: String,
}

impl Car {
    pub fn new(
        name: &str,
        x: i32,
        y: i32,
        direction: &str,
        commands: &str,
    ) -> Result<Self, CarError> {
        if name.trim().is_empty() {
            return Err(CarError::EmptyName);
        }
        if x < 0 || y < 0 {
            return Err(CarError::NegativePosition { x, y });
        }
        let direction = Direction::try_from(direction)?;
        let commands = commands
            .chars()
            .map(Command::try_from)
            .collect::<Result<VecDeque<_>, _>>()?;
        let position = Position::new(x, y);
        let initial_info = format!(
            "{name}, {position} {direction}, {}",
            commands.iter().map(|c| c.letter()).collect::<String>()
        );

        Ok(Self {
            name: name.to_owned(),
            position,
            direction,
            commands,
            initial_info,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> i32 {
        self.position.x()
    }

    pub fn y(&self) -> i32 {
        self.position.y()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Commands not executed yet, in execution order.
    pub fn commands(&self) -> &VecDeque<Command> {
        &self.commands
    }

    pub fn has_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Summary of the car as it was constructed, e.g. `A, (1, 2) N, LFR`.
    pub fn initial_info(&self) -> &str {
        &self.initial_info
    }

    /// Removes the next command from the queue.
    pub fn next_command(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }

    pub fn rotate_left(&mut self) {
        self.direction = self.direction.rotated_left();
    }

    pub fn rotate_right(&mut self) {
        self.direction = self.direction.rotated_right();
    }

    pub fn move_forward(&mut self) {
        self.position = self.position + self.direction.offset();
    }

    /// A forward move that would leave the bounds is dropped and the car stays where it is.
    pub fn execute_command(&mut self, command: Command, bounds: &dyn HasBounds) {
        match command {
            Command::Left => self.rotate_left(),
            Command::Right => self.rotate_right(),
            Command::Forward => {
                let previous = self.position;
                self.move_forward();
                if !bounds.is_within_bounds(self.x(), self.y()) {
                    self.position = previous;
                }
            }
        }
    }
}

impl HasCollision for Car {
    fn position(&self) -> Position {
        self.position
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarError {
    #[error("car name cannot be empty")]
    EmptyName,
    #[error("car position ({x}, {y}) must not be negative")]
    NegativePosition { x: i32, y: i32 },
    #[error("invalid direction {0:?}, expected one of N, E, S, W")]
    InvalidDirection(String),
    #[error("invalid command {0:?}, expected only L, R, F")]
    InvalidCommand(char),
}
