//! Basic building blocks.

use std::{fmt, ops::Add};

use super::CarError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    const CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];
    const COUNTER_CLOCKWISE: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    pub fn rotated_left(self) -> Self {
        self.next_in(&Self::COUNTER_CLOCKWISE)
    }

    pub fn rotated_right(self) -> Self {
        self.next_in(&Self::CLOCKWISE)
    }

    /// Unit step taken by a forward move.
    pub fn offset(self) -> Position {
        match self {
            Direction::North => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::South => Position::new(0, -1),
            Direction::West => Position::new(-1, 0),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    fn next_in(self, cycle: &[Direction; 4]) -> Self {
        let idx = cycle
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default();
        cycle[(idx + 1) % cycle.len()]
    }
}

impl TryFrom<&str> for Direction {
    type Error = CarError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "N" => Ok(Direction::North),
            "E" => Ok(Direction::East),
            "S" => Ok(Direction::South),
            "W" => Ok(Direction::West),
            _ => Err(CarError::InvalidDirection(value.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Left,
    Right,
    Forward,
}

impl Command {
    pub fn letter(self) -> char {
        match self {
            Command::Left => 'L',
            Command::Right => 'R',
            Command::Forward => 'F',
        }
    }
}

impl TryFrom<char> for Command {
    type Error = CarError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' => Ok(Command::Left),
            'R' => Ok(Command::Right),
            'F' => Ok(Command::Forward),
            _ => Err(CarError::InvalidCommand(value)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
