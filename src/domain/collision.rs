//! Collision detection on grid cells.

use super::Position;

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.position() == other.position()
    }

    fn position(&self) -> Position;
}

/// Two cars sharing a cell, as detected right after `car` executed a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub car: String,
    pub other: String,
    pub position: Position,
    /// 1-based simulation step.
    pub step: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(Position);

    impl HasCollision for Marker {
        fn position(&self) -> Position {
            self.0
        }
    }

    #[test]
    fn test_has_collision() {
        let a = Marker(Position::new(1, 1));
        let b = Marker(Position::new(1, 1));
        let c = Marker(Position::new(1, 2));
        assert!(a.has_collision(&b));
        assert!(b.has_collision(&a));
        assert!(!a.has_collision(&c));
    }
}
