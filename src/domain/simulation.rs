//! Step-synchronized driving of all cars on a field.
//!
//! In every step each car that still has commands executes exactly one of them, in the order the
//! cars were added to the field. The field is checked for a collision right after every single
//! command, so the first collision stops the simulation before any other car moves.

use super::{Collision, Field};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every command queue is exhausted.
    Completed { steps: usize },
    Collision(Collision),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Simulation {
    step: usize,
    outcome: Option<Outcome>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the last started step, 0 before the first one.
    pub fn step(&self) -> usize {
        self.step
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Runs a single step. Returns the outcome once the simulation is finished; a finished
    /// simulation does not touch the field anymore.
    pub fn advance(&mut self, field: &mut Field) -> Option<&Outcome> {
        if self.outcome.is_none() {
            self.outcome = self.run_step(field);
        }
        self.outcome.as_ref()
    }

    pub fn run(mut self, field: &mut Field) -> Outcome {
        loop {
            if let Some(outcome) = self.advance(field) {
                return outcome.clone();
            }
        }
    }

    fn run_step(&mut self, field: &mut Field) -> Option<Outcome> {
        if !field.has_pending_commands() {
            return Some(Outcome::Completed { steps: self.step });
        }

        self.step += 1;

        for idx in 0..field.cars().len() {
            if field.execute_next_command(idx).is_none() {
                continue;
            }

            let car = &field.cars()[idx];
            if let Some(other) = field.detect_collision(car) {
                return Some(Outcome::Collision(Collision {
                    car: car.name().to_owned(),
                    other: other.name().to_owned(),
                    position: car.position(),
                    step: self.step,
                }));
            }
        }

        None
    }
}
