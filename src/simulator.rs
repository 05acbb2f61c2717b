//! Simulation of the cars on the field.
//!
//! Every update runs one simulation step. Once the simulation is finished the field is left
//! untouched.

use auto_driving_car::domain::Outcome;
use bevy::prelude::*;

use crate::resource::{FieldRes, SimulationRes};

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationRes>()
            .add_systems(Update, simulate);
    }
}

fn simulate(mut field: ResMut<FieldRes>, mut simulation: ResMut<SimulationRes>) {
    if simulation.is_finished() {
        return;
    }

    let outcome = simulation.advance(&mut field).cloned();
    match outcome {
        None => debug!("step {} done", simulation.step()),
        Some(Outcome::Completed { steps }) => {
            info!("all commands executed after {steps} steps")
        }
        Some(Outcome::Collision(collision)) => info!(
            "car {} collided with car {} at {} in step {}",
            collision.car, collision.other, collision.position, collision.step
        ),
    }
}

#[cfg(test)]
mod tests {
    use auto_driving_car::domain::{Collision, Position};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::scenario::build_field;

    fn app(field: &str, cars: &[&str]) -> App {
        let mut app = App::new();
        app.insert_resource(FieldRes::from(build_field(field, cars).unwrap()))
            .add_plugins(Simulator);
        app
    }

    #[test]
    fn test_simulator_runs_one_step_per_update() {
        let mut app = app("5 5", &["A 0 0 N FF", "B 1 1 E FF"]);

        app.update();
        assert_eq!(app.world.resource::<SimulationRes>().step(), 1);
        let field = app.world.resource::<FieldRes>();
        assert_eq!(field.car("A").unwrap().position(), Position::new(0, 1));
        assert_eq!(field.car("B").unwrap().position(), Position::new(2, 1));

        app.update();
        app.update();
        let simulation = app.world.resource::<SimulationRes>();
        assert_eq!(simulation.outcome(), Some(&Outcome::Completed { steps: 2 }));

        let field = app.world.resource::<FieldRes>();
        assert_eq!(field.car("A").unwrap().position(), Position::new(0, 2));
        assert_eq!(field.car("B").unwrap().position(), Position::new(3, 1));
    }

    #[test]
    fn test_simulator_stops_on_collision() {
        let mut app = app("5 5", &["A 0 0 N FF", "B 0 1 S FF"]);

        for _ in 0..5 {
            app.update();
        }

        let simulation = app.world.resource::<SimulationRes>();
        assert_eq!(simulation.step(), 1);
        assert_eq!(
            simulation.outcome(),
            Some(&Outcome::Collision(Collision {
                car: "A".into(),
                other: "B".into(),
                position: Position::new(0, 1),
                step: 1,
            }))
        );
        let field = app.world.resource::<FieldRes>();
        assert_eq!(field.car("B").unwrap().position(), Position::new(0, 1));
    }
}
