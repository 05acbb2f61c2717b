//! Textual report of the simulation.
//!
//! The cars are listed with their initial state, followed by either the final positions of all
//! cars or the collision that stopped the simulation. The application exits once the report is
//! printed.

use auto_driving_car::domain::{Field, Outcome};
use bevy::{app::AppExit, prelude::*};

use crate::resource::{FieldRes, SimulationRes};

pub struct Reporter;

impl Plugin for Reporter {
    fn build(&self, app: &mut App) {
        app.add_systems(PostUpdate, report);
    }
}

fn report(
    field: Res<FieldRes>,
    simulation: Res<SimulationRes>,
    mut reported: Local<bool>,
    mut exit: EventWriter<AppExit>,
) {
    if *reported {
        return;
    }
    if let Some(outcome) = simulation.outcome() {
        println!("{}\n\n{}", car_list(&field), result(&field, outcome));
        *reported = true;
        exit.send(AppExit);
    }
}

pub fn car_list(field: &Field) -> String {
    let mut lines = vec!["Your current list of cars are:".to_owned()];
    lines.extend(
        field
            .cars()
            .iter()
            .map(|car| format!("- {}", car.initial_info())),
    );
    lines.join("\n")
}

pub fn result(field: &Field, outcome: &Outcome) -> String {
    let mut lines = vec!["After simulation, the result is:".to_owned()];
    match outcome {
        Outcome::Completed { .. } => lines.extend(field.cars().iter().map(|car| {
            format!("- {} {} {}", car.name(), car.position(), car.direction())
        })),
        Outcome::Collision(collision) => {
            for (car, other) in [
                (&collision.car, &collision.other),
                (&collision.other, &collision.car),
            ] {
                lines.push(format!(
                    "- {car}, collides with {other} at {} at step {}.",
                    collision.position, collision.step
                ));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use auto_driving_car::domain::Simulation;
    use bevy::ecs::event::Events;

    use super::*;
    use crate::{scenario::build_field, simulator::Simulator};

    #[test]
    fn test_car_list() {
        let field =
            build_field("10 10", &["A 1 2 N FFRFFFFRRL", "B 7 8 W FFLFFFFFFF"]).unwrap();
        insta::assert_snapshot!(car_list(&field), @r"
Your current list of cars are:
- A, (1, 2) N, FFRFFFFRRL
- B, (7, 8) W, FFLFFFFFFF
");
    }

    #[test]
    fn test_result_completed() {
        let mut field = build_field("10 10", &["A 1 2 N FFRFFFFRRL"]).unwrap();
        let outcome = Simulation::new().run(&mut field);
        insta::assert_snapshot!(result(&field, &outcome), @r"
After simulation, the result is:
- A (5, 4) S
");
    }

    #[test]
    fn test_result_collision() {
        let mut field =
            build_field("10 10", &["A 1 2 N FFRFFFFRRL", "B 7 8 W FFLFFFFFFF"]).unwrap();
        let outcome = Simulation::new().run(&mut field);
        insta::assert_snapshot!(result(&field, &outcome), @r"
After simulation, the result is:
- B, collides with A at (5, 4) at step 7.
- A, collides with B at (5, 4) at step 7.
");
    }

    #[test]
    fn test_report_exits_app_when_finished() {
        let mut app = App::new();
        app.insert_resource(FieldRes::from(build_field("5 5", &["A 0 0 N F"]).unwrap()))
            .add_plugins((Simulator, Reporter));

        app.update();
        assert!(app.world.resource::<Events<AppExit>>().is_empty());

        app.update();
        assert!(!app.world.resource::<Events<AppExit>>().is_empty());
    }
}
