use std::{process::ExitCode, time::Duration};

use bevy::{
    app::ScheduleRunnerPlugin,
    log::{Level, LogPlugin},
    prelude::*,
};
use clap::Parser;

mod report;
mod resource;
mod scenario;
mod simulator;

fn main() -> ExitCode {
    let args = scenario::Args::parse();

    let field = match args.build_field() {
        Ok(field) => field,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    App::new()
        .add_plugins(LogPlugin {
            level: if args.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            },
            ..default()
        })
        .add_plugins(ScheduleRunnerPlugin::run_loop(Duration::ZERO))
        .insert_resource(resource::FieldRes::from(field))
        .add_plugins(simulator::Simulator)
        .add_plugins(report::Reporter)
        .run();

    ExitCode::SUCCESS
}
