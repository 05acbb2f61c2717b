//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use auto_driving_car::domain;

#[derive(Resource)]
pub struct FieldRes(domain::Field);

impl Deref for FieldRes {
    type Target = domain::Field;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for FieldRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::Field> for FieldRes {
    fn from(value: domain::Field) -> Self {
        Self(value)
    }
}

#[derive(Resource, Default)]
pub struct SimulationRes(domain::Simulation);

impl Deref for SimulationRes {
    type Target = domain::Simulation;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SimulationRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
