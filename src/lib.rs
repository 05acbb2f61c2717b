//! Discrete-step simulation of cars driving on a bounded grid.

#[cfg(test)]
mod tests;

pub mod domain;
