//! A seesaw that tilts by torque balance.
//!
//! The core ([`mapper`], [`model`], [`weight`]) is independent of any
//! renderer. [`widget`] and [`graphics`] drive it from a terminal.

pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod mapper;
pub mod math;
pub mod model;
pub mod state;
pub mod weight;
pub mod widget;

pub use error::{Error, Result};
pub use mapper::map_to_plank;
pub use model::{aggregate, angle_for, PlacedObject, PlankModel, Preview, Totals};
pub use weight::{CyclingWeights, RandomWeights, Weight, WeightSource};
