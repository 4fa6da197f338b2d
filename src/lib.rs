#![warn(clippy::all)]

mod board;
mod config;
mod coords;
mod engine;
mod error;
mod seed;
mod shapes;
mod simulation;
mod topology;

pub use board::Board;
pub use config::Config;
pub use coords::Dimensions;
pub use engine::{next_state, step, step_par};
pub use error::{Error, Result};
pub use seed::{from_coordinates, random_board, stamp_shape, Seed};
pub use shapes::{Shape, SHAPES};
pub use simulation::Simulation;
pub use topology::NeighborTable;
