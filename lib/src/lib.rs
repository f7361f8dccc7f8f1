pub mod agent;
pub mod config;
mod food;
pub mod types;

pub use agent::{Agent, MoveSelector};
pub use config::{BoundaryPolicy, FoodTargeting, SelectorConfig};
pub use types::{Board, Move, Position, Snake, Snapshot};
