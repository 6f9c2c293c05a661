//! Fixed-depth alpha-beta move selection for chess agents.
//!
//! The engine never generates moves itself. Callers describe their positions
//! through [`GameState`] and [`Board`], and the engine picks which successor
//! of a root position to move to.

pub mod boardrepr;
pub mod coretypes;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod position;
pub mod search;
pub mod tree;

pub use engine::{Engine, EngineBuilder};
pub use evaluation::{EvalConfig, Evaluator, Heuristic};
pub use position::{Board, GameState};
