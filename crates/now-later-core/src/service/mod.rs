//! Service Layer
//!
//! In-memory board state and the mutation operations views call.

mod outcome;
mod state;

#[cfg(test)]
mod tests;

pub use outcome::{Outcome, Touched};
pub use state::BoardState;
