//! Domain Services
//!
//! Pure planning logic over orders and stops.
//! These services have no I/O dependencies and are easily testable.

mod invariants;
mod sequencer;
mod stop_deriver;

pub use invariants::{InvariantViolation, Invariants};
pub use sequencer::{leg_positions, Sequencer};
pub use stop_deriver::StopDeriver;
