//! Completion page state (MVVM Standard)
//!
//! Structure:
//! - state.rs: CompletionState with pure transitions for request and probe cycles
//! - error.rs: CompletionError taxonomy and user-facing messages

pub mod error;
pub mod state;

pub use error::{port_from_base_url, CompletionError, CompletionErrorKind};
pub use state::{CompletionState, ConnectivityState, RequestState, SubmitOutcome};
