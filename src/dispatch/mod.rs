//! Command dispatch: routing recognized intents to an executor.
//!
//! The classifier hands an opaque intent label to a [`CommandExecutor`],
//! which maps it to an action and a spoken-style response. Executors are
//! selected once at startup; the classifier itself knows nothing about the
//! actions behind the labels.

pub mod executor;

pub use executor::{CommandExecutor, SimulatedExecutor};
