#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`OperatorInterface`**: Interprets button edges and a selector byte as mode changes and address/value entry
//! - **`InterfaceBuilder`**: Assembles an interface from mode handlers and a revert interval
//! - **`ModeHandler`**: Trait to implement for each operating mode of your device
//! - **`EventOutcome`**: What a button release did
//! - **`InterfaceState`**: Whether an address is awaiting its value
//! - **`ButtonEvent`**: A typed press or release edge
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`MillisInstant`**: Ready-made wrapping 32-bit millisecond instant
//!
//! A release after a press held for at least [`LONG_PRESS_THRESHOLD_MS`] is a
//! long press and enters an address. Anything shorter enters the value for a
//! pending address or, with none pending, cycles the mode.

// This must go first so the logging macros are visible to the other modules.
mod fmt;

pub mod time;
pub mod types;
pub mod handler;
pub mod event;
pub mod interface;

pub use event::ButtonEvent;
pub use handler::ModeHandler;
pub use interface::{
    DEFAULT_REVERT_INTERVAL_MS, InterfaceBuilder, LONG_PRESS_THRESHOLD_MS, OperatorInterface,
};
pub use time::{MillisDuration, MillisInstant, TimeDuration, TimeInstant, TimeSource};
pub use types::{EventOutcome, InterfaceError, InterfaceState};
