//! Conversion form controller.
//!
//! Wires a [`FormView`](crate::view::FormView) to a
//! [`SpeechBackend`](crate::backend::SpeechBackend): loads voices on start-up,
//! keeps the filename input in step with the save-to-file checkbox and runs
//! conversions on submit. Every failure ends up as status text; raw errors
//! only go to the `tracing` log.

pub mod core;
pub mod messages;


pub use core::{FormController, SubmitOutcome};
