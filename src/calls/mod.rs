//! High level wrappers around the Repustate API calls, implemented on
//! [Client](crate::client::Client).
//!
//! # Example
//!
//! See demos/score_text.rs
//!
//! ```no_run
#![doc = include_str!("../../demos/score_text.rs")]
//! ```

mod adjectives;

mod score;

mod search;
pub use search::*;
