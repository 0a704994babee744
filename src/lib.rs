//! repustate-sdk is the Rust SDK for Repustate, a sentiment analysis API.
//!
//! See [modules](#modules) for more details.

pub mod calls;
pub mod client;

mod constants;
mod utils;

pub use client::{Client, RepustateError, Result};
pub use serde_json;
pub use tokio;
