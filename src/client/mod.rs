//! This module provides the Repustate API client and its error types.
//!
//! The high level calls (scoring, search, adjective extraction) live in
//! [crate::calls]; [Client::call] reaches any other API method.

mod api_client;
pub use api_client::*;

mod errors;
pub use errors::*;

mod responses;
pub use responses::{check_result_for_errors, ApiResponse, ErrorDetail};
pub(crate) use responses::{extract_results, extract_score, value_as_f64, value_as_u64};
