pub const DEFAULT_API_ENDPOINT: &str = "http://api.repustate.com/v1/";

pub const API_ENDPOINT_ENV: &str = "REPUSTATE_API_ENDPOINT";
pub const API_KEY_ENV: &str = "REPUSTATE_KEY";

/// Every key issued by Repustate has exactly this many characters.
pub const API_KEY_LENGTH: usize = 40;

pub const RESPONSE_FORMAT: &str = "json";
