use super::{
    errors::Result,
    responses::{check_result_for_errors, ApiResponse},
    RepustateError,
};
use crate::{
    constants::{
        API_ENDPOINT_ENV, API_KEY_ENV, API_KEY_LENGTH, DEFAULT_API_ENDPOINT, RESPONSE_FORMAT,
    },
    utils::build_api_client,
};
use std::{env, fmt, time::Duration};
use url::form_urlencoded;

/// A client for the Repustate sentiment analysis API.
///
/// Every method issues a single request and resolves once the response has
/// been received, decoded and checked for errors. Nothing is retried.
///
/// # Example
/// ```no_run
/// # async fn run() -> repustate_sdk::client::Result<()> {
/// use repustate_sdk::client::Client;
///
/// let client = Client::from_env()?;
/// let score = client.score_text("this is a happy piece of text").await?;
///
/// println!("score: {score}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    api_key: String,
    endpoint: String,
    timeout: Option<Duration>,
    api_client: reqwest::Client,
}

impl Client {
    /// Create a client with a Repustate API key.
    ///
    /// The base URL is taken from `REPUSTATE_API_ENDPOINT` when it is set
    /// and not empty.
    pub fn new(api_key: &str) -> Result<Self> {
        validate_api_key(api_key)?;

        let endpoint = env::var(API_ENDPOINT_ENV)
            .ok()
            .filter(|endpoint| !endpoint.trim().is_empty())
            .unwrap_or(DEFAULT_API_ENDPOINT.to_string());

        Ok(Self {
            api_key: api_key.to_string(),
            endpoint,
            timeout: None,
            api_client: build_api_client()?,
        })
    }

    /// Create a client with the API key stored in `REPUSTATE_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| {
            RepustateError::InvalidCredential(format!("{API_KEY_ENV} is not set"))
        })?;

        Self::new(&api_key)
    }

    /// Send requests to another base URL, e.g. a proxy or a mock server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Abort requests that take longer than `timeout`. There is no timeout by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Create the URL for an API call, with `query` appended in the given order.
    pub fn build_request_url(&self, api_call: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/{}/{api_call}.{RESPONSE_FORMAT}",
            self.endpoint.trim_end_matches('/'),
            self.api_key,
        );

        if !query.is_empty() {
            url.push('?');
            url.push_str(
                &form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(query)
                    .finish(),
            );
        }

        url
    }

    /// Call any Repustate API, including ones without a dedicated method.
    ///
    /// The request is a GET when `form` is empty and a form encoded POST
    /// otherwise. The decoded response is returned once it has passed
    /// [check_result_for_errors].
    pub async fn call(
        &self,
        api_call: &str,
        query: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<ApiResponse> {
        let url = self.build_request_url(api_call, query);

        let mut request = if form.is_empty() {
            self.api_client.get(url)
        } else {
            self.api_client.post(url).form(form)
        };

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(
            api_call,
            post = !form.is_empty(),
            status = status.as_u16(),
            "Repustate API call finished"
        );

        let result: ApiResponse = serde_json::from_str(&body)?;

        check_result_for_errors(&result).inspect_err(|e| {
            tracing::warn!("Repustate API call '{}' failed: {}", api_call, e);
        })?;

        Ok(result)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// The key becomes a URL path segment, so only ASCII alphanumerics are allowed.
fn validate_api_key(api_key: &str) -> Result<()> {
    let length = api_key.chars().count();

    if length != API_KEY_LENGTH {
        return Err(RepustateError::InvalidCredential(format!(
            "API key must be {API_KEY_LENGTH} characters long, got {length}"
        )));
    }

    if !api_key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(RepustateError::InvalidCredential(
            "API key must only contain ASCII letters and digits".to_string(),
        ));
    }

    Ok(())
}
