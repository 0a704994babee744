use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

pub fn build_api_client() -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(headers)
        .user_agent(concat!("repustate-sdk-rs/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::client::Client;
    use wiremock::MockServer;

    pub const TEST_API_KEY: &str = "0123456789abcdef0123456789abcdef01234567";

    pub fn mock_client(server: &MockServer) -> Client {
        Client::new(TEST_API_KEY)
            .unwrap()
            .with_endpoint(format!("{}/v1/", server.uri()))
    }

    pub fn api_path(endpoint: &str) -> String {
        format!("/v1/{TEST_API_KEY}/{endpoint}.json")
    }
}
