use super::Sentiment;
use crate::client::{extract_results, Client, Result};
use serde_json::Value;

impl Client {
    /// Collect the adjectives used about `term` across the web, optionally
    /// only those of one sentiment.
    pub async fn extract_adjectives_from_net(
        &self,
        term: &str,
        sentiment: Option<Sentiment>,
    ) -> Result<Vec<Value>> {
        let mut query = vec![("q", term), ("cloud", "1")];

        if let Some(sentiment) = sentiment {
            query.push(("sentiment", sentiment.as_str()));
        }

        let result = self.call("adj", &query, &[]).await?;
        extract_results(result)
    }

    pub async fn extract_adjectives_from_text(&self, text: &str) -> Result<Vec<Value>> {
        let result = self.call("adj", &[], &[("text", text)]).await?;
        extract_results(result)
    }

    pub async fn extract_adjectives_from_url(&self, url: &str) -> Result<Vec<Value>> {
        let result = self.call("adj", &[("url", url)], &[]).await?;
        extract_results(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::RepustateError,
        utils::test_support::{api_path, mock_client},
    };
    use serde_json::json;
    use wiremock::{
        matchers::{body_string, method, path, query_param, query_param_is_missing},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_adjectives_from_net() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("adj")))
            .and(query_param("q", "iphone"))
            .and(query_param("cloud", "1"))
            .and(query_param("sentiment", "neg"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": ["slow", "expensive"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adjectives = mock_client(&server)
            .extract_adjectives_from_net("iphone", Some(Sentiment::Negative))
            .await
            .unwrap();

        assert_eq!(adjectives, vec![json!("slow"), json!("expensive")]);
    }

    #[tokio::test]
    async fn test_adjectives_from_net_without_sentiment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("adj")))
            .and(query_param_is_missing("sentiment"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adjectives = mock_client(&server)
            .extract_adjectives_from_net("iphone", None)
            .await
            .unwrap();

        assert!(adjectives.is_empty());
    }

    #[tokio::test]
    async fn test_adjectives_from_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(api_path("adj")))
            .and(body_string("text=a+bright+sunny+day"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [{ "adjective": "bright" }, { "adjective": "sunny" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adjectives = mock_client(&server)
            .extract_adjectives_from_text("a bright sunny day")
            .await
            .unwrap();

        assert_eq!(adjectives.len(), 2);
        assert_eq!(adjectives[0]["adjective"], json!("bright"));
    }

    #[tokio::test]
    async fn test_adjectives_from_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(api_path("adj")))
            .and(query_param("url", "http://example.com/review"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": ["great"]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let adjectives = mock_client(&server)
            .extract_adjectives_from_url("http://example.com/review")
            .await
            .unwrap();

        assert_eq!(adjectives, vec![json!("great")]);
    }

    #[tokio::test]
    async fn test_adjectives_report_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "FAIL",
                "errors": [{ "field": "url", "message": "could not be fetched" }]
            })))
            .mount(&server)
            .await;

        let err = mock_client(&server)
            .extract_adjectives_from_url("http://example.com/missing")
            .await
            .unwrap_err();

        assert!(matches!(err, RepustateError::Api { .. }));
        assert!(err.to_string().contains("could not be fetched"));
    }
}
