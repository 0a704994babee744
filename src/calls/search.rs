use crate::client::{ApiResponse, Client, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentiment filter accepted by the search and adjective calls.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Sentiment {
    #[serde(rename = "pos")]
    Positive,
    #[serde(rename = "neg")]
    Negative,
    #[serde(rename = "neu")]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "pos",
            Sentiment::Negative => "neg",
            Sentiment::Neutral => "neu",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional parameters of [Client::search_sentiment]. Unset fields are left
/// out of the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub sentiment: Option<Sentiment>,
    pub page: Option<u32>,
    pub results_per_page: Option<u32>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sentiment: None,
            page: None,
            results_per_page: Some(100),
        }
    }
}

impl Client {
    /// Search what is being said about `term`.
    ///
    /// The whole response is returned; `number_of_results` and `results`
    /// hold the matches.
    pub async fn search_sentiment(
        &self,
        term: &str,
        options: SearchOptions,
    ) -> Result<ApiResponse> {
        let page = options.page.map(|page| page.to_string());
        let results_per_page = options.results_per_page.map(|rpp| rpp.to_string());

        let mut query = vec![("q", term)];

        if let Some(sentiment) = options.sentiment {
            query.push(("sentiment", sentiment.as_str()));
        }
        if let Some(page) = &page {
            query.push(("page", page.as_str()));
        }
        if let Some(rpp) = &results_per_page {
            query.push(("rpp", rpp.as_str()));
        }

        self.call("search", &query, &[]).await
    }
}
