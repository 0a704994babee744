use crate::client::{
    extract_results, extract_score, value_as_f64, value_as_u64, Client, RepustateError, Result,
};
use std::{collections::HashMap, hash::Hash};

impl Client {
    /// Get the positive/negative score of a piece of text.
    pub async fn score_text(&self, text: &str) -> Result<f64> {
        let result = self.call("score", &[], &[("text", text)]).await?;
        extract_score(&result)
    }

    /// Get the positive/negative score of the text found at `url`.
    pub async fn score_url(&self, url: &str) -> Result<f64> {
        let result = self.call("score", &[], &[("url", url)]).await?;
        extract_score(&result)
    }

    /// Score many texts with a single request.
    ///
    /// The scores are keyed by the caller's keys. An empty input is answered
    /// without contacting the service.
    pub async fn bulk_score<K, T>(
        &self,
        texts: impl IntoIterator<Item = (K, T)>,
    ) -> Result<HashMap<K, f64>>
    where
        K: Eq + Hash,
        T: AsRef<str>,
    {
        // Position i holds the caller key sent as `text{i + 1}`.
        let mut tracking = Vec::new();
        let mut form = Vec::new();

        for (index, (key, text)) in texts.into_iter().enumerate() {
            tracking.push(Some(key));
            form.push((format!("text{}", index + 1), text));
        }

        if form.is_empty() {
            return Ok(HashMap::new());
        }

        let form: Vec<(&str, &str)> = form
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_ref()))
            .collect();

        let result = self.call("bulk-score", &[], &form).await?;

        let mut scores = HashMap::with_capacity(tracking.len());

        for entry in extract_results(result)? {
            let id = entry
                .get("id")
                .and_then(value_as_u64)
                .ok_or_else(|| RepustateError::MissingField("id".to_string()))?;
            let score = entry
                .get("score")
                .and_then(value_as_f64)
                .ok_or_else(|| RepustateError::MissingField("score".to_string()))?;

            let key = usize::try_from(id)
                .ok()
                .and_then(|id| id.checked_sub(1))
                .and_then(|position| tracking.get_mut(position))
                .and_then(Option::take);

            match key {
                Some(key) => {
                    scores.insert(key, score);
                }
                None => tracing::warn!("Ignoring bulk score result with unknown id {}", id),
            }
        }

        Ok(scores)
    }

    /// Get the probability that `term` is talked about positively.
    pub async fn sentiment_probability(&self, term: &str) -> Result<f64> {
        let result = self.call("prob", &[("q", term)], &[]).await?;
        extract_score(&result)
    }
}
