use gloo_net::http::Request;
use leptos::logging::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::data::candidate::Candidate;
use crate::data::map_config::MapConfig;

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    lat: String,
    lon: String,
    display_name: String,
}

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("request error: {0}")]
    Request(String),
    #[error("geocoder answered with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct GeocodingClient {
    endpoint: String,
    limit: usize,
    user_agent: String,
}

impl GeocodingClient {
    pub fn new(endpoint: impl Into<String>, limit: usize, user_agent: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            limit,
            user_agent: user_agent.into(),
        }
    }

    pub fn from_config(config: &MapConfig) -> Self {
        Self::new(
            config.geocoder_url.clone(),
            config.result_limit,
            config.user_agent.clone(),
        )
    }

    /// The URL a search for `text` would hit, or `None` when there is nothing
    /// to look up and no request should be made.
    pub fn request_url(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(format!(
            "{}?q={}&format=json&limit={}",
            self.endpoint,
            urlencoding::encode(text),
            self.limit
        ))
    }

    pub async fn try_search(&self, text: &str) -> Result<Vec<Candidate>, GeocodingError> {
        let Some(url) = self.request_url(text) else {
            return Ok(Vec::new());
        };

        let response = Request::get(&url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(GeocodingError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        parse_candidates(&body, self.limit)
    }

    /// Never fails: anything that goes wrong is logged and shows up as an
    /// empty result list.
    pub async fn search(&self, text: &str) -> Vec<Candidate> {
        match self.try_search(text).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!("Geocoding {:?} failed: {}", text, err);
                Vec::new()
            }
        }
    }
}

/// Decodes a Nominatim `format=json` body, keeping the service's ranking.
pub fn parse_candidates(body: &str, limit: usize) -> Result<Vec<Candidate>, GeocodingError> {
    let results: Vec<NominatimResponse> = serde_json::from_str(body)?;

    Ok(results
        .into_iter()
        .take(limit)
        .map(|result| Candidate::new(&result.lat, &result.lon, result.display_name))
        .collect())
}
