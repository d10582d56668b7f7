//! Pexels photo search -- one stock photo per recipe name.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ImageLookup, PLACEHOLDER_IMAGE_URL};
use crate::config::ImagesConfig;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSrc,
}

#[derive(Debug, Deserialize)]
struct PhotoSrc {
    large: String,
}

/// Client for the Pexels search API.
///
/// One request per lookup, no retries. The pick among returned photos is
/// random; seed the client for reproducible picks.
pub struct PexelsClient {
    http_client: Client,
    endpoint: String,
    api_key: String,
    per_page: u32,
    orientation: String,
    rng: Mutex<Mcg128Xsl64>,
}

impl PexelsClient {
    /// Create a client from the `[images]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ImagesConfig) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            per_page: config.per_page,
            orientation: config.orientation.clone(),
            rng: Mutex::new(Mcg128Xsl64::from_entropy()),
        })
    }

    /// Use a fixed seed for choosing among returned photos.
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(Mcg128Xsl64::seed_from_u64(seed)),
            ..self
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<Photo>, reqwest::Error> {
        let params = [
            ("query", format!("{query} food dish")),
            ("per_page", self.per_page.to_string()),
            ("orientation", self.orientation.clone()),
        ];

        let resp: SearchResponse = self
            .http_client
            .get(&self.endpoint)
            .header("Authorization", &self.api_key)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp.photos)
    }

    fn pick(&self, photos: &[Photo]) -> String {
        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..photos.len());
        photos[index].src.large.clone()
    }
}

impl ImageLookup for PexelsClient {
    async fn lookup_image(&self, query: &str) -> String {
        match self.search(query).await {
            Ok(photos) if !photos.is_empty() => self.pick(&photos),
            Ok(_) => {
                debug!(query, "no photos found, using placeholder");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
            Err(e) => {
                warn!(query, error = %e, "error fetching food image");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_tolerates_missing_photos() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"total_results": 0}"#).unwrap();
        assert!(parsed.photos.is_empty());
    }

    #[test]
    fn test_search_response_requires_large_variant() {
        let parsed = serde_json::from_str::<SearchResponse>(
            r#"{"photos": [{"src": {"medium": "https://images.example/m.jpg"}}]}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_pick_stays_within_returned_set() {
        let client = PexelsClient::new(&ImagesConfig::default())
            .unwrap()
            .with_seed(9);
        let photos: Vec<Photo> = (0..5)
            .map(|i| Photo {
                src: PhotoSrc {
                    large: format!("https://images.example/{i}.jpg"),
                },
            })
            .collect();

        for _ in 0..50 {
            let url = client.pick(&photos);
            assert!(photos.iter().any(|p| p.src.large == url));
        }
    }
}
