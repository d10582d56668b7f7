//! Image lookup for synthesized recipes.
//!
//! Lookups are best-effort: an implementation must always resolve to a URL,
//! falling back to [`PLACEHOLDER_IMAGE_URL`] when the provider cannot help.

pub mod pexels;

pub use pexels::PexelsClient;

use std::future::Future;

/// Returned whenever no real photo can be found.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400/png?text=Recipe+Image";

/// Every image source implements this trait.
/// Implementations never fail; errors map to [`PLACEHOLDER_IMAGE_URL`].
pub trait ImageLookup: Send + Sync {
    /// Resolve a photo URL for the given recipe name.
    fn lookup_image(&self, query: &str) -> impl Future<Output = String> + Send;
}

/// Always answers with the placeholder. Useful offline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderImages;

impl ImageLookup for PlaceholderImages {
    async fn lookup_image(&self, _query: &str) -> String {
        PLACEHOLDER_IMAGE_URL.to_string()
    }
}
