//! Vehicle image resolution via the Unsplash photo search API.
//!
//! Without an access key, or when a search fails or comes back empty, every
//! path resolves to `DEFAULT_PLACEHOLDER_IMAGE`.

use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::{DEFAULT_IMAGE_API_BASE, Settings};
use crate::data::http::{HttpJsonSource, JsonSource};
use crate::domain::{VehicleDescriptor, VehicleRecord};
use crate::error::AppError;

pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1552519507-da3b142c6e3d?w=800&h=600&fit=crop&crop=center&auto=format&q=80";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

pub struct ImageResolver<S = HttpJsonSource> {
    source: S,
    access_key: Option<String>,
    base_url: String,
}

impl ImageResolver<HttpJsonSource> {
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let source = HttpJsonSource::from_settings(settings)?;
        Ok(Self::new(source, settings.image_access_key.clone()).with_base_url(&settings.image_api_base))
    }
}

impl<S: JsonSource> ImageResolver<S> {
    /// A blank key is treated the same as no key.
    pub fn new(source: S, access_key: Option<String>) -> Self {
        Self {
            source,
            access_key: access_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_IMAGE_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.access_key.is_some()
    }

    /// Search-request URL for `vehicle`, or the placeholder when no key is set.
    ///
    /// No I/O. `_angle` is accepted for callers that request a specific view;
    /// photo search has no angle parameter, so it does not change the URL.
    pub fn build_search_url(&self, vehicle: VehicleDescriptor<'_>, _angle: Option<&str>) -> String {
        let Some(key) = self.access_key.as_deref() else {
            return DEFAULT_PLACEHOLDER_IMAGE.to_string();
        };
        match search_url(&self.base_url, key, vehicle) {
            Ok(url) => url.into(),
            Err(err) => {
                warn!(error = %err, "cannot build image search URL; using placeholder");
                DEFAULT_PLACEHOLDER_IMAGE.to_string()
            }
        }
    }

    /// URL of the first matching photo (regular size), or the placeholder.
    pub async fn fetch_image(&self, vehicle: VehicleDescriptor<'_>) -> String {
        let Some(key) = self.access_key.as_deref() else {
            debug!("no image search key configured; using placeholder");
            return DEFAULT_PLACEHOLDER_IMAGE.to_string();
        };

        match self.search(key, vehicle).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                warn!(query = %search_query(vehicle), "image search returned no results; using placeholder");
                DEFAULT_PLACEHOLDER_IMAGE.to_string()
            }
            Err(err) => {
                warn!(query = %search_query(vehicle), error = %err, "image search failed; using placeholder");
                DEFAULT_PLACEHOLDER_IMAGE.to_string()
            }
        }
    }

    /// One image per record, in order. Searches run one after another.
    pub async fn fetch_images(&self, records: &[VehicleRecord]) -> Vec<String> {
        if !self.has_credential() {
            debug!(count = records.len(), "no image search key configured; using placeholders");
            return vec![DEFAULT_PLACEHOLDER_IMAGE.to_string(); records.len()];
        }

        let mut images = Vec::with_capacity(records.len());
        for record in records {
            images.push(self.fetch_image(record.descriptor()).await);
        }
        images
    }

    async fn search(&self, key: &str, vehicle: VehicleDescriptor<'_>) -> Result<Option<String>, AppError> {
        let url = search_url(&self.base_url, key, vehicle)?;
        let body = self.source.get_json(url.as_str()).await?;
        let parsed: SearchResponse = serde_json::from_value(body)
            .map_err(|e| AppError::upstream(format!("Failed to parse image search response: {e}")))?;
        Ok(parsed.results.into_iter().next().map(|photo| photo.urls.regular))
    }
}

fn search_query(vehicle: VehicleDescriptor<'_>) -> String {
    format!("{} {} {} car", vehicle.make, vehicle.model, vehicle.year)
}

fn search_url(base: &str, key: &str, vehicle: VehicleDescriptor<'_>) -> Result<Url, AppError> {
    let endpoint = format!("{}/search/photos", base.trim_end_matches('/'));
    Url::parse_with_params(
        &endpoint,
        &[
            ("query", search_query(vehicle).as_str()),
            ("client_id", key),
            ("per_page", "1"),
            ("orientation", "landscape"),
        ],
    )
    .map_err(|e| AppError::config(format!("Invalid image API base '{base}': {e}")))
}
