//! NHTSA vPIC integration: the "models for make" endpoint.
//!
//! vPIC only knows make and model names; every engineering attribute on a
//! listing built from it comes from an `AttributeSource`.

use serde::Deserialize;
use url::Url;

use crate::data::http::JsonSource;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    #[serde(rename = "Results")]
    results: Option<Vec<ModelEntry>>,
}

/// One row of the `Results` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelEntry {
    #[serde(rename = "Make_Name")]
    pub make_name: Option<String>,
    #[serde(rename = "Model_Name")]
    pub model_name: Option<String>,
}

impl ModelEntry {
    /// `(make, model)` when both names are present and non-empty.
    pub fn names(&self) -> Option<(&str, &str)> {
        let make = self.make_name.as_deref().filter(|s| !s.is_empty())?;
        let model = self.model_name.as_deref().filter(|s| !s.is_empty())?;
        Some((make, model))
    }
}

/// `{base}/getmodelsformake/{manufacturer}?format=json`, with the manufacturer
/// percent-encoded as a single path segment.
pub fn models_for_make_url(base: &str, manufacturer: &str) -> Result<String, AppError> {
    let mut url = Url::parse(base)
        .map_err(|e| AppError::config(format!("Invalid vehicle API base '{base}': {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::config(format!("Vehicle API base '{base}' cannot carry a path.")))?
        .pop_if_empty()
        .push("getmodelsformake")
        .push(manufacturer);
    url.query_pairs_mut().append_pair("format", "json");
    Ok(url.into())
}

/// Fetch every model vPIC lists for `manufacturer`.
pub async fn fetch_models<S: JsonSource>(
    source: &S,
    base: &str,
    manufacturer: &str,
) -> Result<Vec<ModelEntry>, AppError> {
    let url = models_for_make_url(base, manufacturer)?;
    let body = source.get_json(&url).await?;
    parse_models(body)
}

fn parse_models(body: serde_json::Value) -> Result<Vec<ModelEntry>, AppError> {
    let parsed: ModelsResponse = serde_json::from_value(body)
        .map_err(|e| AppError::upstream(format!("Failed to parse vPIC response: {e}")))?;
    parsed
        .results
        .ok_or_else(|| AppError::upstream("vPIC response has no Results array."))
}
