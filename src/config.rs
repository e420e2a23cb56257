//! Runtime settings sourced from the environment (`.env` supported).

use crate::domain::DEFAULT_LIMIT;
use crate::error::AppError;

pub const DEFAULT_VEHICLE_API_BASE: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";
pub const DEFAULT_IMAGE_API_BASE: &str = "https://api.unsplash.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// The first variable wins; the second is the name the web frontend builds with.
const ACCESS_KEY_VARS: [&str; 2] = ["UNSPLASH_ACCESS_KEY", "NEXT_PUBLIC_UNSPLASH_ACCESS_KEY"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub vehicle_api_base: String,
    pub image_api_base: String,
    /// Image-search credential. `None` is a valid state: images fall back to the placeholder.
    pub image_access_key: Option<String>,
    pub default_limit: usize,
    pub http_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vehicle_api_base: DEFAULT_VEHICLE_API_BASE.to_string(),
            image_api_base: DEFAULT_IMAGE_API_BASE.to_string(),
            image_access_key: None,
            default_limit: DEFAULT_LIMIT,
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let image_access_key = ACCESS_KEY_VARS.iter().find_map(|&name| var(name));

        let default_limit = match var("LISTINGS_DEFAULT_LIMIT") {
            Some(raw) => parse_number("LISTINGS_DEFAULT_LIMIT", &raw)?,
            None => defaults.default_limit,
        };
        let http_timeout_secs = match var("HTTP_TIMEOUT_SECS") {
            Some(raw) => parse_number("HTTP_TIMEOUT_SECS", &raw)?,
            None => defaults.http_timeout_secs,
        };

        Ok(Self {
            vehicle_api_base: var("VEHICLE_API_BASE").unwrap_or(defaults.vehicle_api_base),
            image_api_base: var("IMAGE_API_BASE").unwrap_or(defaults.image_api_base),
            image_access_key,
            default_limit,
            http_timeout_secs,
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.parse::<T>()
        .map_err(|_| AppError::config(format!("Invalid {name} '{raw}': expected a non-negative integer.")))
}
