//! Filter-to-listing resolution with sample fallback.
//!
//! `VehicleLookup::lookup` never fails. It tries the live vehicle source when the
//! filter names both a manufacturer and a model, and otherwise (or when the live
//! call errors or comes back empty) serves the built-in sample table. One
//! upstream request at most per call; no retries.

use tracing::{debug, info, warn};

use crate::config::{DEFAULT_VEHICLE_API_BASE, Settings};
use crate::data::http::{HttpJsonSource, JsonSource};
use crate::data::sample::sample_vehicles_limited;
use crate::data::synthetic::{AttributeSource, RandomAttributes};
use crate::data::vpic::{self, ModelEntry};
use crate::domain::{DEFAULT_FUEL_TYPE, DEFAULT_LIMIT, DEFAULT_MODEL_YEAR, FilterCriteria, VehicleRecord};
use crate::error::AppError;

pub struct VehicleLookup<S, A = RandomAttributes> {
    source: S,
    attributes: A,
    base_url: String,
    default_limit: usize,
}

impl<A: AttributeSource> VehicleLookup<HttpJsonSource, A> {
    pub fn from_settings(settings: &Settings, attributes: A) -> Result<Self, AppError> {
        let source = HttpJsonSource::from_settings(settings)?;
        Ok(Self::new(source, attributes)
            .with_base_url(&settings.vehicle_api_base)
            .with_default_limit(settings.default_limit))
    }
}

impl<S: JsonSource, A: AttributeSource> VehicleLookup<S, A> {
    pub fn new(source: S, attributes: A) -> Self {
        Self {
            source,
            attributes,
            base_url: DEFAULT_VEHICLE_API_BASE.to_string(),
            default_limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Limit applied when `FilterCriteria::limit` is absent.
    pub fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = limit;
        self
    }

    /// Resolve `criteria` to at most `limit` listings.
    pub async fn lookup(&self, criteria: &FilterCriteria) -> Vec<VehicleRecord> {
        let limit = criteria.limit.unwrap_or(self.default_limit);

        let Some(manufacturer) = criteria.live_manufacturer() else {
            debug!("manufacturer and model not both set; serving sample listings");
            return sample_vehicles_limited(criteria, limit);
        };

        match vpic::fetch_models(&self.source, &self.base_url, manufacturer).await {
            Ok(models) => {
                let records = self.enrich(&models, criteria, limit);
                if records.is_empty() {
                    warn!(manufacturer, "vehicle source returned no usable models; serving sample listings");
                    return sample_vehicles_limited(criteria, limit);
                }
                info!(manufacturer, count = records.len(), "resolved live listings");
                records
            }
            Err(err) => {
                warn!(manufacturer, error = %err, "vehicle lookup failed; serving sample listings");
                sample_vehicles_limited(criteria, limit)
            }
        }
    }

    fn enrich(&self, models: &[ModelEntry], criteria: &FilterCriteria, limit: usize) -> Vec<VehicleRecord> {
        let year = criteria.year().unwrap_or(DEFAULT_MODEL_YEAR);
        let fuel_type = criteria.fuel_type().unwrap_or(DEFAULT_FUEL_TYPE);

        models
            .iter()
            .filter_map(ModelEntry::names)
            .take(limit)
            .map(|(make, model)| {
                let attrs = self.attributes.generate();
                VehicleRecord {
                    make: make.to_string(),
                    model: model.to_string(),
                    year,
                    city_mpg: attrs.city_mpg,
                    highway_mpg: attrs.highway_mpg,
                    combined_mpg: attrs.combined_mpg,
                    cylinder_count: attrs.cylinder_count,
                    displacement_liters: attrs.displacement_liters,
                    drive_type: attrs.drive_type,
                    fuel_type: fuel_type.to_string(),
                    transmission: attrs.transmission,
                    body_class: attrs.body_class,
                }
            })
            .collect()
    }
}
