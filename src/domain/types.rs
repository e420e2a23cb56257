//! Shared domain types.
//!
//! Records are plain values: created by a lookup, handed to the caller, never
//! mutated afterwards. Serde field names follow the listing JSON consumed by the
//! rendering layer (`city_mpg`, `combination_mpg`, `class`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of records returned when `FilterCriteria::limit` is absent.
pub const DEFAULT_LIMIT: usize = 10;
/// Model year used when the filter does not pin one.
pub const DEFAULT_MODEL_YEAR: i32 = 2022;
/// Fuel type used for live records when the filter does not pin one.
pub const DEFAULT_FUEL_TYPE: &str = "gas";

/// Filter input from the browsing UI.
///
/// Every field is optional; empty strings and a zero year count as absent,
/// matching how the search form submits cleared fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "fuel")]
    pub fuel_type: Option<String>,
    pub limit: Option<usize>,
}

impl FilterCriteria {
    pub fn manufacturer(&self) -> Option<&str> {
        non_empty(self.manufacturer.as_deref())
    }

    pub fn model(&self) -> Option<&str> {
        non_empty(self.model.as_deref())
    }

    pub fn year(&self) -> Option<i32> {
        self.year.filter(|y| *y != 0)
    }

    pub fn fuel_type(&self) -> Option<&str> {
        non_empty(self.fuel_type.as_deref())
    }

    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Manufacturer to query upstream, present only when both make and model are set.
    pub fn live_manufacturer(&self) -> Option<&str> {
        match (self.manufacturer(), self.model()) {
            (Some(manufacturer), Some(_)) => Some(manufacturer),
            _ => None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveType {
    #[serde(rename = "FWD")]
    Fwd,
    #[serde(rename = "RWD")]
    Rwd,
    #[serde(rename = "AWD")]
    Awd,
    #[serde(rename = "4WD")]
    FourWd,
}

impl DriveType {
    pub fn as_str(self) -> &'static str {
        match self {
            DriveType::Fwd => "FWD",
            DriveType::Rwd => "RWD",
            DriveType::Awd => "AWD",
            DriveType::FourWd => "4WD",
        }
    }
}

impl fmt::Display for DriveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One rentable vehicle listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub city_mpg: f64,
    pub highway_mpg: f64,
    #[serde(rename = "combination_mpg")]
    pub combined_mpg: f64,
    #[serde(rename = "cylinders")]
    pub cylinder_count: u32,
    #[serde(rename = "displacement")]
    pub displacement_liters: f64,
    #[serde(rename = "drive")]
    pub drive_type: DriveType,
    pub fuel_type: String,
    pub transmission: String,
    #[serde(rename = "class")]
    pub body_class: String,
}

impl VehicleRecord {
    pub fn descriptor(&self) -> VehicleDescriptor<'_> {
        VehicleDescriptor {
            make: &self.make,
            model: &self.model,
            year: self.year,
        }
    }

    /// Daily rental price for this vehicle at the current wall-clock year.
    pub fn daily_rate(&self) -> String {
        crate::pricing::daily_rate(self.city_mpg, self.year)
    }
}

/// The make/model/year triple that identifies a vehicle for image search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleDescriptor<'a> {
    pub make: &'a str,
    pub model: &'a str,
    pub year: i32,
}

impl<'a> VehicleDescriptor<'a> {
    pub fn new(make: &'a str, model: &'a str, year: i32) -> Self {
        Self { make, model, year }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_count_as_absent() {
        let criteria = FilterCriteria {
            manufacturer: Some(String::new()),
            model: Some("civic".to_string()),
            year: Some(0),
            fuel_type: Some(String::new()),
            limit: None,
        };
        assert_eq!(criteria.manufacturer(), None);
        assert_eq!(criteria.model(), Some("civic"));
        assert_eq!(criteria.year(), None);
        assert_eq!(criteria.fuel_type(), None);
        assert_eq!(criteria.effective_limit(), DEFAULT_LIMIT);
        assert_eq!(criteria.live_manufacturer(), None);
    }

    #[test]
    fn live_manufacturer_requires_make_and_model() {
        let mut criteria = FilterCriteria {
            manufacturer: Some("honda".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(criteria.live_manufacturer(), None);

        criteria.model = Some("civic".to_string());
        assert_eq!(criteria.live_manufacturer(), Some("honda"));
    }

    #[test]
    fn record_serializes_with_listing_field_names() {
        let record = VehicleRecord {
            make: "Ford".to_string(),
            model: "F-150".to_string(),
            year: 2022,
            city_mpg: 20.0,
            highway_mpg: 24.0,
            combined_mpg: 22.0,
            cylinder_count: 6,
            displacement_liters: 3.5,
            drive_type: DriveType::FourWd,
            fuel_type: "gas".to_string(),
            transmission: "Automatic".to_string(),
            body_class: "Pickup".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["combination_mpg"], 22.0);
        assert_eq!(json["cylinders"], 6);
        assert_eq!(json["displacement"], 3.5);
        assert_eq!(json["drive"], "4WD");
        assert_eq!(json["class"], "Pickup");
    }

    #[test]
    fn record_helpers_reflect_its_fields() {
        let record = VehicleRecord {
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2021,
            city_mpg: 130.0,
            highway_mpg: 120.0,
            combined_mpg: 125.0,
            cylinder_count: 0,
            displacement_liters: 0.0,
            drive_type: DriveType::Rwd,
            fuel_type: "electricity".to_string(),
            transmission: "Automatic".to_string(),
            body_class: "Sedan".to_string(),
        };
        assert_eq!(record.descriptor(), VehicleDescriptor::new("Tesla", "Model 3", 2021));
        assert_eq!(record.daily_rate(), crate::pricing::daily_rate(130.0, 2021));
    }

    #[test]
    fn criteria_deserializes_from_query_style_json() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"manufacturer":"bmw","model":"x5","fuel":"gas","limit":3}"#).unwrap();
        assert_eq!(criteria.fuel_type(), Some("gas"));
        assert_eq!(criteria.year, None);
        assert_eq!(criteria.effective_limit(), 3);
    }
}
