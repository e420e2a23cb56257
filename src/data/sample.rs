//! Built-in sample listings used when the live source is unavailable.

use crate::domain::{DEFAULT_MODEL_YEAR, DriveType, FilterCriteria, VehicleRecord};

struct SampleEntry {
    make: &'static str,
    model: &'static str,
    city_mpg: f64,
    highway_mpg: f64,
    combined_mpg: f64,
    cylinder_count: u32,
    displacement_liters: f64,
    drive_type: DriveType,
    fuel_type: &'static str,
    transmission: &'static str,
    body_class: &'static str,
}

const SAMPLE_TABLE: [SampleEntry; 5] = [
    SampleEntry {
        make: "Toyota",
        model: "Camry",
        city_mpg: 28.0,
        highway_mpg: 39.0,
        combined_mpg: 32.0,
        cylinder_count: 4,
        displacement_liters: 2.5,
        drive_type: DriveType::Fwd,
        fuel_type: "gas",
        transmission: "Automatic",
        body_class: "Sedan",
    },
    SampleEntry {
        make: "Honda",
        model: "Civic",
        city_mpg: 31.0,
        highway_mpg: 40.0,
        combined_mpg: 35.0,
        cylinder_count: 4,
        displacement_liters: 2.0,
        drive_type: DriveType::Fwd,
        fuel_type: "gas",
        transmission: "CVT",
        body_class: "Sedan",
    },
    SampleEntry {
        make: "Ford",
        model: "F-150",
        city_mpg: 20.0,
        highway_mpg: 24.0,
        combined_mpg: 22.0,
        cylinder_count: 6,
        displacement_liters: 3.5,
        drive_type: DriveType::FourWd,
        fuel_type: "gas",
        transmission: "Automatic",
        body_class: "Pickup",
    },
    SampleEntry {
        make: "BMW",
        model: "X5",
        city_mpg: 21.0,
        highway_mpg: 26.0,
        combined_mpg: 23.0,
        cylinder_count: 6,
        displacement_liters: 3.0,
        drive_type: DriveType::Awd,
        fuel_type: "gas",
        transmission: "Automatic",
        body_class: "SUV",
    },
    // Electric: mpg figures are MPGe.
    SampleEntry {
        make: "Tesla",
        model: "Model 3",
        city_mpg: 134.0,
        highway_mpg: 126.0,
        combined_mpg: 130.0,
        cylinder_count: 0,
        displacement_liters: 0.0,
        drive_type: DriveType::Rwd,
        fuel_type: "electric",
        transmission: "Automatic",
        body_class: "Sedan",
    },
];

impl SampleEntry {
    fn to_record(&self, criteria: &FilterCriteria) -> VehicleRecord {
        VehicleRecord {
            make: criteria.manufacturer().unwrap_or(self.make).to_string(),
            model: criteria.model().unwrap_or(self.model).to_string(),
            year: criteria.year().unwrap_or(DEFAULT_MODEL_YEAR),
            city_mpg: self.city_mpg,
            highway_mpg: self.highway_mpg,
            combined_mpg: self.combined_mpg,
            cylinder_count: self.cylinder_count,
            displacement_liters: self.displacement_liters,
            drive_type: self.drive_type,
            fuel_type: self.fuel_type.to_string(),
            transmission: self.transmission.to_string(),
            body_class: self.body_class.to_string(),
        }
    }
}

/// The full sample table with its built-in make/model/year.
pub fn sample_table() -> Vec<VehicleRecord> {
    sample_vehicles_limited(&FilterCriteria::default(), SAMPLE_TABLE.len())
}

/// Up to `criteria.effective_limit()` sample listings, with make/model/year
/// replaced by whichever of them the criteria pin.
pub fn sample_vehicles(criteria: &FilterCriteria) -> Vec<VehicleRecord> {
    sample_vehicles_limited(criteria, criteria.effective_limit())
}

pub(crate) fn sample_vehicles_limited(criteria: &FilterCriteria, limit: usize) -> Vec<VehicleRecord> {
    SAMPLE_TABLE
        .iter()
        .take(limit)
        .map(|entry| entry.to_record(criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_five_fixed_entries() {
        let table = sample_table();
        let names: Vec<_> = table.iter().map(|r| (r.make.as_str(), r.model.as_str())).collect();
        assert_eq!(
            names,
            vec![
                ("Toyota", "Camry"),
                ("Honda", "Civic"),
                ("Ford", "F-150"),
                ("BMW", "X5"),
                ("Tesla", "Model 3"),
            ]
        );
        let classes: Vec<_> = table.iter().map(|r| r.body_class.as_str()).collect();
        assert_eq!(classes, vec!["Sedan", "Sedan", "Pickup", "SUV", "Sedan"]);
        assert!(table.iter().all(|r| r.year == DEFAULT_MODEL_YEAR));
        assert_eq!(table[4].fuel_type, "electric");
        assert_eq!(table[2].drive_type, DriveType::FourWd);
    }

    #[test]
    fn default_limit_caps_at_table_size() {
        assert_eq!(sample_vehicles(&FilterCriteria::default()).len(), 5);
    }

    #[test]
    fn limit_truncates_in_order() {
        let criteria = FilterCriteria {
            limit: Some(2),
            ..FilterCriteria::default()
        };
        let records = sample_vehicles(&criteria);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].model, "Civic");

        let none = sample_vehicles(&FilterCriteria {
            limit: Some(0),
            ..FilterCriteria::default()
        });
        assert!(none.is_empty());
    }

    #[test]
    fn criteria_override_identity_fields_only() {
        let criteria = FilterCriteria {
            manufacturer: Some("Mazda".to_string()),
            year: Some(2019),
            fuel_type: Some("diesel".to_string()),
            ..FilterCriteria::default()
        };
        let records = sample_vehicles(&criteria);
        assert!(records.iter().all(|r| r.make == "Mazda" && r.year == 2019));
        assert_eq!(records[0].model, "Camry");
        assert_eq!(records[3].model, "X5");
        // Fuel type is never overridden on the fallback path.
        assert_eq!(records[0].fuel_type, "gas");
        assert_eq!(records[4].fuel_type, "electric");
        assert_eq!(records[1].transmission, "CVT");
    }
}
