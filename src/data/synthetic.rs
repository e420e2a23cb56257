//! Synthetic engineering attributes for live listings.
//!
//! The live vehicle source only supplies make and model names. Fuel economy,
//! engine and body details are placeholder values drawn from fixed ranges; they
//! are mock enrichment, not measured data. Swap the `AttributeSource` to plug in
//! a real vehicle-data source without touching the lookup flow.

use std::ops::Range;
use std::sync::{Mutex, PoisonError};

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::DriveType;

const CITY_MPG: Range<u32> = 15..45;
const HIGHWAY_MPG: Range<u32> = 20..60;
const COMBINED_MPG: Range<u32> = 18..53;
const DISPLACEMENT_LITERS: Range<u32> = 2..5;

const CYLINDERS: [u32; 3] = [4, 6, 8];
const DRIVE_TYPES: [DriveType; 3] = [DriveType::Fwd, DriveType::Rwd, DriveType::Awd];
const TRANSMISSIONS: [&str; 2] = ["Manual", "Automatic"];
const BODY_CLASSES: [&str; 4] = ["SUV", "Sedan", "Hatchback", "Coupe"];

/// Everything on a `VehicleRecord` that the live source cannot tell us.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineeringAttributes {
    pub city_mpg: f64,
    pub highway_mpg: f64,
    pub combined_mpg: f64,
    pub cylinder_count: u32,
    pub displacement_liters: f64,
    pub drive_type: DriveType,
    pub transmission: String,
    pub body_class: String,
}

pub trait AttributeSource {
    fn generate(&self) -> EngineeringAttributes;
}

/// Uniform random attributes. One value per call, no correlation between fields.
#[derive(Debug)]
pub struct RandomAttributes {
    rng: Mutex<StdRng>,
}

impl RandomAttributes {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible sequence for tests and `--seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomAttributes {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeSource for RandomAttributes {
    fn generate(&self) -> EngineeringAttributes {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let rng = &mut *rng;

        EngineeringAttributes {
            city_mpg: f64::from(rng.gen_range(CITY_MPG)),
            highway_mpg: f64::from(rng.gen_range(HIGHWAY_MPG)),
            combined_mpg: f64::from(rng.gen_range(COMBINED_MPG)),
            cylinder_count: pick(rng, &CYLINDERS),
            displacement_liters: f64::from(rng.gen_range(DISPLACEMENT_LITERS)),
            drive_type: pick(rng, &DRIVE_TYPES),
            transmission: pick(rng, &TRANSMISSIONS).to_string(),
            body_class: pick(rng, &BODY_CLASSES).to_string(),
        }
    }
}

fn pick<T: Copy, const N: usize>(rng: &mut StdRng, options: &[T; N]) -> T {
    options[rng.gen_range(0..N)]
}

/// Returns the same attributes every time.
#[derive(Debug, Clone)]
pub struct FixedAttributes(pub EngineeringAttributes);

impl AttributeSource for FixedAttributes {
    fn generate(&self) -> EngineeringAttributes {
        self.0.clone()
    }
}
