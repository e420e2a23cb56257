//! Vehicle data: the live vPIC source, synthetic enrichment, and the sample fallback.

pub mod http;
pub mod lookup;
pub mod sample;
pub mod synthetic;
pub mod vpic;

pub use http::{HttpJsonSource, JsonSource};
pub use lookup::VehicleLookup;
pub use sample::{sample_table, sample_vehicles};
pub use synthetic::{AttributeSource, EngineeringAttributes, FixedAttributes, RandomAttributes};
