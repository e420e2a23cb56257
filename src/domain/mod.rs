//! Domain types shared by the lookup, pricing and image modules.
//!
//! - filter input (`FilterCriteria`)
//! - vehicle listings (`VehicleRecord`, `DriveType`)
//! - the make/model/year triple used for image search (`VehicleDescriptor`)

pub mod types;

pub use types::*;
