// Parking Facility Registry - Core Library
// Exposes the entity models, tariff configuration, and the
// coordinating registry for use in the demo binary and tests.

pub mod entities;
pub mod registry;
pub mod tariff;

// Re-export commonly used types
pub use entities::{Owner, ParkingService, UnknownCategory, Vehicle, VehicleCategory};
pub use registry::{ParkingRegistry, ServiceError};
pub use tariff::Tariff;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
