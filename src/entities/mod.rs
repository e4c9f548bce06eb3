// Entity Models - Owners, vehicles, and parking services
//
// Each entity has a stable identity key and references other entities
// by key, never by pointer - the registry is the single owner and
// lifetime authority for all three collections.

pub mod owner;
pub mod service;
pub mod vehicle;

pub use owner::Owner;
pub use service::ParkingService;
pub use vehicle::{UnknownCategory, Vehicle, VehicleCategory};
