// 🏁 Parking Registry - The coordinating component
//
// Owns the three insertion-ordered collections (owners, vehicles,
// services) plus the tariff, and is the only place where cross-entity
// invariants are enforced:
// - owner license ids are pairwise unique
// - vehicle plates are pairwise unique
// - every vehicle references an owner that existed at registration
// - every service references a vehicle that existed at registration
//
// Lookups are linear scans in insertion order - the datasets are small
// and in-memory, so no indexing is required. Every rejection leaves the
// registry in its prior valid state (no partial writes).

use serde::{Deserialize, Serialize};

use crate::entities::{Owner, ParkingService, Vehicle, VehicleCategory};
use crate::tariff::Tariff;

// ============================================================================
// SERVICE ERROR
// ============================================================================

/// Why a service registration was rejected.
///
/// One variant per validation step, checked in this exact order. This
/// replaces the classic "negative cost" sentinel with an explicit
/// two-case result while keeping the same short-circuit behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Entry hour outside the facility window (1-22)
    #[error("entry hour must be between 1 and 22")]
    EntryHourOutOfRange,

    /// Exit hour outside the facility window (2-23)
    #[error("exit hour must be between 2 and 23")]
    ExitHourOutOfRange,

    /// Exit hour not strictly after entry hour
    #[error("exit hour must be after entry hour")]
    ExitNotAfterEntry,

    /// No vehicle registered under the given plate
    #[error("no vehicle registered for that plate")]
    UnknownVehicle,
}

// ============================================================================
// PARKING REGISTRY
// ============================================================================

/// Registry of all owners, vehicles, and parking services.
///
/// Constructed once and passed by reference to all callers - no
/// ambient/static state. All mutation goes through the `register_*`
/// and `accumulate_*` operations; the collection accessors hand out
/// immutable views only. Entities are appended, never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingRegistry {
    owners: Vec<Owner>,
    vehicles: Vec<Vehicle>,
    services: Vec<ParkingService>,
    tariff: Tariff,
}

impl ParkingRegistry {
    /// Create an empty registry with the default tariff
    pub fn new() -> Self {
        Self::with_tariff(Tariff::default())
    }

    /// Create an empty registry with an explicit tariff
    pub fn with_tariff(tariff: Tariff) -> Self {
        ParkingRegistry {
            owners: Vec::new(),
            vehicles: Vec::new(),
            services: Vec::new(),
            tariff,
        }
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    /// Find an owner by license id - first exact match in insertion order
    pub fn find_owner(&self, license_id: &str) -> Option<&Owner> {
        self.owners.iter().find(|o| o.license_id == license_id)
    }

    /// Find a vehicle by plate - first exact match in insertion order
    pub fn find_vehicle(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.plate == plate)
    }

    /// Resolve a vehicle's owner reference
    pub fn owner_of(&self, vehicle: &Vehicle) -> Option<&Owner> {
        self.find_owner(&vehicle.owner_license)
    }

    /// Resolve a service's vehicle reference
    pub fn vehicle_of(&self, service: &ParkingService) -> Option<&Vehicle> {
        self.find_vehicle(&service.plate)
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================

    /// Register a new owner with zero accumulated hours.
    ///
    /// Returns false with no mutation when the license id is already
    /// taken. This is the sole uniqueness gate for owners; the name is
    /// not validated.
    pub fn register_owner(&mut self, license_id: &str, name: &str) -> bool {
        if self.find_owner(license_id).is_some() {
            return false;
        }

        self.owners
            .push(Owner::new(license_id.to_string(), name.to_string()));
        true
    }

    /// Register a new vehicle bound to an existing owner.
    ///
    /// Checks, in order: the plate must be free, then the owner must
    /// exist. Returns false with no mutation when either fails; the two
    /// causes are not distinguished to the caller.
    pub fn register_vehicle(
        &mut self,
        plate: &str,
        year: i32,
        color: &str,
        owner_license: &str,
        category: VehicleCategory,
    ) -> bool {
        if self.find_vehicle(plate).is_some() {
            return false;
        }
        if self.find_owner(owner_license).is_none() {
            return false;
        }

        self.vehicles.push(Vehicle::new(
            plate.to_string(),
            year,
            color.to_string(),
            owner_license.to_string(),
            category,
        ));
        true
    }

    /// Add hours to an owner's loyalty accumulator.
    ///
    /// Returns false with no mutation when the owner does not exist.
    /// Zero hours is accepted and adds nothing.
    pub fn accumulate_owner_hours(&mut self, license_id: &str, hours: u32) -> bool {
        match self.owners.iter_mut().find(|o| o.license_id == license_id) {
            Some(owner) => {
                owner.accumulate_hours(hours);
                true
            }
            None => false,
        }
    }

    /// Register a parking service and return its cost.
    ///
    /// Validations run in this order, each an independent rejection
    /// with no partial mutation:
    /// 1. entry hour in 1-22
    /// 2. exit hour in 2-23
    /// 3. exit strictly after entry
    /// 4. vehicle exists
    ///
    /// On success the service is appended, its duration is accumulated
    /// onto the vehicle's owner, and the computed cost comes back.
    pub fn register_service(
        &mut self,
        plate: &str,
        entry_hour: u32,
        exit_hour: u32,
    ) -> Result<f64, ServiceError> {
        if !(1..=22).contains(&entry_hour) {
            return Err(ServiceError::EntryHourOutOfRange);
        }
        if !(2..=23).contains(&exit_hour) {
            return Err(ServiceError::ExitHourOutOfRange);
        }
        if exit_hour <= entry_hour {
            return Err(ServiceError::ExitNotAfterEntry);
        }

        let vehicle = self
            .find_vehicle(plate)
            .ok_or(ServiceError::UnknownVehicle)?;
        let owner_license = vehicle.owner_license.clone();
        let rate = self.tariff.rate_for(vehicle.category);

        let service = ParkingService::new(plate.to_string(), entry_hour, exit_hour, rate);
        let duration = service.duration_hours();
        let cost = service.cost;

        self.services.push(service);
        self.accumulate_owner_hours(&owner_license, duration);

        Ok(cost)
    }

    // ========================================================================
    // STATISTICS
    // ========================================================================

    /// Total money collected across all services (0.0 when empty)
    pub fn total_revenue(&self) -> f64 {
        self.services.iter().map(|s| s.cost).sum()
    }

    /// How many owners currently hold VIP status
    pub fn count_vip(&self) -> usize {
        self.owners
            .iter()
            .filter(|o| o.is_vip(self.tariff.vip_hours_threshold))
            .count()
    }

    /// The owner with the most accumulated hours.
    ///
    /// Scans in insertion order keeping the first owner to attain each
    /// new strict maximum, so ties go to the earliest-registered owner
    /// and a single zero-hour owner is still returned. None when no
    /// owners are registered.
    pub fn top_hours_owner(&self) -> Option<&Owner> {
        let mut top: Option<&Owner> = None;

        for owner in &self.owners {
            match top {
                Some(current) if owner.accumulated_hours <= current.accumulated_hours => {}
                _ => top = Some(owner),
            }
        }

        top
    }

    // ========================================================================
    // SNAPSHOT ACCESSORS
    // ========================================================================

    /// All registered owners, in registration order
    pub fn owners(&self) -> &[Owner] {
        &self.owners
    }

    /// All registered vehicles, in registration order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// All registered services, in registration order
    pub fn services(&self) -> &[ParkingService] {
        &self.services
    }

    /// The billing configuration in effect
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }
}

impl Default for ParkingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
