//! Fleet sizing for a given passenger count.
//!
//! Transport options carry a per-vehicle passenger capacity. When a party is
//! larger than one vehicle can seat, the journey is flown by a fleet of
//! identical vehicles and costs are presented both per vehicle and in total.

use serde::Serialize;

use crate::error::{Error, Result};

/// Number of vehicles of `capacity` seats needed to carry `passengers`.
///
/// - `capacity <= 0` returns `0`, which callers must treat as "no valid
///   fleet" rather than "no vehicles needed".
/// - Any party that fits in one vehicle, including an empty or negative
///   one, still dispatches a single vehicle and returns `1`.
/// - Larger parties return `ceil(passengers / capacity)`.
///
/// # Examples
/// ```
/// use stargate_lib::calculate_fleet_size;
///
/// assert_eq!(calculate_fleet_size(1, 4), 1);
/// assert_eq!(calculate_fleet_size(5, 4), 2);
/// assert_eq!(calculate_fleet_size(10, 0), 0);
/// ```
pub fn calculate_fleet_size(passengers: i64, capacity: i64) -> u32 {
    if capacity <= 0 {
        return 0;
    }
    if passengers <= capacity {
        return 1;
    }

    // Both operands are positive here, so the ceiling division cannot overflow.
    let vehicles = (passengers - 1) / capacity + 1;
    u32::try_from(vehicles).unwrap_or(u32::MAX)
}

/// Derived fleet makeup for a party travelling on one transport option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetComposition {
    /// Vehicles dispatched; always at least 1.
    pub vehicle_count: u32,
    /// Passenger seats per vehicle.
    pub capacity: u32,
    /// `true` when more than one vehicle is required.
    pub is_fleet: bool,
}

impl FleetComposition {
    /// Size a fleet for `passengers` on vehicles seating `capacity`.
    ///
    /// Unlike [`calculate_fleet_size`] this refuses a non-positive capacity
    /// instead of returning a zero-vehicle fleet, so the result is always a
    /// safe divisor.
    pub fn for_passengers(passengers: i64, capacity: i64) -> Result<Self> {
        let vehicle_count = calculate_fleet_size(passengers, capacity);
        if vehicle_count == 0 {
            return Err(Error::InvalidCapacity { capacity });
        }

        Ok(Self {
            vehicle_count,
            capacity: u32::try_from(capacity).unwrap_or(u32::MAX),
            is_fleet: vehicle_count > 1,
        })
    }

    /// A single vehicle of the given capacity.
    pub fn single(capacity: u32) -> Self {
        Self {
            vehicle_count: 1,
            capacity,
            is_fleet: false,
        }
    }

    /// Share of `amount` borne by one vehicle in the fleet.
    pub fn per_vehicle(&self, amount: f64) -> f64 {
        amount / f64::from(self.vehicle_count)
    }

    /// Total seats across the whole fleet.
    pub fn total_seats(&self) -> u64 {
        u64::from(self.vehicle_count) * u64::from(self.capacity)
    }
}
