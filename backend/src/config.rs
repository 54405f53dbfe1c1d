//! Configuration limits and rejection reasons
//!
//! Shared by the sampler (stay ranges), the engine (scenario shape) and the
//! sweep (scenario list, seed). A configuration is accepted or rejected here
//! before any bed pool or counter sequence is allocated.

use crate::models::room::RoomKind;
use thiserror::Error;

/// Largest bed count accepted for one room
pub const MAX_BEDS_PER_ROOM: usize = 1_000_000;

/// Longest horizon accepted (one hundred years of days)
pub const MAX_HORIZON_DAYS: usize = 100 * 365;

/// Configuration rejected before a run starts
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{room} bed count must be positive")]
    ZeroBeds { room: RoomKind },

    #[error("{room} bed count {beds} exceeds the limit of {max}")]
    TooManyBeds {
        room: RoomKind,
        beds: usize,
        max: usize,
    },

    #[error("simulation horizon must be at least one day")]
    ZeroHorizon,

    #[error("simulation horizon of {days} days exceeds the limit of {max}")]
    HorizonTooLong { days: usize, max: usize },

    #[error("{room} stay range [{min}, {max}] is invalid (need 1 <= min <= max)")]
    InvalidStayRange { room: RoomKind, min: u32, max: u32 },

    #[error("scenario sweep contains no scenarios")]
    EmptySweep,

    #[error("scenario sweep has no RNG seed")]
    MissingSeed,
}

/// Check one room's bed count against `[1, MAX_BEDS_PER_ROOM]`
pub fn validate_beds(room: RoomKind, beds: usize) -> Result<(), ConfigError> {
    if beds == 0 {
        return Err(ConfigError::ZeroBeds { room });
    }
    if beds > MAX_BEDS_PER_ROOM {
        return Err(ConfigError::TooManyBeds {
            room,
            beds,
            max: MAX_BEDS_PER_ROOM,
        });
    }
    Ok(())
}

/// Check a horizon against `[1, MAX_HORIZON_DAYS]`
pub fn validate_horizon(days: usize) -> Result<(), ConfigError> {
    if days == 0 {
        return Err(ConfigError::ZeroHorizon);
    }
    if days > MAX_HORIZON_DAYS {
        return Err(ConfigError::HorizonTooLong {
            days,
            max: MAX_HORIZON_DAYS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_limits() {
        assert_eq!(
            validate_beds(RoomKind::Ward, 0),
            Err(ConfigError::ZeroBeds {
                room: RoomKind::Ward
            })
        );
        assert!(validate_beds(RoomKind::Ward, 1).is_ok());
        assert!(validate_beds(RoomKind::Icu, MAX_BEDS_PER_ROOM).is_ok());
        assert_eq!(
            validate_beds(RoomKind::Icu, MAX_BEDS_PER_ROOM + 1),
            Err(ConfigError::TooManyBeds {
                room: RoomKind::Icu,
                beds: MAX_BEDS_PER_ROOM + 1,
                max: MAX_BEDS_PER_ROOM,
            })
        );
    }

    #[test]
    fn test_horizon_limits() {
        assert_eq!(validate_horizon(0), Err(ConfigError::ZeroHorizon));
        assert!(validate_horizon(MAX_HORIZON_DAYS).is_ok());
        assert_eq!(
            validate_horizon(usize::MAX),
            Err(ConfigError::HorizonTooLong {
                days: usize::MAX,
                max: MAX_HORIZON_DAYS,
            })
        );
    }
}
