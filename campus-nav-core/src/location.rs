//! Contract with the host platform's geolocation service.
//!
//! Acquiring a position is asynchronous and happens outside this crate. The
//! tracker hands out numbered requests, keeps only the latest one pending and
//! decides what to do with the result when it comes back: accept it, report a
//! failure, or drop it as stale.

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use crate::Error;
use crate::model::Coordinates;

/// Geolocation failure classes. None of them are fatal; directions fall back
/// to the campus center.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location information unavailable")]
    PositionUnavailable,
    #[error("Location request timed out")]
    Timeout,
    #[error("Geolocation is not supported on this device")]
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationOptions {
    pub high_accuracy: bool,
    /// Bound on a single request, in milliseconds
    pub timeout_ms: u64,
    /// Cached fixes younger than this are reused, in milliseconds
    pub maximum_age_ms: u64,
}

impl Default for LocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            maximum_age_ms: 60_000,
        }
    }
}

impl LocationOptions {
    pub fn timeout(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::try_from(self.timeout_ms).unwrap_or(i64::MAX))
    }

    pub fn maximum_age(&self) -> TimeDelta {
        TimeDelta::milliseconds(i64::try_from(self.maximum_age_ms).unwrap_or(i64::MAX))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRequest {
    pub id: u64,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub coordinates: Coordinates,
    pub acquired_at: DateTime<Utc>,
}

impl LocationFix {
    pub fn age(&self, now: DateTime<Utc>) -> TimeDelta {
        now.signed_duration_since(self.acquired_at)
    }

    /// A fix stamped after `now` is never fresh
    pub fn is_fresh(&self, now: DateTime<Utc>, maximum_age: TimeDelta) -> bool {
        let age = self.age(now);
        age >= TimeDelta::zero() && age <= maximum_age
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestOutcome {
    /// A recent fix satisfies the request; nothing to ask the platform
    Cached(LocationFix),
    /// The platform should be asked for a position under this request id
    Issued(LocationRequest),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Accepted(LocationFix),
    Failed(LocationError),
    /// Result for a request that was superseded, expired or never issued
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationTracker {
    pub options: LocationOptions,
    next_id: u64,
    pending: Option<LocationRequest>,
    last_fix: Option<LocationFix>,
}

impl LocationTracker {
    pub fn new(options: LocationOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn pending(&self) -> Option<&LocationRequest> {
        self.pending.as_ref()
    }

    pub fn last_fix(&self) -> Option<&LocationFix> {
        self.last_fix.as_ref()
    }

    /// Checks state restored from outside: fixes must be usable coordinates,
    /// nothing may be stamped after `now` and a pending request must have
    /// been issued by this tracker.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidCoordinates` for a bad fix and
    /// `Error::InvalidData` for inconsistent timestamps or request ids
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), Error> {
        if let Some(fix) = &self.last_fix {
            fix.coordinates.validate()?;
            if fix.acquired_at > now {
                return Err(Error::InvalidData(format!(
                    "Location fix acquired in the future ({})",
                    fix.acquired_at
                )));
            }
        }
        if let Some(request) = &self.pending {
            if request.id == 0 || request.id > self.next_id {
                return Err(Error::InvalidData(format!(
                    "Location request {} was never issued",
                    request.id
                )));
            }
            if request.issued_at > now {
                return Err(Error::InvalidData(format!(
                    "Location request {} issued in the future ({})",
                    request.id, request.issued_at
                )));
            }
        }
        if self.next_id == u64::MAX {
            return Err(Error::InvalidData("Location request ids exhausted".to_string()));
        }
        Ok(())
    }

    /// Start a position request, superseding any pending one
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidData` once request ids are exhausted
    pub fn request(&mut self, now: DateTime<Utc>) -> Result<RequestOutcome, Error> {
        let maximum_age = self.options.maximum_age();
        if let Some(fix) = self.last_fix.filter(|fix| fix.is_fresh(now, maximum_age)) {
            return Ok(RequestOutcome::Cached(fix));
        }

        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| Error::InvalidData("Location request ids exhausted".to_string()))?;
        let request = LocationRequest {
            id: self.next_id,
            issued_at: now,
        };
        if let Some(previous) = self.pending.replace(request) {
            debug!("Location request {} superseded by {}", previous.id, request.id);
        }
        Ok(RequestOutcome::Issued(request))
    }

    /// Deliver the platform's answer for `request_id`
    pub fn resolve(
        &mut self,
        request_id: u64,
        result: Result<Coordinates, LocationError>,
        now: DateTime<Utc>,
    ) -> Resolution {
        let request = match self.pending {
            Some(request) if request.id == request_id => request,
            _ => {
                debug!("Discarding stale location result for request {request_id}");
                return Resolution::Stale;
            }
        };
        self.pending = None;

        if now.signed_duration_since(request.issued_at) > self.options.timeout() {
            return Resolution::Failed(LocationError::Timeout);
        }

        match result.and_then(|c| c.validate().map_err(|_| LocationError::PositionUnavailable)) {
            Ok(coordinates) => {
                let fix = LocationFix {
                    coordinates,
                    acquired_at: now,
                };
                self.last_fix = Some(fix);
                Resolution::Accepted(fix)
            }
            Err(error) => Resolution::Failed(error),
        }
    }

    /// Time out the pending request once it has waited longer than allowed
    pub fn expire(&mut self, now: DateTime<Utc>) -> Option<LocationError> {
        let request = self.pending?;
        if now.signed_duration_since(request.issued_at) > self.options.timeout() {
            self.pending = None;
            debug!("Location request {} timed out", request.id);
            Some(LocationError::Timeout)
        } else {
            None
        }
    }

    /// Drop the pending request; a later result for it will be stale
    pub fn cancel(&mut self) -> Option<LocationRequest> {
        self.pending.take()
    }
}
