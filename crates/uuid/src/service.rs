//! Internal implementation of encounter identifiers and arrival stamps.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::sync::Mutex;

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Canonical encounter identifier (32 lowercase hex characters, no hyphens).
///
/// [`EncounterId::new`] is the only constructor; the value displays in canonical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncounterId(Uuid);

impl Default for EncounterId {
    fn default() -> Self {
        Self::new()
    }
}

impl EncounterId {
    /// Generates a new random (RFC 4122 v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for EncounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EncounterId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// The moment an encounter joined the queue.
///
/// Format when displayed: `YYYYMMDDTHHMMSS.mmmZ`, e.g. `20260111T143522.045Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArrivalStamp(DateTime<Utc>);

impl ArrivalStamp {
    const FORMAT: &'static str = "%Y%m%dT%H%M%S%.3fZ";

    /// Wraps an explicit timestamp.
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self(timestamp)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for ArrivalStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ArrivalStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Hands out strictly increasing [`ArrivalStamp`]s.
///
/// If the wall clock has not moved past the previous stamp (coarse clock resolution, or the
/// system clock stepping backwards), the new stamp is the previous one plus 1 ms.
#[derive(Debug, Default)]
pub struct ArrivalClock {
    last: Mutex<Option<DateTime<Utc>>>,
}

impl ArrivalClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps an arrival at the current wall-clock time.
    pub fn stamp(&self) -> ArrivalStamp {
        self.stamp_at(Utc::now())
    }

    /// Stamps an arrival observed at `now`, keeping the clock monotonic.
    pub fn stamp_at(&self, now: DateTime<Utc>) -> ArrivalStamp {
        // A poisoned lock only means another thread panicked mid-stamp; the stored value is
        // still a valid timestamp.
        let mut last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let timestamp = match *last {
            Some(prev) if now <= prev => prev + Duration::milliseconds(1),
            _ => now,
        };
        *last = Some(timestamp);

        ArrivalStamp(timestamp)
    }

    /// The most recent stamp handed out, if any.
    pub fn last(&self) -> Option<ArrivalStamp> {
        let last = match self.last.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        last.map(ArrivalStamp)
    }
}
