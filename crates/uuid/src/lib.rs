//! Identifier and arrival-time utilities for the triage queue.
//!
//! Every encounter placed in the queue carries two values from this crate:
//!
//! - an [`EncounterId`], a *canonical* UUID (**32 lowercase hexadecimal characters**, no
//!   hyphens) used to correlate log lines for one visit, and
//! - an [`ArrivalStamp`], the UTC time the encounter was created.
//!
//! ## Canonical UUID form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! Identifiers are generated here and only ever written out (logs, serialised reports).
//!
//! ## Arrival ordering
//! Stamps handed out by one [`ArrivalClock`] never go backwards, even if the system clock does,
//! and two stamps from the same clock are never equal. Queue ordering among patients of the same
//! risk relies on this.

mod service;

pub use service::{ArrivalClock, ArrivalStamp, EncounterId, Uuid};
