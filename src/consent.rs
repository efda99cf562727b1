//! Visitor consent and tracking identifiers.
//!
//! Consent is stored as JSON with a millisecond timestamp, once for Google
//! Analytics (`ga_consent`) and once for the Meta pixel
//! (`meta_pixel_consent`). A stored consent counts for one year.
//! Tracking ids are plain strings, stored without JSON quoting.

use crate::{content::StorageKey, log, store::ContentStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a stored consent stays valid, in milliseconds.
pub const CONSENT_TTL_MS: i64 = 365 * 24 * 60 * 60 * 1000;

const fn default_true() -> bool {
    true
}

/// The visitor's choice in the cookie banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentChoice {
    pub analytics: bool,
    pub marketing: bool,
    #[serde(default = "default_true")]
    pub functionality: bool,
}

impl ConsentChoice {
    pub const ACCEPT_ALL: Self = Self {
        analytics: true,
        marketing: true,
        functionality: true,
    };

    /// Only what the site needs to work.
    pub const NECESSARY: Self = Self {
        analytics: false,
        marketing: false,
        functionality: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    #[serde(flatten)]
    pub choice: ConsentChoice,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

impl ConsentRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis().saturating_sub(self.timestamp) >= CONSENT_TTL_MS
    }
}

/// Tracker a consent record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentKind {
    Analytics,
    MetaPixel,
}

impl ConsentKind {
    pub const ALL: [Self; 2] = [Self::Analytics, Self::MetaPixel];

    pub const fn key(self) -> StorageKey {
        match self {
            Self::Analytics => StorageKey::GaConsent,
            Self::MetaPixel => StorageKey::MetaPixelConsent,
        }
    }
}

impl fmt::Display for ConsentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Analytics => "analytics",
            Self::MetaPixel => "meta pixel",
        })
    }
}

// ============================================================================
// Consent
// ============================================================================

/// Store `choice` for one tracker, stamped with `now`.
pub fn store_consent(
    store: &ContentStore,
    kind: ConsentKind,
    choice: ConsentChoice,
    now: DateTime<Utc>,
) -> ConsentRecord {
    let record = ConsentRecord {
        choice,
        timestamp: now.timestamp_millis(),
    };
    store.set(kind.key(), &record);
    record
}

/// Store `choice` for every tracker, as the cookie banner does.
pub fn record_consent(store: &ContentStore, choice: ConsentChoice, now: DateTime<Utc>) {
    for kind in ConsentKind::ALL {
        store_consent(store, kind, choice, now);
    }
    log!("store"; "consent saved (analytics: {}, marketing: {})", choice.analytics, choice.marketing);
}

/// The stored consent for `kind`, unless absent, unreadable or expired.
pub fn stored_consent(store: &ContentStore, kind: ConsentKind, now: DateTime<Utc>) -> Option<ConsentRecord> {
    store
        .get::<ConsentRecord>(kind.key())
        .filter(|record| !record.is_expired(now))
}

/// Forget every stored consent.
pub fn revoke_all(store: &ContentStore) {
    for kind in ConsentKind::ALL {
        store.remove(kind.key());
    }
}

// ============================================================================
// Tracking ids
// ============================================================================

/// Configurable tracking identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingId {
    /// Google Analytics 4 measurement id, e.g. `G-XXXXXXX`
    GaMeasurement,
    MetaPixel,
    /// Meta test event code for the events manager
    MetaTestEvent,
}

impl TrackingId {
    pub const ALL: [Self; 3] = [Self::GaMeasurement, Self::MetaPixel, Self::MetaTestEvent];

    pub const fn key(self) -> StorageKey {
        match self {
            Self::GaMeasurement => StorageKey::GaMeasurementId,
            Self::MetaPixel => StorageKey::MetaPixelId,
            Self::MetaTestEvent => StorageKey::MetaTestEventCode,
        }
    }
}

/// Store a tracking id, trimmed. A blank value removes it.
pub fn set_tracking_id(store: &ContentStore, id: TrackingId, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        store.remove(id.key());
    } else {
        store.set_raw(id.key(), value);
    }
}

pub fn tracking_id(store: &ContentStore, id: TrackingId) -> Option<String> {
    store.get_raw(id.key())
}
