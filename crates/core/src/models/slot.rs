use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::timestamp;

/// A bookable time interval held by the store.
///
/// The booking is carried as `booked_by`; a slot is booked exactly when an
/// email is present, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub booked_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Slot {
    pub fn is_booked(&self) -> bool {
        self.booked_by.is_some()
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `[start, end)` intersects this slot. Touching endpoints do not.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        crate::rules::overlaps(start, end, self.start, self.end)
    }

    /// Whether this slot lies entirely inside `[from, to]`.
    pub fn is_within(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.start >= from && self.end <= to
    }
}

/// Client-facing view of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub id: Uuid,
    #[serde(with = "timestamp")]
    pub start: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end: DateTime<Utc>,
    pub booked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_by: Option<String>,
}

impl From<&Slot> for SlotResponse {
    fn from(slot: &Slot) -> Self {
        Self {
            id: slot.id,
            start: slot.start,
            end: slot.end,
            booked: slot.is_booked(),
            booked_by: slot.booked_by.clone(),
        }
    }
}

/// Filters for listing slots and bounds for availability queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQuery {
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option", skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked: Option<bool>,
}

impl SlotQuery {
    /// Whether a slot passes the `from`/`to` bounds on its start and the
    /// `booked` filter. Absent filters are not enforced.
    pub fn matches(&self, slot: &Slot) -> bool {
        if self.from.is_some_and(|from| slot.start < from) {
            return false;
        }
        if self.to.is_some_and(|to| slot.start > to) {
            return false;
        }
        if self.booked.is_some_and(|booked| slot.is_booked() != booked) {
            return false;
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    #[serde(with = "timestamp")]
    pub start: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub email: String,
}
