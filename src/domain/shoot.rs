//! Shoot records for the pending and edited buckets.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ShootId;

/// Content fields shared by both buckets.
///
/// These are the fields a client supplies on create and update. They are
/// carried unchanged across bucket moves.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootFields {
    /// Name of the model photographed.
    pub model_name: String,
    /// Name of the salon the shoot was booked for.
    pub salon_name: String,
    /// Shoot date as supplied by the client (`YYYY-MM-DD` or RFC 3339).
    pub date: String,
    /// Agreed price. Finite and non-negative once past API validation.
    pub price: f64,
}

/// A booking in the pending bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shoot {
    /// Identifier, unique within the pending bucket.
    pub id: ShootId,
    /// Name of the model photographed.
    pub model_name: String,
    /// Name of the salon.
    pub salon_name: String,
    /// Shoot date as supplied by the client.
    pub date: String,
    /// Agreed price.
    pub price: f64,
    /// When the booking was first recorded. Preserved across moves.
    pub created_at: DateTime<Utc>,
    /// Last mutation of this record.
    pub updated_at: DateTime<Utc>,
}

impl Shoot {
    /// Creates a fresh pending record with `created_at == updated_at == now`.
    #[must_use]
    pub fn new(id: ShootId, fields: ShootFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            model_name: fields.model_name,
            salon_name: fields.salon_name,
            date: fields.date,
            price: fields.price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy of the content fields.
    #[must_use]
    pub fn fields(&self) -> ShootFields {
        ShootFields {
            model_name: self.model_name.clone(),
            salon_name: self.salon_name.clone(),
            date: self.date.clone(),
            price: self.price,
        }
    }

    /// Replaces the content fields and refreshes `updated_at`.
    pub fn apply(&mut self, fields: ShootFields, now: DateTime<Utc>) {
        self.model_name = fields.model_name;
        self.salon_name = fields.salon_name;
        self.date = fields.date;
        self.price = fields.price;
        self.updated_at = refreshed(self.updated_at, now);
    }
}

/// A booking in the edited bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditedShoot {
    /// Identifier, unique within the edited bucket.
    pub id: ShootId,
    /// Id the record had in the pending bucket. Provenance only.
    pub original_shoot_id: ShootId,
    /// Name of the model photographed.
    pub model_name: String,
    /// Name of the salon.
    pub salon_name: String,
    /// Shoot date as supplied by the client.
    pub date: String,
    /// Agreed price.
    pub price: f64,
    /// Creation time carried over from the pending record.
    pub created_at: DateTime<Utc>,
    /// Set when the record is moved into the bucket or updated.
    pub edited_at: DateTime<Utc>,
}

impl EditedShoot {
    /// Builds the edited-bucket counterpart of `shoot` under a new id.
    #[must_use]
    pub fn from_pending(id: ShootId, shoot: Shoot, now: DateTime<Utc>) -> Self {
        let edited_at = refreshed(shoot.updated_at, now);
        Self {
            id,
            original_shoot_id: shoot.id,
            model_name: shoot.model_name,
            salon_name: shoot.salon_name,
            date: shoot.date,
            price: shoot.price,
            created_at: shoot.created_at,
            edited_at,
        }
    }

    /// Builds the pending-bucket counterpart of this record under a new id.
    #[must_use]
    pub fn into_pending(self, id: ShootId, now: DateTime<Utc>) -> Shoot {
        let updated_at = refreshed(self.edited_at, now);
        Shoot {
            id,
            model_name: self.model_name,
            salon_name: self.salon_name,
            date: self.date,
            price: self.price,
            created_at: self.created_at,
            updated_at,
        }
    }

    /// Returns a copy of the content fields.
    #[must_use]
    pub fn fields(&self) -> ShootFields {
        ShootFields {
            model_name: self.model_name.clone(),
            salon_name: self.salon_name.clone(),
            date: self.date.clone(),
            price: self.price,
        }
    }

    /// Replaces the content fields and refreshes `edited_at`.
    pub fn apply(&mut self, fields: ShootFields, now: DateTime<Utc>) {
        self.model_name = fields.model_name;
        self.salon_name = fields.salon_name;
        self.date = fields.date;
        self.price = fields.price;
        self.edited_at = refreshed(self.edited_at, now);
    }
}

/// Parses a shoot date given either as `YYYY-MM-DD` or as an RFC 3339
/// date-time. For date-times the calendar date in the given offset is used.
#[must_use]
pub fn parse_shoot_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Returns `now`, or one microsecond past `previous` if the clock has not
/// moved beyond it. Mutation timestamps never stand still or go backwards.
#[must_use]
pub fn refreshed(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + chrono::Duration::microseconds(1)
    }
}
