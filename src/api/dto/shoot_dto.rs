//! Shoot request DTO and its validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ShootFields;
use crate::domain::shoot::parse_shoot_date;
use crate::error::TrackerError;

/// Request body for creating or replacing a shoot in either bucket.
///
/// Every field is optional at the JSON level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShootRequest {
    /// Name of the model photographed.
    #[serde(default)]
    pub model_name: Option<String>,
    /// Name of the salon.
    #[serde(default)]
    pub salon_name: Option<String>,
    /// Shoot date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub date: Option<String>,
    /// Price as a JSON number or a numeric string. Must be non-negative.
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Value>,
}

impl ShootRequest {
    /// Validates the request into store-ready fields.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidRequest`] naming the first missing or
    /// malformed field.
    pub fn into_fields(self) -> Result<ShootFields, TrackerError> {
        let model_name = required_text("modelName", self.model_name)?;
        let salon_name = required_text("salonName", self.salon_name)?;
        let date = required_text("date", self.date)?;
        if parse_shoot_date(&date).is_none() {
            return Err(TrackerError::InvalidRequest(format!(
                "date must be YYYY-MM-DD or an RFC 3339 timestamp, got {date:?}"
            )));
        }
        let price = parse_price(self.price.as_ref())?;

        Ok(ShootFields {
            model_name,
            salon_name,
            date,
            price,
        })
    }
}

/// Response body for successful deletes.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Wraps a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn required_text(field: &str, value: Option<String>) -> Result<String, TrackerError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(TrackerError::InvalidRequest(format!("{field} is required"))),
    }
}

fn parse_price(value: Option<&Value>) -> Result<f64, TrackerError> {
    let parsed = match value {
        None | Some(Value::Null) => {
            return Err(TrackerError::InvalidRequest("price is required".to_string()));
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(TrackerError::InvalidRequest(
            "price must be a non-negative number".to_string(),
        )),
    }
}
