// --- File: crates/policyhub_common/src/models.rs ---

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An account holder and their subscription state.
///
/// `password` holds the hasher's digest and is never serialised.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Access is granted only while this lies in the future
    pub subscription_expiry: Option<DateTime<Utc>>,
    /// Set once the first payment has been recorded; informational only
    pub has_paid: bool,
}

/// A policyholder record.
///
/// Fields other than `id` are kept exactly as the client sent them: a
/// number stays a number and a string stays a string. Absent fields are null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Member {
    /// Assigned by the store; ignored in request bodies
    pub id: Option<i64>,
    pub name: Value,
    /// Unique across members; must not be null
    pub id_number: Value,
    pub address: Value,
}

/// An insurance policy held by a member. Fields pass through like [`Member`]'s.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Policy {
    /// Assigned by the store; ignored in request bodies
    pub id: Option<i64>,
    pub member_id: Value,
    pub plan_type: Value,
    pub cover_level: Value,
    pub premium: Value,
    pub start_date: Value,
    pub status: Value,
}
