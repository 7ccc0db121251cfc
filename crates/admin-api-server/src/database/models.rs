use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use validator::Validate;

/// A tenant row: one customer/organization and where its own data lives.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tenant {
    pub id: i32,
    pub name: String,
    pub domain: String,
    pub database_url: String,
    pub is_active: bool,
    pub config: Value,
    pub created_at: DateTime<Utc>,
    /// Null until the first update.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields required to create a new tenant.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTenant {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub domain: String,
    #[validate(length(min = 1, max = 500, message = "must be 1-500 characters"))]
    pub database_url: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub config: Map<String, Value>,
}

/// Partial update: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTenant {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub domain: Option<String>,
    #[validate(length(min = 1, max = 500, message = "must be 1-500 characters"))]
    pub database_url: Option<String>,
    pub is_active: Option<bool>,
    pub config: Option<Map<String, Value>>,
}

fn default_is_active() -> bool {
    true
}
