use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A registered external API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInterface {
    pub id: i64,
    pub name: Option<String>,
    pub interface_type: Option<String>, // REST, SOAP, GraphQL, etc.
    pub base_url: Option<String>,
    pub description: Option<String>,
    pub auth_type: Option<String>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// The caller-writable attributes of an interface.
///
/// Saving these replaces every mutable attribute at once; the id, timestamps
/// and owned endpoints are never taken from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceFields {
    pub name: Option<String>,
    pub interface_type: Option<String>,
    pub base_url: Option<String>,
    pub description: Option<String>,
    pub auth_type: Option<String>,
    pub is_active: bool,
}

impl Default for InterfaceFields {
    /// No attributes set, active
    fn default() -> Self {
        Self {
            name: None,
            interface_type: None,
            base_url: None,
            description: None,
            auth_type: None,
            is_active: true,
        }
    }
}

impl InterfaceFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl ApiInterface {
    /// Build a fresh record from its fields, stamped with `now`
    pub fn from_fields(id: i64, fields: &InterfaceFields, now: OffsetDateTime) -> Self {
        Self {
            id,
            name: fields.name.clone(),
            interface_type: fields.interface_type.clone(),
            base_url: fields.base_url.clone(),
            description: fields.description.clone(),
            auth_type: fields.auth_type.clone(),
            is_active: fields.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable attributes and refresh `updated_at`
    pub fn apply(&mut self, fields: &InterfaceFields, now: OffsetDateTime) {
        self.name = fields.name.clone();
        self.interface_type = fields.interface_type.clone();
        self.base_url = fields.base_url.clone();
        self.description = fields.description.clone();
        self.auth_type = fields.auth_type.clone();
        self.is_active = fields.is_active;
        self.updated_at = now;
    }

    /// The writable part of this record
    pub fn fields(&self) -> InterfaceFields {
        InterfaceFields {
            name: self.name.clone(),
            interface_type: self.interface_type.clone(),
            base_url: self.base_url.clone(),
            description: self.description.clone(),
            auth_type: self.auth_type.clone(),
            is_active: self.is_active,
        }
    }
}
