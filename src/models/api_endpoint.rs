use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// A single route on an interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub id: i64,
    pub api_interface_id: i64,
    pub http_method: Option<String>, // GET, POST, PUT, DELETE, PATCH, etc.
    pub path: Option<String>,
    pub description: Option<String>,
    pub request_example: Option<Value>,
    pub response_example: Option<Value>,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// The caller-writable attributes of an endpoint. The owner is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointFields {
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    pub request_example: Option<Value>,
    pub response_example: Option<Value>,
    pub is_active: bool,
}

impl EndpointFields {
    pub fn new(http_method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: Some(http_method.into()),
            path: Some(path.into()),
            description: None,
            request_example: None,
            response_example: None,
            is_active: true,
        }
    }
}

impl ApiEndpoint {
    pub fn from_fields(
        id: i64,
        api_interface_id: i64,
        fields: &EndpointFields,
        now: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            api_interface_id,
            http_method: fields.http_method.clone(),
            path: fields.path.clone(),
            description: fields.description.clone(),
            request_example: fields.request_example.clone(),
            response_example: fields.response_example.clone(),
            is_active: fields.is_active,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, fields: &EndpointFields, now: OffsetDateTime) {
        self.http_method = fields.http_method.clone();
        self.path = fields.path.clone();
        self.description = fields.description.clone();
        self.request_example = fields.request_example.clone();
        self.response_example = fields.response_example.clone();
        self.is_active = fields.is_active;
        self.updated_at = now;
    }
}
