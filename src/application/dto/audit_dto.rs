use serde::{Deserialize, Serialize};

use crate::domain::audit::AuditStamp;

/// The audit fields every transfer object carries across the boundary.
/// Concrete DTOs embed this (flattened) next to their feature fields.
/// Timestamps cross the boundary as RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditDto {
    pub id: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<&AuditStamp> for AuditDto {
    fn from(stamp: &AuditStamp) -> Self {
        Self {
            id: stamp.id.to_string(),
            created_at: stamp.created_at.map(|at| at.to_rfc3339()),
            updated_at: stamp.updated_at.map(|at| at.to_rfc3339()),
        }
    }
}
