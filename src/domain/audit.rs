use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The shared identity/timestamp shape carried by every persisted entity.
///
/// `created_at` and `updated_at` start out unset and are only ever written
/// by the persistence context during a commit. `None` is the "never
/// committed" / "never modified" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStamp {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AuditStamp {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Default for AuditStamp {
    fn default() -> Self {
        Self::new()
    }
}

/// Implemented by every entity that participates in audit stamping.
pub trait Audited {
    fn audit(&self) -> &AuditStamp;

    fn audit_mut(&mut self) -> &mut AuditStamp;

    fn id(&self) -> Uuid {
        self.audit().id
    }
}
