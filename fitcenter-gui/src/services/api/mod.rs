pub mod client;

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;

pub use client::HttpBackend;

/// The account families exposed by the backend. Each role has its own
/// endpoint family, its own registration schema and its own identifier
/// field in create responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Member,
    Admin,
    Trainer,
}

pub const ROLES: [Role; 3] = [Role::Member, Role::Admin, Role::Trainer];

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Admin => "Admin",
            Self::Trainer => "Trainer",
        }
    }

    /// Path segment of the role's endpoint family.
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Admin => "admin",
            Self::Trainer => "trainer",
        }
    }

    /// Name of the identifier field in the create response body.
    pub fn id_field(&self) -> &'static str {
        match self {
            Self::Member => "member_id",
            Self::Admin => "admin_id",
            Self::Trainer => "trainer_id",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::Member => "View classes, track health",
            Self::Admin => "Manage system",
            Self::Trainer => "Set availability",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The full field record sent to the create endpoint of a role. Optional
/// fields are sent as empty strings, the backend treats them as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RegistrationForm {
    Member {
        name: String,
        email: String,
        date_of_birth: String,
        gender: String,
        phone: String,
    },
    Trainer {
        name: String,
        email: String,
        specialization: String,
        phone: String,
    },
    Admin {
        name: String,
        email: String,
        role: String,
    },
}

impl RegistrationForm {
    pub fn role(&self) -> Role {
        match self {
            Self::Member { .. } => Role::Member,
            Self::Trainer { .. } => Role::Trainer,
            Self::Admin { .. } => Role::Admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the payload, with an optional human-readable
    /// detail (e.g. a duplicate email).
    Conflict(Option<String>),
    /// No entity with the requested identifier.
    NotFound,
    /// The backend could not be reached or answered something unexpected.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Conflict(Some(detail)) => write!(f, "Request rejected: {}", detail),
            Self::Conflict(None) => write!(f, "Request rejected"),
            Self::NotFound => write!(f, "Not found"),
            Self::Transport(e) => write!(f, "Backend unreachable: {}", e),
        }
    }
}

/// Client for the fitness center backend.
#[async_trait]
pub trait Backend: std::fmt::Debug + Send + Sync {
    /// Create a new entity for the form's role, returning its identifier.
    async fn create(&self, form: &RegistrationForm) -> Result<i64, ApiError>;

    /// Fetch an entity of the given role by identifier.
    async fn get_by_id(&self, role: Role, id: i64) -> Result<serde_json::Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_descriptors() {
        for role in ROLES {
            assert_eq!(role.api_path(), role.display_name().to_lowercase());
            assert!(role.id_field().starts_with(role.api_path()));
        }
    }

    #[test]
    fn registration_form_serializes_flat() {
        let form = RegistrationForm::Trainer {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            specialization: "".to_string(),
            phone: "".to_string(),
        };
        let value = serde_json::to_value(&form).expect("must serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "specialization": "",
                "phone": "",
            })
        );
    }
}
