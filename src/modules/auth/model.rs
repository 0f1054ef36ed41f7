use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Role attached to an authenticated principal.
///
/// `Admin` is granted either by an explicit allow-list entry or, when no
/// entry exists, by the organization e-mail domain heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// The authenticated identity attached to one request.
///
/// Immutable for the lifetime of the request; never persisted by this
/// service (the identity provider owns the source of truth).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Principal {
    pub id: Uuid,
    pub email: Option<String>,
    pub role: Role,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Subject data returned by the identity provider's introspection
/// endpoint (GoTrue `GET /auth/v1/user`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenIdentity {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `GET /api/auth/session`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Principal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_token_identity_tolerates_missing_email() {
        let identity: TokenIdentity =
            serde_json::from_str(r#"{"id":"00000000-0000-0000-0000-000000000001"}"#).unwrap();
        assert!(identity.email.is_none());
    }
}
