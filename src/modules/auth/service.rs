//! Request context resolution.
//!
//! Every API call passes through [`AuthResolver::resolve`], which turns
//! an optional `Authorization` header into an optional [`Principal`].
//! Resolution is total: a missing, malformed, expired or unverifiable
//! credential degrades to `None` instead of erroring, and downstream
//! extractors decide whether an unauthenticated request is acceptable.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::supabase::SupabaseConfig;

use super::model::{Principal, Role, TokenIdentity};

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("token rejected by identity provider")]
    Rejected,
}

/// Token introspection against the external identity provider.
///
/// Injected as a trait so tests can substitute a double for the HTTP
/// client.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn introspect(&self, token: &str) -> Result<TokenIdentity, IdentityError>;
}

/// Lookup of the explicit admin flag for a subject id.
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    async fn admin_flag(&self, subject_id: Uuid) -> Result<Option<bool>, sqlx::Error>;
}

/// GoTrue-backed identity provider.
pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl GoTrueClient {
    pub fn new(config: &SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }
}

#[async_trait]
impl IdentityProvider for GoTrueClient {
    async fn introspect(&self, token: &str) -> Result<TokenIdentity, IdentityError> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IdentityError::Rejected);
        }

        Ok(response.json::<TokenIdentity>().await?)
    }
}

/// Admin allow-list backed by the `admin_users` table.
pub struct PgAdminDirectory {
    db: PgPool,
}

impl PgAdminDirectory {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminDirectory for PgAdminDirectory {
    async fn admin_flag(&self, subject_id: Uuid) -> Result<Option<bool>, sqlx::Error> {
        let row: Option<(bool,)> =
            sqlx::query_as("SELECT is_admin FROM admin_users WHERE id = $1")
                .bind(subject_id)
                .fetch_optional(&self.db)
                .await?;

        Ok(row.map(|r| r.0))
    }
}

/// Resolves inbound credentials to a per-request [`Principal`].
///
/// Holds no cache and no shared mutable state; each call performs at
/// most one identity-provider round-trip and one allow-list read.
#[derive(Clone)]
pub struct AuthResolver {
    inner: Arc<ResolverInner>,
}

struct ResolverInner {
    provider: Arc<dyn IdentityProvider>,
    directory: Arc<dyn AdminDirectory>,
    admin_email_domain: String,
}

impl AuthResolver {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        directory: Arc<dyn AdminDirectory>,
        admin_email_domain: String,
    ) -> Self {
        Self {
            inner: Arc::new(ResolverInner {
                provider,
                directory,
                admin_email_domain,
            }),
        }
    }

    /// Resolve an `Authorization` header value to a principal.
    ///
    /// Total by construction: every failure path returns `None`. A
    /// request without a `Bearer` credential short-circuits before any
    /// network call is made.
    pub async fn resolve(&self, authorization: Option<&str>) -> Option<Principal> {
        let token = authorization?.strip_prefix(BEARER_PREFIX)?;

        let identity = match self.inner.provider.introspect(token).await {
            Ok(identity) => identity,
            Err(err) => {
                debug!(error = %err, "token introspection failed, treating request as anonymous");
                return None;
            }
        };

        // An unreachable allow-list must not fail the whole resolution;
        // it only means "no explicit flag".
        let flag = match self.inner.directory.admin_flag(identity.id).await {
            Ok(flag) => flag,
            Err(err) => {
                warn!(error = %err, subject = %identity.id, "admin allow-list lookup failed");
                None
            }
        };

        let role = self.derive_role(flag, identity.email.as_deref());

        Some(Principal {
            id: identity.id,
            email: identity.email,
            role,
        })
    }

    /// The explicit allow-list flag wins; without one the organization
    /// e-mail domain suffix (case-sensitive) decides.
    fn derive_role(&self, flag: Option<bool>, email: Option<&str>) -> Role {
        match flag {
            Some(true) => Role::Admin,
            Some(false) => Role::User,
            None => {
                if email.is_some_and(|email| email.ends_with(&self.inner.admin_email_domain)) {
                    Role::Admin
                } else {
                    Role::User
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeProvider {
        identity: Option<TokenIdentity>,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn accepting(id: Uuid, email: Option<&str>) -> Self {
            Self {
                identity: Some(TokenIdentity {
                    id,
                    email: email.map(str::to_string),
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                identity: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl IdentityProvider for FakeProvider {
        async fn introspect(&self, _token: &str) -> Result<TokenIdentity, IdentityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.identity.clone().ok_or(IdentityError::Rejected)
        }
    }

    struct FakeDirectory {
        flag: Option<bool>,
        fails: bool,
    }

    #[async_trait]
    impl AdminDirectory for FakeDirectory {
        async fn admin_flag(&self, _subject_id: Uuid) -> Result<Option<bool>, sqlx::Error> {
            if self.fails {
                return Err(sqlx::Error::PoolClosed);
            }
            Ok(self.flag)
        }
    }

    fn resolver(provider: Arc<FakeProvider>, flag: Option<bool>, fails: bool) -> AuthResolver {
        AuthResolver::new(
            provider,
            Arc::new(FakeDirectory { flag, fails }),
            "@hdmobil.sk".to_string(),
        )
    }

    fn subject() -> Uuid {
        Uuid::from_u128(0x42)
    }

    #[tokio::test]
    async fn test_missing_header_is_anonymous_without_network_call() {
        let provider = Arc::new(FakeProvider::accepting(subject(), None));
        let resolver = resolver(provider.clone(), None, false);

        assert_eq!(resolver.resolve(None).await, None);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_bearer_header_is_anonymous_without_network_call() {
        let provider = Arc::new(FakeProvider::accepting(subject(), None));
        let resolver = resolver(provider.clone(), None, false);

        assert_eq!(resolver.resolve(Some("Basic abc123")).await, None);
        // Prefix match is case-sensitive and includes the space.
        assert_eq!(resolver.resolve(Some("bearer abc123")).await, None);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rejected_token_is_anonymous() {
        let provider = Arc::new(FakeProvider::rejecting());
        let resolver = resolver(provider.clone(), None, false);

        assert_eq!(resolver.resolve(Some("Bearer expired")).await, None);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_explicit_allow_list_flag_grants_admin_regardless_of_email() {
        let provider = Arc::new(FakeProvider::accepting(subject(), Some("a@example.com")));
        let resolver = resolver(provider, Some(true), false);

        let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
        assert_eq!(principal.role, Role::Admin);
        assert_eq!(principal.id, subject());
    }

    #[tokio::test]
    async fn test_explicit_false_flag_overrides_domain_heuristic() {
        let provider = Arc::new(FakeProvider::accepting(subject(), Some("a@hdmobil.sk")));
        let resolver = resolver(provider, Some(false), false);

        let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
        assert_eq!(principal.role, Role::User);
    }

    #[tokio::test]
    async fn test_domain_suffix_grants_admin_without_flag() {
        let provider = Arc::new(FakeProvider::accepting(subject(), Some("a@hdmobil.sk")));
        let resolver = resolver(provider, None, false);

        let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
        assert_eq!(principal.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_foreign_domain_without_flag_is_user() {
        let provider = Arc::new(FakeProvider::accepting(subject(), Some("a@example.com")));
        let resolver = resolver(provider, None, false);

        let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
        assert_eq!(principal.role, Role::User);
    }

    #[tokio::test]
    async fn test_missing_email_without_flag_is_user() {
        let provider = Arc::new(FakeProvider::accepting(subject(), None));
        let resolver = resolver(provider, None, false);

        let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
        assert_eq!(principal.role, Role::User);
        assert_eq!(principal.email, None);
    }

    #[tokio::test]
    async fn test_directory_failure_falls_through_to_heuristic() {
        let provider = Arc::new(FakeProvider::accepting(subject(), Some("a@hdmobil.sk")));
        let resolver = resolver(provider, None, true);

        let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
        assert_eq!(principal.role, Role::Admin);

        let provider = Arc::new(FakeProvider::accepting(subject(), Some("a@example.com")));
        let resolver = self::resolver(provider, None, true);

        let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
        assert_eq!(principal.role, Role::User);
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent_for_unchanged_backing_state() {
        let provider = Arc::new(FakeProvider::accepting(subject(), Some("a@hdmobil.sk")));
        let resolver = resolver(provider, None, false);

        let first = resolver.resolve(Some("Bearer good")).await;
        let second = resolver.resolve(Some("Bearer good")).await;
        assert_eq!(first, second);
    }
}
