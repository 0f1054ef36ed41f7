use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use hdmobil_api::modules::auth::model::{Role, TokenIdentity};
use hdmobil_api::modules::auth::service::{
    AdminDirectory, AuthResolver, IdentityError, IdentityProvider,
};
use uuid::Uuid;

struct StubProvider {
    identity: Option<TokenIdentity>,
    calls: AtomicUsize,
}

impl StubProvider {
    fn accepting(email: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            identity: Some(TokenIdentity {
                id: subject(),
                email: email.map(str::to_string),
            }),
            calls: AtomicUsize::new(0),
        })
    }

    fn rejecting() -> Arc<Self> {
        Arc::new(Self {
            identity: None,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl IdentityProvider for StubProvider {
    async fn introspect(&self, _token: &str) -> Result<TokenIdentity, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.identity.clone().ok_or(IdentityError::Rejected)
    }
}

struct StubDirectory {
    flag: Option<bool>,
}

#[async_trait]
impl AdminDirectory for StubDirectory {
    async fn admin_flag(&self, _subject_id: Uuid) -> Result<Option<bool>, sqlx::Error> {
        Ok(self.flag)
    }
}

fn subject() -> Uuid {
    Uuid::from_u128(7)
}

fn build_resolver(provider: Arc<StubProvider>, flag: Option<bool>) -> AuthResolver {
    AuthResolver::new(provider, Arc::new(StubDirectory { flag }), "@hdmobil.sk".to_string())
}

#[tokio::test]
async fn test_header_shapes_that_never_reach_the_provider() {
    let provider = StubProvider::accepting(Some("a@hdmobil.sk"));
    let resolver = build_resolver(provider.clone(), None);

    for header in [None, Some(""), Some("Basic dXNlcg=="), Some("bearer x"), Some("Bearer")] {
        assert_eq!(resolver.resolve(header).await, None);
    }
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_rejected_credential_resolves_to_anonymous() {
    let provider = StubProvider::rejecting();
    let resolver = build_resolver(provider.clone(), None);

    assert_eq!(resolver.resolve(Some("Bearer stale")).await, None);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_role_matrix() {
    // (allow-list flag, email, expected role)
    let cases = [
        (Some(true), Some("shopper@example.com"), Role::Admin),
        (Some(false), Some("staff@hdmobil.sk"), Role::User),
        (None, Some("staff@hdmobil.sk"), Role::Admin),
        (None, Some("shopper@example.com"), Role::User),
        (None, Some("staff@HDMOBIL.SK"), Role::User),
        (None, None, Role::User),
    ];

    for (flag, email, expected) in cases {
        let resolver = build_resolver(StubProvider::accepting(email), flag);
        let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
        assert_eq!(principal.role, expected, "flag={flag:?} email={email:?}");
    }
}

#[tokio::test]
async fn test_principal_carries_subject_and_email() {
    let resolver = build_resolver(StubProvider::accepting(Some("staff@hdmobil.sk")), None);

    let principal = resolver.resolve(Some("Bearer good")).await.unwrap();
    assert_eq!(principal.id, subject());
    assert_eq!(principal.email.as_deref(), Some("staff@hdmobil.sk"));
    assert!(principal.is_admin());
}
