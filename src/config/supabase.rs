use std::env;

/// Identity-provider configuration.
///
/// Authentication is delegated to Supabase GoTrue: the API never issues
/// tokens itself, it only introspects the bearer tokens the storefront
/// obtained from the provider.
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    /// Base URL of the Supabase project (no trailing slash).
    pub url: String,
    /// Publishable anon key, sent as the `apikey` header.
    pub anon_key: String,
    /// Accounts with an email under this suffix default to the admin
    /// role unless the allow-list says otherwise.
    pub admin_email_domain: String,
}

impl SupabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| "http://localhost:54321".to_string())
                .trim_end_matches('/')
                .to_string(),
            anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
            admin_email_domain: env::var("ADMIN_EMAIL_DOMAIN")
                .unwrap_or_else(|_| "@hdmobil.sk".to_string()),
        }
    }
}
