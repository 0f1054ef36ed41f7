use std::env;

/// Slovak business-register lookup endpoint (company search by IČO).
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    pub base_url: String,
}

impl RegistryConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("COMPANY_REGISTRY_URL")
                .unwrap_or_else(|_| {
                    "https://autoform.ekosystem.slovensko.digital/api/corporate_bodies".to_string()
                })
                .trim_end_matches('/')
                .to_string(),
        }
    }
}
