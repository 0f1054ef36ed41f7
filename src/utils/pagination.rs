use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
}

impl PaginationMeta {
    pub fn new(total: i64, params: &PaginationParams, returned: usize) -> Self {
        Self {
            total,
            page: params.page(),
            limit: params.limit(),
            has_more: params.offset() + (returned as i64) < total,
        }
    }
}

/// Page-number pagination as used by the storefront listings.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).max(1).min(100)
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_follows_page() {
        let params = PaginationParams {
            page: Some(3),
            limit: Some(10),
        };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_limit_clamped() {
        let params = PaginationParams {
            page: None,
            limit: Some(500),
        };
        assert_eq!(params.limit(), 100);

        let params = PaginationParams {
            page: None,
            limit: Some(0),
        };
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_page_clamped_to_one() {
        let params = PaginationParams {
            page: Some(-2),
            limit: None,
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_meta_has_more() {
        let params = PaginationParams {
            page: Some(1),
            limit: Some(10),
        };
        let meta = PaginationMeta::new(25, &params, 10);
        assert!(meta.has_more);

        let params = PaginationParams {
            page: Some(3),
            limit: Some(10),
        };
        let meta = PaginationMeta::new(25, &params, 5);
        assert!(!meta.has_more);
    }
}
