use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::registry::RegistryConfig;
use crate::utils::errors::AppError;

use super::model::{
    CompanyInfo, CompanyLookup, Customer, RegistryHit, UpdateCompanyInfoDto, UpdateProfileDto,
};

#[instrument(skip(db))]
pub async fn get_profile(db: &PgPool, customer_id: Uuid) -> Result<Customer, AppError> {
    sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
        .bind(customer_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!("Customer not found")))
}

#[instrument(skip(db, dto))]
pub async fn update_profile(
    db: &PgPool,
    customer_id: Uuid,
    dto: UpdateProfileDto,
) -> Result<Customer, AppError> {
    let customer = sqlx::query_as::<_, Customer>(
        "UPDATE customers SET \
            first_name = COALESCE($2, first_name), \
            last_name = COALESCE($3, last_name), \
            email = COALESCE($4, email), \
            phone = COALESCE($5, phone), \
            street = COALESCE($6, street), \
            city = COALESCE($7, city), \
            zip = COALESCE($8, zip), \
            country = COALESCE($9, country), \
            updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(customer_id)
    .bind(dto.first_name.as_deref())
    .bind(dto.last_name.as_deref())
    .bind(dto.email.as_deref())
    .bind(dto.phone.as_deref())
    .bind(dto.street.as_deref())
    .bind(dto.city.as_deref())
    .bind(dto.zip.as_deref())
    .bind(dto.country.as_deref())
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::not_found(anyhow!("Customer not found")))?;

    Ok(customer)
}

#[instrument(skip(db))]
pub async fn get_company_info(db: &PgPool, customer_id: Uuid) -> Result<CompanyInfo, AppError> {
    sqlx::query_as::<_, CompanyInfo>(
        "SELECT company_name, ico, dic, ic_dph FROM customers WHERE id = $1",
    )
    .bind(customer_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::not_found(anyhow!("Customer not found")))
}

#[instrument(skip(db, dto))]
pub async fn update_company_info(
    db: &PgPool,
    customer_id: Uuid,
    dto: UpdateCompanyInfoDto,
) -> Result<Customer, AppError> {
    let customer = sqlx::query_as::<_, Customer>(
        "UPDATE customers SET \
            company_name = $2, ico = $3, dic = $4, ic_dph = $5, updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(customer_id)
    .bind(&dto.company_name)
    .bind(&dto.ico)
    .bind(dto.dic.as_deref())
    .bind(dto.ic_dph.as_deref())
    .fetch_optional(db)
    .await?
    .ok_or_else(|| AppError::not_found(anyhow!("Customer not found")))?;

    Ok(customer)
}

/// Strip whitespace and require exactly 8 digits.
pub fn normalize_ico(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.len() == 8 && cleaned.chars().all(|c| c.is_ascii_digit()) {
        Some(cleaned)
    } else {
        None
    }
}

/// The register formats addresses as "street, city, zip". Missing parts
/// come back empty.
pub fn parse_registry_address(formatted: &str) -> (String, String, String) {
    let mut parts = formatted.split(',').map(str::trim);
    let street = parts.next().unwrap_or("").to_string();
    let city = parts.next().unwrap_or("").to_string();
    let zip: String = parts
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    (street, city, zip)
}

#[instrument(skip(http, registry))]
pub async fn lookup_company_by_ico(
    http: &reqwest::Client,
    registry: &RegistryConfig,
    ico: &str,
) -> Result<CompanyLookup, AppError> {
    let ico = normalize_ico(ico)
        .ok_or_else(|| AppError::bad_request(anyhow!("IČO must be 8 digits")))?;

    let url = format!("{}/search", registry.base_url);
    let response = http
        .get(&url)
        .query(&[("q", ico.as_str()), ("limit", "1")])
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(AppError::internal)?;

    if !response.status().is_success() {
        return Err(AppError::internal(anyhow!(
            "Business register returned {}",
            response.status()
        )));
    }

    let hits: Vec<RegistryHit> = response.json().await.map_err(AppError::internal)?;
    let hit = hits
        .into_iter()
        .next()
        .ok_or_else(|| AppError::not_found(anyhow!("No company found for this IČO")))?;

    let (street, city, zip) =
        parse_registry_address(hit.formatted_address.as_deref().unwrap_or(""));

    Ok(CompanyLookup {
        ico,
        name: hit.name.unwrap_or_default(),
        street,
        city,
        zip,
        dic: hit.tin,
        ic_dph: hit.vat_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ico_accepts_eight_digits() {
        assert_eq!(normalize_ico("12345678"), Some("12345678".to_string()));
        assert_eq!(normalize_ico(" 1234 5678 "), Some("12345678".to_string()));
    }

    #[test]
    fn test_normalize_ico_rejects_bad_input() {
        assert_eq!(normalize_ico("1234567"), None);
        assert_eq!(normalize_ico("123456789"), None);
        assert_eq!(normalize_ico("1234567a"), None);
        assert_eq!(normalize_ico(""), None);
    }

    #[test]
    fn test_parse_registry_address() {
        let (street, city, zip) = parse_registry_address("Hlavná 1, Bratislava, 811 01");
        assert_eq!(street, "Hlavná 1");
        assert_eq!(city, "Bratislava");
        assert_eq!(zip, "81101");
    }

    #[test]
    fn test_parse_registry_address_partial() {
        let (street, city, zip) = parse_registry_address("Hlavná 1");
        assert_eq!(street, "Hlavná 1");
        assert_eq!(city, "");
        assert_eq!(zip, "");
    }
}
