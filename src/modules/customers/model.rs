use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub auth_user_id: Option<Uuid>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub country: String,
    pub company_name: Option<String>,
    pub ico: Option<String>,
    pub dic: Option<String>,
    pub ic_dph: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update. Absent fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct CompanyInfo {
    pub company_name: Option<String>,
    pub ico: Option<String>,
    pub dic: Option<String>,
    pub ic_dph: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyInfoDto {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "IČO is required"))]
    pub ico: String,
    pub dic: Option<String>,
    pub ic_dph: Option<String>,
}

/// Company record resolved from the Slovak business register.
#[derive(Debug, Serialize, ToSchema)]
pub struct CompanyLookup {
    pub ico: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub dic: Option<String>,
    pub ic_dph: Option<String>,
}

/// Shape of one hit in the register search response.
#[derive(Debug, Deserialize)]
pub struct RegistryHit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub tin: Option<String>,
    #[serde(default)]
    pub vat_number: Option<String>,
}
