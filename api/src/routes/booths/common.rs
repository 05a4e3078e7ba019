use db::models::booth::Model as BoothModel;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBoothRequest {
    #[validate(length(min = 1, max = 255, message = "Booth name must be 1-255 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,
    pub admin_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBoothRequest {
    #[validate(length(min = 1, max = 255, message = "Booth name must be 1-255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255, message = "Location must be at most 255 characters"))]
    pub location: Option<String>,
    /// Absent leaves the admin unchanged; `null` unassigns it.
    #[serde(default, deserialize_with = "present")]
    pub admin_id: Option<Option<i64>>,
    pub is_active: Option<bool>,
}

/// Marks a field as present, so an explicit `null` differs from an omitted field.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BoothResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub admin_id: Option<i64>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BoothModel> for BoothResponse {
    fn from(booth: BoothModel) -> Self {
        Self {
            id: booth.id,
            name: booth.name,
            description: booth.description,
            location: booth.location,
            admin_id: booth.admin_id,
            is_active: booth.is_active,
            created_at: booth.created_at.to_rfc3339(),
            updated_at: booth.updated_at.to_rfc3339(),
        }
    }
}
