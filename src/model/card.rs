use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[schema(as = Card)]
pub struct CardDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: String,
    pub id_list: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateCardDto {
    #[validate(length(max = 15, message = "String must contain at most 15 character(s)"))]
    #[schema(example = "Task 1", max_length = 15)]
    pub name: String,
    #[validate(length(max = 50, message = "String must contain at most 50 character(s)"))]
    #[schema(example = "My first task.", max_length = 50)]
    pub description: String,
    #[schema(example = "todo")]
    pub status: String,
    #[validate(range(min = 1, message = "Number must be greater than 0"))]
    #[schema(example = 1, minimum = 1)]
    pub id_list: i32,
    #[serde(default, rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Cards keep their list; name, description and status can change.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct UpdateCardDto {
    #[validate(length(max = 15, message = "String must contain at most 15 character(s)"))]
    #[schema(example = "Task 1", max_length = 15)]
    pub name: String,
    #[validate(length(max = 50, message = "String must contain at most 50 character(s)"))]
    #[schema(example = "My first task.", max_length = 50)]
    pub description: String,
    #[schema(example = "done")]
    pub status: String,
}
