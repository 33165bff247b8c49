use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::list::ListWithCardsDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[schema(as = Board)]
pub struct BoardDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Board with its lists, and each list with its cards, as returned by `GET /api/boards`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BoardWithListsDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
    pub lists: Vec<ListWithCardsDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateBoardDto {
    #[validate(length(max = 15, message = "String must contain at most 15 character(s)"))]
    #[schema(example = "Board 1", max_length = 15)]
    pub name: String,
    #[serde(default, rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct UpdateBoardDto {
    #[validate(length(max = 15, message = "String must contain at most 15 character(s)"))]
    #[schema(example = "Board 1", max_length = 15)]
    pub name: String,
}
