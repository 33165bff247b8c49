use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::card::CardDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[schema(as = List)]
pub struct ListDto {
    pub id: i32,
    pub name: String,
    pub id_board: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// List with its cards nested; `cards` is empty, never null, for a list without cards.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ListWithCardsDto {
    pub id: i32,
    pub name: String,
    pub id_board: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
    pub cards: Vec<CardDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateListDto {
    #[validate(length(max = 15, message = "String must contain at most 15 character(s)"))]
    #[schema(example = "List 1", max_length = 15)]
    pub name: String,
    #[validate(range(min = 1, message = "Number must be greater than 0"))]
    #[schema(example = 1, minimum = 1)]
    pub id_board: i32,
    #[serde(default, rename = "deletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Lists keep their board; only the name can change.
#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct UpdateListDto {
    #[validate(length(max = 15, message = "String must contain at most 15 character(s)"))]
    #[schema(example = "List 1", max_length = 15)]
    pub name: String,
}
