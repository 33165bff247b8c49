//! Card domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::{
    model::card::{CardDto, CreateCardDto, UpdateCardDto},
    server::model::IntoDto,
};

/// Card as stored. Cards are leaves of the hierarchy and carry no children.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub status: String,
    pub id_list: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Card {
    /// Converts an entity model to a card domain model at the repository boundary.
    pub fn from_entity(entity: entity::card::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            status: entity.status,
            id_list: entity.id_list,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}

impl IntoDto for Card {
    type Dto = CardDto;

    fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            name: self.name,
            description: self.description,
            status: self.status,
            id_list: self.id_list,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// Parameters for creating a card in an existing list.
#[derive(Debug, Clone)]
pub struct CreateCardParam {
    pub name: String,
    pub description: String,
    pub status: String,
    pub id_list: i32,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CreateCardParam {
    pub fn from_dto(dto: CreateCardDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            status: dto.status,
            id_list: dto.id_list,
            deleted_at: dto.deleted_at,
        }
    }
}

/// Parameters for updating a card's scalar fields.
#[derive(Debug, Clone)]
pub struct UpdateCardParam {
    pub name: String,
    pub description: String,
    pub status: String,
}

impl UpdateCardParam {
    pub fn from_dto(dto: UpdateCardDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            status: dto.status,
        }
    }
}
