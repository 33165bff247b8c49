//! List domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::{
    model::list::{CreateListDto, ListDto, ListWithCardsDto, UpdateListDto},
    server::model::{card::Card, IntoDto},
};

/// List as stored, without its cards.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub id: i32,
    pub name: String,
    pub id_board: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl List {
    /// Converts an entity model to a list domain model at the repository boundary.
    pub fn from_entity(entity: entity::list::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            id_board: entity.id_board,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}

impl IntoDto for List {
    type Dto = ListDto;

    fn into_dto(self) -> ListDto {
        ListDto {
            id: self.id,
            name: self.name,
            id_board: self.id_board,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// List with the cards it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct ListWithCards {
    pub list: List,
    pub cards: Vec<Card>,
}

impl ListWithCards {
    /// Starts a tree for `list` with no cards yet.
    pub fn new(list: List) -> Self {
        Self {
            list,
            cards: Vec::new(),
        }
    }
}

impl IntoDto for ListWithCards {
    type Dto = ListWithCardsDto;

    fn into_dto(self) -> ListWithCardsDto {
        ListWithCardsDto {
            id: self.list.id,
            name: self.list.name,
            id_board: self.list.id_board,
            created_at: self.list.created_at,
            updated_at: self.list.updated_at,
            deleted_at: self.list.deleted_at,
            cards: self.cards.into_dto(),
        }
    }
}

/// Parameters for creating a list on an existing board.
#[derive(Debug, Clone)]
pub struct CreateListParam {
    pub name: String,
    pub id_board: i32,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CreateListParam {
    pub fn from_dto(dto: CreateListDto) -> Self {
        Self {
            name: dto.name,
            id_board: dto.id_board,
            deleted_at: dto.deleted_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateListParam {
    pub name: String,
}

impl UpdateListParam {
    pub fn from_dto(dto: UpdateListDto) -> Self {
        Self { name: dto.name }
    }
}
