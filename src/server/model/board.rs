//! Board domain model and parameter types.

use chrono::{DateTime, Utc};

use crate::{
    model::board::{BoardDto, BoardWithListsDto, CreateBoardDto, UpdateBoardDto},
    server::model::{list::ListWithCards, IntoDto},
};

/// Board as stored, without its lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Board {
    /// Converts an entity model to a board domain model at the repository boundary.
    pub fn from_entity(entity: entity::board::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }
}

impl IntoDto for Board {
    type Dto = BoardDto;

    fn into_dto(self) -> BoardDto {
        BoardDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// Board with every list it owns, each list carrying its cards.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardWithLists {
    pub board: Board,
    pub lists: Vec<ListWithCards>,
}

impl IntoDto for BoardWithLists {
    type Dto = BoardWithListsDto;

    fn into_dto(self) -> BoardWithListsDto {
        BoardWithListsDto {
            id: self.board.id,
            name: self.board.name,
            created_at: self.board.created_at,
            updated_at: self.board.updated_at,
            deleted_at: self.board.deleted_at,
            lists: self.lists.into_dto(),
        }
    }
}

/// Parameters for creating a board.
#[derive(Debug, Clone)]
pub struct CreateBoardParam {
    pub name: String,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CreateBoardParam {
    pub fn from_dto(dto: CreateBoardDto) -> Self {
        Self {
            name: dto.name,
            deleted_at: dto.deleted_at,
        }
    }
}

/// Parameters for updating a board's scalar fields.
#[derive(Debug, Clone)]
pub struct UpdateBoardParam {
    pub name: String,
}

impl UpdateBoardParam {
    pub fn from_dto(dto: UpdateBoardDto) -> Self {
        Self { name: dto.name }
    }
}
