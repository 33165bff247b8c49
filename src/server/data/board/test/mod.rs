mod create;
mod delete;

use super::*;
use crate::server::model::board::{CreateBoardParam, UpdateBoardParam};
use entity::prelude::{Board as BoardEntity, Card as CardEntity, List as ListEntity};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
