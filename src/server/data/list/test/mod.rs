mod create;
mod delete;
mod find_by_id;
mod update;

use super::*;
use entity::prelude::{Card as CardEntity, List as ListEntity};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
