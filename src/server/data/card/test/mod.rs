mod update;

use super::*;
use entity::prelude::Card as CardEntity;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Builds create parameters for a card in `id_list`.
fn create_param(id_list: i32, name: &str) -> CreateCardParam {
    CreateCardParam {
        name: name.to_string(),
        description: "Write the first draft.".to_string(),
        status: "todo".to_string(),
        id_list,
        deleted_at: None,
    }
}
