use axum::extract::State;

use crate::{
    model::{
        api::{Empty, ServiceResponse},
        list::{CreateListDto, ListDto, ListWithCardsDto, UpdateListDto},
    },
    server::{
        data::list::ListRepository,
        middleware::validation::{PathId, Validated, ValidatedUpdate},
        model::list::{CreateListParam, UpdateListParam},
        service::ListService,
        state::AppState,
    },
};

/// Tag for grouping list endpoints in OpenAPI documentation
pub static LIST_TAG: &str = "List";

/// Create a new list.
///
/// # Returns
/// - `201 Created` - The created list
/// - `400 Bad Request` - Payload failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/lists",
    tag = LIST_TAG,
    operation_id = "createList",
    request_body = CreateListDto,
    responses(
        (status = 201, description = "List successfully created", body = ServiceResponse<ListDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while creating the list", body = ServiceResponse<Empty>)
    ),
)]
pub async fn create_list(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateListDto>,
) -> ServiceResponse<ListDto> {
    ListService::new(ListRepository::new(&state.db))
        .create(CreateListParam::from_dto(payload))
        .await
}

/// Get all lists with their cards.
///
/// # Returns
/// - `200 OK` - Every list
/// - `404 Not Found` - There are no lists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/lists",
    tag = LIST_TAG,
    operation_id = "findAllLists",
    responses(
        (status = 200, description = "Lists successfully found", body = ServiceResponse<Vec<ListWithCardsDto>>),
        (status = 404, description = "No Lists found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while retrieving lists", body = ServiceResponse<Empty>)
    ),
)]
pub async fn find_all_lists(
    State(state): State<AppState>,
) -> ServiceResponse<Vec<ListWithCardsDto>> {
    ListService::new(ListRepository::new(&state.db)).find_all().await
}

/// Get a list by ID.
///
/// # Returns
/// - `200 OK` - The list
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No list with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/lists/{id}",
    tag = LIST_TAG,
    operation_id = "findListById",
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "List successfully found", body = ServiceResponse<ListDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "List not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while finding list", body = ServiceResponse<Empty>)
    ),
)]
pub async fn find_list_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ServiceResponse<ListDto> {
    ListService::new(ListRepository::new(&state.db)).find_by_id(id).await
}

/// Update a list.
///
/// # Returns
/// - `200 OK` - The updated list
/// - `400 Bad Request` - Invalid ID or payload
/// - `404 Not Found` - No list with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/lists/{id}",
    tag = LIST_TAG,
    operation_id = "updateList",
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    request_body = UpdateListDto,
    responses(
        (status = 200, description = "List successfully updated", body = ServiceResponse<ListDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "List not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while updating the list", body = ServiceResponse<Empty>)
    ),
)]
pub async fn update_list(
    State(state): State<AppState>,
    ValidatedUpdate(id, payload): ValidatedUpdate<UpdateListDto>,
) -> ServiceResponse<ListDto> {
    ListService::new(ListRepository::new(&state.db))
        .update(id, UpdateListParam::from_dto(payload))
        .await
}

/// Delete a list.
///
/// # Returns
/// - `200 OK` - The list as it was before deletion
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No list with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/lists/{id}",
    tag = LIST_TAG,
    operation_id = "deleteList",
    params(
        ("id" = i32, Path, description = "List ID")
    ),
    responses(
        (status = 200, description = "List successfully deleted", body = ServiceResponse<ListDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "List not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while deleting the list", body = ServiceResponse<Empty>)
    ),
)]
pub async fn delete_list(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ServiceResponse<ListDto> {
    ListService::new(ListRepository::new(&state.db)).delete(id).await
}
