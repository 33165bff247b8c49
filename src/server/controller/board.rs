//! Board endpoints.
//!
//! Handlers are thin: they extract and validate input, convert DTOs to parameters, and write
//! the service's envelope back verbatim.
use axum::extract::State;

use crate::{
    model::{
        api::{Empty, ServiceResponse},
        board::{BoardDto, BoardWithListsDto, CreateBoardDto, UpdateBoardDto},
    },
    server::{
        data::board::BoardRepository,
        middleware::validation::{PathId, Validated, ValidatedUpdate},
        model::board::{CreateBoardParam, UpdateBoardParam},
        service::BoardService,
        state::AppState,
    },
};

/// Tag for grouping board endpoints in OpenAPI documentation
pub static BOARD_TAG: &str = "Board";

/// Create a new board.
///
/// # Returns
/// - `201 Created` - The created board
/// - `400 Bad Request` - Payload failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/boards",
    tag = BOARD_TAG,
    operation_id = "createBoard",
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Board successfully created", body = ServiceResponse<BoardDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while creating the board", body = ServiceResponse<Empty>)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateBoardDto>,
) -> ServiceResponse<BoardDto> {
    BoardService::new(BoardRepository::new(&state.db))
        .create(CreateBoardParam::from_dto(payload))
        .await
}

/// Get all boards with their lists, each list with its cards.
///
/// # Returns
/// - `200 OK` - Every board
/// - `404 Not Found` - There are no boards
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/boards",
    tag = BOARD_TAG,
    operation_id = "findAllBoards",
    responses(
        (status = 200, description = "Boards successfully found", body = ServiceResponse<Vec<BoardWithListsDto>>),
        (status = 404, description = "No Boards found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while retrieving boards", body = ServiceResponse<Empty>)
    ),
)]
pub async fn find_all_boards(
    State(state): State<AppState>,
) -> ServiceResponse<Vec<BoardWithListsDto>> {
    BoardService::new(BoardRepository::new(&state.db)).find_all().await
}

/// Get a board by ID.
///
/// # Returns
/// - `200 OK` - The board
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No board with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/boards/{id}",
    tag = BOARD_TAG,
    operation_id = "findBoardById",
    params(
        ("id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Board successfully found", body = ServiceResponse<BoardDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "Board not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while finding board", body = ServiceResponse<Empty>)
    ),
)]
pub async fn find_board_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ServiceResponse<BoardDto> {
    BoardService::new(BoardRepository::new(&state.db)).find_by_id(id).await
}

/// Update a board.
///
/// # Returns
/// - `200 OK` - The updated board
/// - `400 Bad Request` - Invalid ID or payload
/// - `404 Not Found` - No board with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/boards/{id}",
    tag = BOARD_TAG,
    operation_id = "updateBoard",
    params(
        ("id" = i32, Path, description = "Board ID")
    ),
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Board successfully updated", body = ServiceResponse<BoardDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "Board not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while updating the board", body = ServiceResponse<Empty>)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    ValidatedUpdate(id, payload): ValidatedUpdate<UpdateBoardDto>,
) -> ServiceResponse<BoardDto> {
    BoardService::new(BoardRepository::new(&state.db))
        .update(id, UpdateBoardParam::from_dto(payload))
        .await
}

/// Delete a board.
///
/// # Returns
/// - `200 OK` - The board as it was before deletion
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No board with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/boards/{id}",
    tag = BOARD_TAG,
    operation_id = "deleteBoard",
    params(
        ("id" = i32, Path, description = "Board ID")
    ),
    responses(
        (status = 200, description = "Board successfully deleted", body = ServiceResponse<BoardDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "Board not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while deleting the board", body = ServiceResponse<Empty>)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ServiceResponse<BoardDto> {
    BoardService::new(BoardRepository::new(&state.db)).delete(id).await
}
