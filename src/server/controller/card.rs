use axum::extract::State;

use crate::{
    model::{
        api::{Empty, ServiceResponse},
        card::{CardDto, CreateCardDto, UpdateCardDto},
    },
    server::{
        data::card::CardRepository,
        middleware::validation::{PathId, Validated, ValidatedUpdate},
        model::card::{CreateCardParam, UpdateCardParam},
        service::CardService,
        state::AppState,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "Card";

/// Create a new card.
///
/// # Returns
/// - `201 Created` - The created card
/// - `400 Bad Request` - Payload failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cards",
    tag = CARD_TAG,
    operation_id = "createCard",
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Card successfully created", body = ServiceResponse<CardDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while creating the card", body = ServiceResponse<Empty>)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    Validated(payload): Validated<CreateCardDto>,
) -> ServiceResponse<CardDto> {
    CardService::new(CardRepository::new(&state.db))
        .create(CreateCardParam::from_dto(payload))
        .await
}

/// Get all cards.
///
/// # Returns
/// - `200 OK` - Every card
/// - `404 Not Found` - There are no cards
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cards",
    tag = CARD_TAG,
    operation_id = "findAllCards",
    responses(
        (status = 200, description = "Cards successfully found", body = ServiceResponse<Vec<CardDto>>),
        (status = 404, description = "No Cards found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while retrieving cards", body = ServiceResponse<Empty>)
    ),
)]
pub async fn find_all_cards(State(state): State<AppState>) -> ServiceResponse<Vec<CardDto>> {
    CardService::new(CardRepository::new(&state.db)).find_all().await
}

/// Get a card by ID.
///
/// # Returns
/// - `200 OK` - The card
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No card with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    operation_id = "findCardById",
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card successfully found", body = ServiceResponse<CardDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "Card not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while finding card", body = ServiceResponse<Empty>)
    ),
)]
pub async fn find_card_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ServiceResponse<CardDto> {
    CardService::new(CardRepository::new(&state.db)).find_by_id(id).await
}

/// Update a card.
///
/// # Returns
/// - `200 OK` - The updated card
/// - `400 Bad Request` - Invalid ID or payload
/// - `404 Not Found` - No card with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    operation_id = "updateCard",
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Card successfully updated", body = ServiceResponse<CardDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "Card not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while updating the card", body = ServiceResponse<Empty>)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    ValidatedUpdate(id, payload): ValidatedUpdate<UpdateCardDto>,
) -> ServiceResponse<CardDto> {
    CardService::new(CardRepository::new(&state.db))
        .update(id, UpdateCardParam::from_dto(payload))
        .await
}

/// Delete a card.
///
/// # Returns
/// - `200 OK` - The card as it was before deletion
/// - `400 Bad Request` - ID is not a positive integer
/// - `404 Not Found` - No card with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    operation_id = "deleteCard",
    params(
        ("id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card successfully deleted", body = ServiceResponse<CardDto>),
        (status = 400, description = "Invalid data supplied", body = ServiceResponse<Empty>),
        (status = 404, description = "Card not found", body = ServiceResponse<Empty>),
        (status = 500, description = "An error occurred while deleting the card", body = ServiceResponse<Empty>)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ServiceResponse<CardDto> {
    CardService::new(CardRepository::new(&state.db)).delete(id).await
}
