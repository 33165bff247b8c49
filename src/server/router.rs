use axum::{http::StatusCode, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::{Empty, ServiceResponse},
    server::{
        controller::{board, card, health_check, list},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kanban API",
        version = "1.0.0",
        description = "CRUD API for boards, the lists on them, and the cards in those lists."
    ),
    tags(
        (name = "Health Check", description = "Service liveness"),
        (name = "Board", description = "Boards and their nested lists"),
        (name = "List", description = "Lists and their nested cards"),
        (name = "Card", description = "Cards")
    )
)]
struct ApiDoc;

/// Builds the application router.
///
/// Registers every API route together with its OpenAPI metadata, serves the generated
/// document at `/swagger.json` with Swagger UI at `/swagger-ui`, and answers unknown routes
/// with a 404 envelope.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(health_check::health_check))
        .routes(routes!(board::create_board, board::find_all_boards))
        .routes(routes!(
            board::find_board_by_id,
            board::update_board,
            board::delete_board
        ))
        .routes(routes!(list::create_list, list::find_all_lists))
        .routes(routes!(
            list::find_list_by_id,
            list::update_list,
            list::delete_list
        ))
        .routes(routes!(card::create_card, card::find_all_cards))
        .routes(routes!(
            card::find_card_by_id,
            card::update_card,
            card::delete_card
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/swagger.json", api))
        .fallback(not_found)
}

async fn not_found() -> ServiceResponse<Empty> {
    ServiceResponse::failure(StatusCode::NOT_FOUND, "Not Found")
}
