use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::server::{
    error::{
        validation::{FieldIssue, ValidationError},
        AppError,
    },
    util::parse::parse_id,
};

/// Positive resource identifier taken from the `{id}` path segment.
///
/// Rejects with 400 when the segment is not an integer, not positive, or outside the
/// store's key range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(parse_id(&raw)?))
    }
}

/// JSON body deserialized into `T` and checked against its `validator` rules.
///
/// Malformed JSON, missing fields and rule violations all reject with a 400 envelope
/// listing every failure.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_board(Validated(payload): Validated<CreateBoardDto>) -> impl IntoResponse {
///     // payload.name is at most 15 characters here
/// }
/// ```
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = validate_body(req, state).await.map_err(ValidationError::new)?;

        Ok(Self(payload))
    }
}

/// `{id}` path segment and JSON body of an update, validated together.
///
/// Unlike `PathId` followed by `Validated<T>`, a request with both a bad ID and a bad body
/// is rejected once with every issue listed, ID issues first.
pub struct ValidatedUpdate<T>(pub i32, pub T);

impl<T, S> FromRequest<S> for ValidatedUpdate<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let Path(raw) = Path::<String>::from_request_parts(&mut parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let id = parse_id(&raw);
        let payload = validate_body(Request::from_parts(parts, body), state).await;

        match (id, payload) {
            (Ok(id), Ok(payload)) => Ok(Self(id, payload)),
            (id, payload) => {
                let mut issues = id.err().map(|err| err.issues).unwrap_or_default();
                issues.extend(payload.err().unwrap_or_default());

                Err(ValidationError::new(issues).into())
            }
        }
    }
}

/// Deserializes and validates a JSON body, collecting every issue.
async fn validate_body<T, S>(req: Request, state: &S) -> Result<T, Vec<FieldIssue>>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    let Json(payload) = Json::<T>::from_request(req, state)
        .await
        .map_err(|rejection| ValidationError::from_rejection(&rejection).issues)?;

    payload
        .validate()
        .map_err(|errors| ValidationError::from(errors).issues)?;

    Ok(payload)
}
