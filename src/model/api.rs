use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform envelope returned by every endpoint.
///
/// Serializes as `{ success, statusCode, message, responseObject }`. The HTTP status of
/// the response always equals `statusCode`, and `responseObject` is `null` for failures.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    pub response_object: Option<T>,
}

impl<T> ServiceResponse<T> {
    /// Creates a successful envelope carrying `object`.
    pub fn success(status: StatusCode, message: impl Into<String>, object: T) -> Self {
        Self {
            success: true,
            status_code: status.as_u16(),
            message: message.into(),
            response_object: Some(object),
        }
    }

    /// Creates a failed envelope with no payload.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code: status.as_u16(),
            message: message.into(),
            response_object: None,
        }
    }

    /// HTTP status carried by the envelope.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Writes the envelope verbatim with its own status code.
impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Payload type for envelopes whose `responseObject` is always `null`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct Empty;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_success_with_camel_case_fields() {
        let response = ServiceResponse::success(StatusCode::CREATED, "Created", 5);

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "statusCode": 201,
                "message": "Created",
                "responseObject": 5
            })
        );
    }

    #[test]
    fn serializes_failure_with_null_object() {
        let response = ServiceResponse::<Empty>::failure(StatusCode::NOT_FOUND, "Board not found");

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], json!(false));
        assert_eq!(value["statusCode"], json!(404));
        assert!(value["responseObject"].is_null());
    }

    #[test]
    fn into_response_uses_envelope_status() {
        let response =
            ServiceResponse::<Empty>::failure(StatusCode::BAD_REQUEST, "Invalid").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
