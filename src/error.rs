use axum::{http::StatusCode, response::Json};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("Pizza not found")]
    PizzaNotFound,
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("database integrity error")]
    Integrity(#[source] DieselError),
    #[error("failed to delete restaurant")]
    DeleteFailed(#[source] DieselError),
    #[error("unexpected server error")]
    Internal(#[source] DieselError),
}

impl ApiError {
    /// Classifies a diesel error raised by an insert that already passed
    /// field validation. Constraint violations are client errors, anything
    /// else is a server error.
    pub fn from_write_error(e: DieselError) -> Self {
        match &e {
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => ApiError::Integrity(e),
            _ => ApiError::Internal(e),
        }
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        // Storage detail goes to the log only; response bodies stay generic.
        match self {
            ApiError::RestaurantNotFound | ApiError::PizzaNotFound => {
                let body = Json(json!({ "error": self.to_string() }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Validation(errors) => {
                let body = Json(json!({ "errors": errors }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Integrity(source) => {
                error!("integrity error during write: {source}");
                let body = Json(json!({
                    "errors": ["A database integrity error occurred (e.g., duplicate entry or invalid foreign key reference)."]
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::DeleteFailed(source) => {
                error!("failed to delete restaurant: {source}");
                let body = Json(json!({ "error": "Failed to delete restaurant" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            ApiError::Internal(source) => {
                error!("unexpected server error: {source}");
                let body = Json(json!({ "error": "An unexpected server error occurred" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_error_string() {
        let response = ApiError::RestaurantNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Restaurant not found" })
        );

        let response = ApiError::PizzaNotFound.into_response();
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Pizza not found" })
        );
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_errors_array() {
        let response =
            ApiError::Validation(vec!["Price must be between 1 and 30 (inclusive).".to_string()])
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "errors": ["Price must be between 1 and 30 (inclusive)."] })
        );
    }

    #[tokio::test]
    async fn internal_maps_to_500_without_echoing_detail() {
        let response = ApiError::Internal(DieselError::RollbackTransaction).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "An unexpected server error occurred" }));
    }

    #[tokio::test]
    async fn delete_failure_maps_to_500() {
        let response = ApiError::DeleteFailed(DieselError::RollbackTransaction).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to delete restaurant" })
        );
    }
}
