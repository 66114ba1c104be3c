use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    /// Input failed a business rule before reaching the repository.
    #[error("{0}")]
    Validation(String),

    /// The referenced item does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Any storage failure, propagated unchanged.
    #[error("Database error: {0}")]
    Infrastructure(#[from] DbErr),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl ItemError {
    pub fn validation(message: impl Into<String>) -> Self {
        ItemError::Validation(message.into())
    }

    /// Not-found error naming the id exactly as the caller supplied it.
    pub fn not_found(raw_id: &str) -> Self {
        ItemError::NotFound(format!("Item with ID \"{}\" was not found.", raw_id))
    }
}

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::Validation(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(msg) => AppError::NotFound(msg),
            ItemError::Infrastructure(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_message_uses_raw_id() {
        let err = ItemError::not_found("00000000-0000-0000-0000-000000000000");
        assert_eq!(
            err.to_string(),
            "Item with ID \"00000000-0000-0000-0000-000000000000\" was not found."
        );
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ItemError::validation("bad"), StatusCode::BAD_REQUEST),
            (ItemError::not_found("x"), StatusCode::NOT_FOUND),
            (
                ItemError::from(DbErr::Custom("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
