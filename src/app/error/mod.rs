use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::template::RenderError;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// The error type returned by page handlers.
///
/// Failures coming from the template renderer are carried through untouched and only
/// turned into a response at the HTTP boundary.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Render(ref e) => {
                tracing::error!("{:?}", e);
                (
                    status,
                    Json(schema::Error {
                        code: status.as_u16(),
                        message: "Unexpected error".to_owned(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
