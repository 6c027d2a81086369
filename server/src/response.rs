mod book;
mod book_request;
mod export;

pub use self::{book::*, book_request::*, export::*};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub struct NoContentResponse;

impl IntoResponse for NoContentResponse {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
