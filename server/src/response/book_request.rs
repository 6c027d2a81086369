use crate::controller::Exhaust;
use crate::response::NoContentResponse;
use application::transfer::BookRequestDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::prelude::entity::RequestStatus;
use serde::Serialize;
use time::Date;

#[derive(Debug, Serialize)]
pub struct BookRequestResponse {
    id: i64,
    book_id: i64,
    book_title: String,
    student_id: String,
    student_name: String,
    request_date: Date,
    status: RequestStatus,
}

impl From<BookRequestDto> for BookRequestResponse {
    fn from(value: BookRequestDto) -> Self {
        Self {
            id: value.id,
            book_id: value.book_id,
            book_title: value.book_title,
            student_id: value.student_id,
            student_name: value.student_name,
            request_date: value.request_date,
            status: value.status,
        }
    }
}

impl IntoResponse for BookRequestResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct CreatedRequestResponse(BookRequestResponse);

impl IntoResponse for CreatedRequestResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct RequestPresenter;

impl Exhaust<BookRequestDto> for RequestPresenter {
    type To = BookRequestResponse;
    fn emit(&self, input: BookRequestDto) -> Self::To {
        BookRequestResponse::from(input)
    }
}

impl Exhaust<Vec<BookRequestDto>> for RequestPresenter {
    type To = Json<Vec<BookRequestResponse>>;
    fn emit(&self, input: Vec<BookRequestDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(BookRequestResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}

impl Exhaust<()> for RequestPresenter {
    type To = NoContentResponse;
    fn emit(&self, _: ()) -> Self::To {
        NoContentResponse
    }
}

pub struct RequestCreatedPresenter;

impl Exhaust<BookRequestDto> for RequestCreatedPresenter {
    type To = CreatedRequestResponse;
    fn emit(&self, input: BookRequestDto) -> Self::To {
        CreatedRequestResponse(BookRequestResponse::from(input))
    }
}
