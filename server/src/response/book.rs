use crate::controller::Exhaust;
use crate::response::NoContentResponse;
use application::transfer::BookDto;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: i64,
    title: String,
    author: String,
    department: String,
    publication_year: String,
    isbn: String,
    copies: i32,
    available_copies: i32,
    cover_image: Option<String>,
    description: String,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author: value.author,
            department: value.department,
            publication_year: value.publication_year,
            isbn: value.isbn,
            copies: value.copies,
            available_copies: value.available_copies,
            cover_image: value.cover_image,
            description: value.description,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct CreatedBookResponse(BookResponse);

impl IntoResponse for CreatedBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookDto> for BookPresenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

impl Exhaust<Option<BookDto>> for BookPresenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<Vec<BookDto>> for BookPresenter {
    type To = Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(BookResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}

impl Exhaust<()> for BookPresenter {
    type To = NoContentResponse;
    fn emit(&self, _: ()) -> Self::To {
        NoContentResponse
    }
}

pub struct BookCreatedPresenter;

impl Exhaust<BookDto> for BookCreatedPresenter {
    type To = CreatedBookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        CreatedBookResponse(BookResponse::from(input))
    }
}
