use crate::controller::Intake;
use application::transfer::{
    CreateBookDto, DeleteBookDto, GetBookDto, ListBooksDto, UpdateBookDto,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    department: String,
    publication_year: String,
    #[serde(default)]
    isbn: String,
    copies: i32,
    available_copies: Option<i32>,
    cover_image: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    title: Option<String>,
    author: Option<String>,
    department: Option<String>,
    publication_year: Option<String>,
    isbn: Option<String>,
    copies: Option<i32>,
    available_copies: Option<i32>,
    cover_image: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListBooksRequest {
    search: Option<String>,
    department: Option<String>,
    #[serde(default)]
    available: bool,
}

#[derive(Debug)]
pub struct GetBookRequest {
    id: i64,
}

impl GetBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: i64,
}

impl DeleteBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            title: input.title,
            author: input.author,
            department: input.department,
            publication_year: input.publication_year,
            isbn: input.isbn,
            copies: input.copies,
            available_copies: input.available_copies,
            cover_image: input.cover_image,
            description: input.description,
        }
    }
}

impl Intake<(i64, UpdateBookRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (i64, UpdateBookRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id,
            title: input.title,
            author: input.author,
            department: input.department,
            publication_year: input.publication_year,
            isbn: input.isbn,
            copies: input.copies,
            available_copies: input.available_copies,
            cover_image: input.cover_image,
            description: input.description,
        }
    }
}

impl Intake<ListBooksRequest> for BookTransformer {
    type To = ListBooksDto;
    fn emit(&self, input: ListBooksRequest) -> Self::To {
        ListBooksDto {
            search: input.search,
            department: input.department,
            available: input.available,
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
