use kernel::prelude::entity::{Book, DestructBook};

#[derive(Debug, Clone)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub department: String,
    pub publication_year: String,
    pub isbn: String,
    pub copies: i32,
    pub available_copies: i32,
    pub cover_image: Option<String>,
    pub description: String,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author,
            department,
            publication_year,
            isbn,
            copies,
            available_copies,
            cover_image,
            description,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            department: department.into(),
            publication_year: publication_year.into(),
            isbn: isbn.into(),
            copies: copies.into(),
            available_copies: available_copies.into(),
            cover_image: cover_image.map(Into::into),
            description: description.into(),
        }
    }
}

pub struct GetBookDto {
    pub id: i64,
}

pub struct ListBooksDto {
    pub search: Option<String>,
    pub department: Option<String>,
    pub available: bool,
}

pub struct CreateBookDto {
    pub title: String,
    pub author: String,
    pub department: String,
    pub publication_year: String,
    pub isbn: String,
    pub copies: i32,
    pub available_copies: Option<i32>,
    pub cover_image: Option<String>,
    pub description: String,
}

pub struct UpdateBookDto {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub department: Option<String>,
    pub publication_year: Option<String>,
    pub isbn: Option<String>,
    pub copies: Option<i32>,
    pub available_copies: Option<i32>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
}

pub struct DeleteBookDto {
    pub id: i64,
}
