mod author;
mod copies;
mod cover;
mod department;
mod description;
mod id;
mod isbn;
mod title;
mod year;

pub use self::{
    author::*, copies::*, cover::*, department::*, description::*, id::*, isbn::*, title::*,
    year::*,
};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use error_stack::Report;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: BookAuthor,
    department: Department,
    publication_year: PublicationYear,
    isbn: Isbn,
    copies: CopyCount,
    available_copies: AvailableCopies,
    cover_image: Option<CoverImage>,
    description: BookDescription,
}

impl Book {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BookId,
        title: BookTitle,
        author: BookAuthor,
        department: Department,
        publication_year: PublicationYear,
        isbn: Isbn,
        copies: CopyCount,
        available_copies: AvailableCopies,
        cover_image: Option<CoverImage>,
        description: BookDescription,
    ) -> Self {
        Self {
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
        }
    }

    // The single place stock moves downward. Approval consumes exactly one copy.
    pub fn allocate_copy(self) -> error_stack::Result<Self, KernelError> {
        if self.available_copies.as_ref() <= &0 {
            return Err(Report::new(KernelError::Unavailable).attach_printable(format!(
                "book {} has no available copies",
                self.id.as_ref()
            )));
        }
        let next = AvailableCopies::new(self.available_copies.as_ref() - 1);
        Ok(self.reconstruct(|book| book.available_copies = next))
    }
}
