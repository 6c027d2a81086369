use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookFilter, BookQuery, BookRequestQuery, DependOnBookQuery, DependOnBookRequestQuery,
};
use kernel::interface::update::{
    BookModifier, BookRequestModifier, DependOnBookModifier, DependOnBookRequestModifier,
};
use kernel::prelude::entity::{
    AvailableCopies, Book, BookAuthor, BookDescription, BookId, BookTitle, CopyCount, CoverImage,
    Department, Isbn, PublicationYear,
};
use kernel::KernelError;

use crate::service::required;
use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetBookDto, ListBooksDto, UpdateBookDto,
};

fn check_stock_bounds(copies: i32, available: i32) -> error_stack::Result<(), KernelError> {
    if copies < 1 {
        return Err(
            Report::new(KernelError::Validation).attach_printable("copies must be at least 1")
        );
    }
    if available < 0 || available > copies {
        return Err(Report::new(KernelError::Validation).attach_printable(format!(
            "available copies must stay between 0 and {copies}"
        )));
    }
    Ok(())
}

#[async_trait::async_trait]
pub trait GetBookService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }

    async fn get_all_books(
        &self,
        dto: ListBooksDto,
    ) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filter = BookFilter {
            search: dto.search,
            department: dto.department,
            available: dto.available,
        };
        let books = self.book_query().find_all(&mut connection, &filter).await?;

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait CreateBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let title = required(dto.title, "title")?;
        let author = required(dto.author, "author")?;
        let department = required(dto.department, "department")?;
        let publication_year = required(dto.publication_year, "publication year")?;
        let available_copies = dto.available_copies.unwrap_or(dto.copies);
        check_stock_bounds(dto.copies, available_copies)?;

        let id = self.book_query().next_identity(&mut connection).await?;
        let book = Book::new(
            id,
            BookTitle::new(title),
            BookAuthor::new(author),
            Department::new(department),
            PublicationYear::new(publication_year),
            Isbn::new(dto.isbn),
            CopyCount::new(dto.copies),
            AvailableCopies::new(available_copies),
            dto.cover_image.map(CoverImage::new),
            BookDescription::new(dto.description),
        );
        self.book_modifier().create(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: Transaction + Send, T> CreateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait UpdateBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
{
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {} does not exist", dto.id))
            })?;

        let title = dto.title.map(|title| required(title, "title")).transpose()?;
        let author = dto
            .author
            .map(|author| required(author, "author"))
            .transpose()?;
        let department = dto
            .department
            .map(|department| required(department, "department"))
            .transpose()?;
        let publication_year = dto
            .publication_year
            .map(|year| required(year, "publication year"))
            .transpose()?;

        let copies = dto.copies.unwrap_or(*book.copies().as_ref());
        let available_copies = dto
            .available_copies
            .unwrap_or(*book.available_copies().as_ref());
        check_stock_bounds(copies, available_copies)?;

        let book = book.reconstruct(|b| {
            if let Some(title) = title {
                b.title = BookTitle::new(title);
            }
            if let Some(author) = author {
                b.author = BookAuthor::new(author);
            }
            if let Some(department) = department {
                b.department = Department::new(department);
            }
            if let Some(year) = publication_year {
                b.publication_year = PublicationYear::new(year);
            }
            if let Some(isbn) = dto.isbn {
                b.isbn = Isbn::new(isbn);
            }
            b.copies = CopyCount::new(copies);
            b.available_copies = AvailableCopies::new(available_copies);
            if let Some(cover) = dto.cover_image {
                b.cover_image = Some(CoverImage::new(cover));
            }
            if let Some(description) = dto.description {
                b.description = BookDescription::new(description);
            }
        });

        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<Connection: Transaction + Send, T> UpdateBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnBookRequestQuery<Connection>
    + DependOnBookRequestModifier<Connection>
{
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {} does not exist", dto.id))
            })?;

        // Requests must not keep pointing at a missing book.
        let requests = self
            .book_request_query()
            .find_by_book_id(&mut connection, &id)
            .await?;
        for request in requests {
            let rejected = request.force_reject();
            self.book_request_modifier()
                .update(&mut connection, &rejected)
                .await?;
        }

        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnBookRequestQuery<Connection>
        + DependOnBookRequestModifier<Connection>
{
}

#[cfg(test)]
mod test {
    use driver::database::MemoryDatabase;
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, DeleteBookService, GetBookService, UpdateBookService,
    };
    use crate::transfer::{
        CreateBookDto, DeleteBookDto, GetBookDto, ListBooksDto, UpdateBookDto,
    };

    fn create_dto(title: &str, department: &str, copies: i32) -> CreateBookDto {
        CreateBookDto {
            title: title.to_string(),
            author: "E. Balagurusamy".to_string(),
            department: department.to_string(),
            publication_year: "2019".to_string(),
            isbn: "978-93-5316-513-0".to_string(),
            copies,
            available_copies: None,
            cover_image: None,
            description: "A comprehensive guide for polytechnic students".to_string(),
        }
    }

    fn patch(id: i64) -> UpdateBookDto {
        UpdateBookDto {
            id,
            title: None,
            author: None,
            department: None,
            publication_year: None,
            isbn: None,
            copies: None,
            available_copies: None,
            cover_image: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_full_stock(
    ) -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();

        let first = db.create_book(create_dto("Programming in C", "CO", 3)).await?;
        let second = db
            .create_book(create_dto("Digital Electronics", "EJ", 2))
            .await?;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.available_copies, 3);
        assert_eq!(second.available_copies, 2);

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let db = MemoryDatabase::new();

        let mut dto = create_dto("Programming in C", "CO", 3);
        dto.title = "  ".to_string();
        let report = db.create_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Validation
        ));

        let report = db
            .create_book(create_dto("Programming in C", "CO", 0))
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Validation
        ));

        let mut dto = create_dto("Programming in C", "CO", 2);
        dto.available_copies = Some(3);
        let report = db.create_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Validation
        ));
    }

    #[tokio::test]
    async fn create_accepts_lower_initial_availability(
    ) -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();

        let mut dto = create_dto("Programming in C", "CO", 4);
        dto.available_copies = Some(1);
        let book = db.create_book(dto).await?;

        assert_eq!(book.copies, 4);
        assert_eq!(book.available_copies, 1);

        Ok(())
    }

    #[tokio::test]
    async fn update_patches_fields_and_guards_stock() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let book = db.create_book(create_dto("Programming in C", "CO", 3)).await?;

        let mut dto = patch(book.id);
        dto.title = Some("Programming in ANSI C".to_string());
        dto.copies = Some(5);
        let updated = db.update_book(dto).await?;
        assert_eq!(updated.title, "Programming in ANSI C");
        assert_eq!(updated.copies, 5);
        assert_eq!(updated.available_copies, 3);

        let mut dto = patch(book.id);
        dto.available_copies = Some(6);
        let report = db.update_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Validation
        ));

        // Shrinking copies below the current availability is an implied violation.
        let mut dto = patch(book.id);
        dto.copies = Some(2);
        let report = db.update_book(dto).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::Validation
        ));

        let report = db.update_book(patch(99)).await.unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));

        Ok(())
    }

    #[tokio::test]
    async fn list_books_applies_query_parameters() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        db.create_book(create_dto("Programming in C", "CO", 3)).await?;
        let unavailable = db
            .create_book(create_dto("Digital Electronics", "EJ", 1))
            .await?;

        let mut dto = patch(unavailable.id);
        dto.available_copies = Some(0);
        db.update_book(dto).await?;

        let all = db
            .get_all_books(ListBooksDto {
                search: None,
                department: None,
                available: false,
            })
            .await?;
        assert_eq!(all.len(), 2);

        let in_stock = db
            .get_all_books(ListBooksDto {
                search: None,
                department: None,
                available: true,
            })
            .await?;
        assert_eq!(in_stock.len(), 1);
        assert_eq!(in_stock[0].title, "Programming in C");

        let searched = db
            .get_all_books(ListBooksDto {
                search: Some("electronics".to_string()),
                department: None,
                available: false,
            })
            .await?;
        assert_eq!(searched.len(), 1);
        assert_eq!(searched[0].department, "EJ");

        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_book() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let book = db.create_book(create_dto("Programming in C", "CO", 3)).await?;

        db.delete_book(DeleteBookDto { id: book.id }).await?;

        let found = db.get_book(GetBookDto { id: book.id }).await?;
        assert!(found.is_none());

        let report = db
            .delete_book(DeleteBookDto { id: book.id })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));

        Ok(())
    }
}
