use kernel::interface::query::{BookFilter, BookQuery};
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId};
use kernel::KernelError;

use crate::database::MemoryTransaction;

pub struct MemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery<MemoryTransaction> for MemoryBookRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        Ok(con.store().books().get(id.as_ref()).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
        filter: &BookFilter,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let books = con
            .store()
            .books()
            .values()
            .filter(|book| matches_filter(book, filter))
            .cloned()
            .collect();
        Ok(books)
    }

    async fn next_identity(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<BookId, KernelError> {
        let next = con
            .store()
            .books()
            .keys()
            .next_back()
            .map_or(1, |max| max + 1);
        Ok(BookId::new(next))
    }
}

fn matches_filter(book: &Book, filter: &BookFilter) -> bool {
    if filter.available && book.available_copies().as_ref() <= &0 {
        return false;
    }
    if let Some(department) = &filter.department {
        if book.department().as_ref() != department {
            return false;
        }
    }
    match &filter.search {
        None => true,
        Some(search) => {
            let needle = search.to_lowercase();
            book.title().as_ref().to_lowercase().contains(&needle)
                || book.author().as_ref().to_lowercase().contains(&needle)
                || book.department().as_ref().to_lowercase().contains(&needle)
        }
    }
}

#[async_trait::async_trait]
impl BookModifier<MemoryTransaction> for MemoryBookRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.store_mut()
            .books_mut()
            .insert(*book.id().as_ref(), book.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        con.store_mut()
            .books_mut()
            .insert(*book.id().as_ref(), book.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        con.store_mut().books_mut().remove(book_id.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::{BookFilter, BookQuery};
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{
        AvailableCopies, Book, BookAuthor, BookDescription, BookId, BookTitle, CopyCount,
        Department, Isbn, PublicationYear,
    };
    use kernel::KernelError;

    use crate::database::{MemoryBookRepository, MemoryDatabase};

    fn sample(id: i64, title: &str, department: &str, available: i32) -> Book {
        Book::new(
            BookId::new(id),
            BookTitle::new(title),
            BookAuthor::new("E. Balagurusamy"),
            Department::new(department),
            PublicationYear::new("2019"),
            Isbn::new("978-93-5316-513-0"),
            CopyCount::new(3),
            AvailableCopies::new(available),
            None,
            BookDescription::new("A comprehensive guide for polytechnic students"),
        )
    }

    #[tokio::test]
    async fn crud() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let id = BookId::new(1);

        let book = sample(1, "Programming in C", "CO", 3);
        MemoryBookRepository.create(&mut con, &book).await?;

        let found = MemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book.clone()));

        let book = book.reconstruct(|b| b.title = BookTitle::new("Programming in ANSI C"));
        MemoryBookRepository.update(&mut con, &book).await?;

        let found = MemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(book));

        MemoryBookRepository.delete(&mut con, &id).await?;
        let found = MemoryBookRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn staged_writes_publish_on_commit_only() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();

        let mut con = db.transact().await?;
        MemoryBookRepository
            .create(&mut con, &sample(1, "Programming in C", "CO", 3))
            .await?;
        con.roll_back().await?;

        let mut con = db.transact().await?;
        let found = MemoryBookRepository
            .find_by_id(&mut con, &BookId::new(1))
            .await?;
        assert!(found.is_none());

        MemoryBookRepository
            .create(&mut con, &sample(1, "Programming in C", "CO", 3))
            .await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = MemoryBookRepository
            .find_by_id(&mut con, &BookId::new(1))
            .await?;
        assert!(found.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn next_identity_is_max_plus_one() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;

        assert_eq!(
            MemoryBookRepository.next_identity(&mut con).await?,
            BookId::new(1)
        );

        MemoryBookRepository
            .create(&mut con, &sample(4, "Digital Electronics", "EJ", 1))
            .await?;
        assert_eq!(
            MemoryBookRepository.next_identity(&mut con).await?,
            BookId::new(5)
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_all_applies_filters() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;

        MemoryBookRepository
            .create(&mut con, &sample(1, "Programming in C", "CO", 3))
            .await?;
        MemoryBookRepository
            .create(&mut con, &sample(2, "Digital Electronics", "EJ", 0))
            .await?;

        let all = MemoryBookRepository
            .find_all(&mut con, &BookFilter::default())
            .await?;
        assert_eq!(all.len(), 2);

        let by_search = MemoryBookRepository
            .find_all(
                &mut con,
                &BookFilter {
                    search: Some("digital".into()),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(by_search.len(), 1);
        assert_eq!(by_search[0].id(), &BookId::new(2));

        let by_department = MemoryBookRepository
            .find_all(
                &mut con,
                &BookFilter {
                    department: Some("CO".into()),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(by_department.len(), 1);

        let in_stock = MemoryBookRepository
            .find_all(
                &mut con,
                &BookFilter {
                    available: true,
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(in_stock.len(), 1);
        assert_eq!(in_stock[0].id(), &BookId::new(1));

        Ok(())
    }
}
