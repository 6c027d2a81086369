use kernel::interface::query::BookRequestQuery;
use kernel::interface::update::BookRequestModifier;
use kernel::prelude::entity::{BookId, BookRequest, RequestId, StudentId};
use kernel::KernelError;

use crate::database::MemoryTransaction;

pub struct MemoryBookRequestRepository;

#[async_trait::async_trait]
impl BookRequestQuery<MemoryTransaction> for MemoryBookRequestRepository {
    async fn find_by_id(
        &self,
        con: &mut MemoryTransaction,
        id: &RequestId,
    ) -> error_stack::Result<Option<BookRequest>, KernelError> {
        Ok(con.store().requests().get(id.as_ref()).cloned())
    }

    async fn find_all(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<Vec<BookRequest>, KernelError> {
        Ok(con.store().requests().values().cloned().collect())
    }

    async fn find_by_book_id(
        &self,
        con: &mut MemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookRequest>, KernelError> {
        let requests = con
            .store()
            .requests()
            .values()
            .filter(|request| request.book_id() == book_id)
            .cloned()
            .collect();
        Ok(requests)
    }

    async fn find_by_student_id(
        &self,
        con: &mut MemoryTransaction,
        student_id: &StudentId,
    ) -> error_stack::Result<Vec<BookRequest>, KernelError> {
        let requests = con
            .store()
            .requests()
            .values()
            .filter(|request| request.student_id() == student_id)
            .cloned()
            .collect();
        Ok(requests)
    }

    async fn next_identity(
        &self,
        con: &mut MemoryTransaction,
    ) -> error_stack::Result<RequestId, KernelError> {
        let next = con
            .store()
            .requests()
            .keys()
            .next_back()
            .map_or(1, |max| max + 1);
        Ok(RequestId::new(next))
    }
}

#[async_trait::async_trait]
impl BookRequestModifier<MemoryTransaction> for MemoryBookRequestRepository {
    async fn create(
        &self,
        con: &mut MemoryTransaction,
        request: &BookRequest,
    ) -> error_stack::Result<(), KernelError> {
        con.store_mut()
            .requests_mut()
            .insert(*request.id().as_ref(), request.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryTransaction,
        request: &BookRequest,
    ) -> error_stack::Result<(), KernelError> {
        con.store_mut()
            .requests_mut()
            .insert(*request.id().as_ref(), request.clone());
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MemoryTransaction,
        request_id: &RequestId,
    ) -> error_stack::Result<(), KernelError> {
        con.store_mut().requests_mut().remove(request_id.as_ref());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::BookRequestQuery;
    use kernel::interface::update::BookRequestModifier;
    use kernel::prelude::entity::{
        BookId, BookRequest, BookTitle, RequestDate, RequestId, RequestStatus, StudentId,
        StudentName,
    };
    use kernel::KernelError;
    use time::macros::date;

    use crate::database::{MemoryBookRequestRepository, MemoryDatabase};

    fn sample(id: i64, book_id: i64, student_id: &str) -> BookRequest {
        BookRequest::new(
            RequestId::new(id),
            BookId::new(book_id),
            BookTitle::new("Digital Electronics"),
            StudentId::new(student_id),
            StudentName::new("Asha Verma"),
            RequestDate::new(date!(2024 - 02 - 19)),
            RequestStatus::Pending,
        )
    }

    #[tokio::test]
    async fn crud() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;
        let id = RequestId::new(1);

        let request = sample(1, 5, "CO21034");
        MemoryBookRequestRepository
            .create(&mut con, &request)
            .await?;

        let found = MemoryBookRequestRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(request.clone()));

        let request = request.approve()?;
        MemoryBookRequestRepository
            .update(&mut con, &request)
            .await?;

        let found = MemoryBookRequestRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(
            found.map(|r| *r.status()),
            Some(RequestStatus::Approved)
        );

        MemoryBookRequestRepository.delete(&mut con, &id).await?;
        let found = MemoryBookRequestRepository.find_by_id(&mut con, &id).await?;
        assert!(found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn find_by_book_and_student() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let mut con = db.transact().await?;

        MemoryBookRequestRepository
            .create(&mut con, &sample(1, 5, "CO21034"))
            .await?;
        MemoryBookRequestRepository
            .create(&mut con, &sample(2, 5, "EJ21077"))
            .await?;
        MemoryBookRequestRepository
            .create(&mut con, &sample(3, 8, "CO21034"))
            .await?;

        let by_book = MemoryBookRequestRepository
            .find_by_book_id(&mut con, &BookId::new(5))
            .await?;
        assert_eq!(by_book.len(), 2);

        let by_student = MemoryBookRequestRepository
            .find_by_student_id(&mut con, &StudentId::new("CO21034"))
            .await?;
        assert_eq!(by_student.len(), 2);

        let next = MemoryBookRequestRepository.next_identity(&mut con).await?;
        assert_eq!(next, RequestId::new(4));

        Ok(())
    }
}
