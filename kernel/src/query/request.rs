use crate::database::Transaction;
use crate::entity::{BookId, BookRequest, RequestId, StudentId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookRequestQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &RequestId,
    ) -> error_stack::Result<Option<BookRequest>, KernelError>;
    async fn find_all(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<Vec<BookRequest>, KernelError>;
    async fn find_by_book_id(
        &self,
        con: &mut Connection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookRequest>, KernelError>;
    async fn find_by_student_id(
        &self,
        con: &mut Connection,
        student_id: &StudentId,
    ) -> error_stack::Result<Vec<BookRequest>, KernelError>;
    async fn next_identity(
        &self,
        con: &mut Connection,
    ) -> error_stack::Result<RequestId, KernelError>;
}

pub trait DependOnBookRequestQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookRequestQuery: BookRequestQuery<Connection>;
    fn book_request_query(&self) -> &Self::BookRequestQuery;
}
