use crate::database::Transaction;
use crate::entity::{BookRequest, RequestId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookRequestModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        request: &BookRequest,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Connection,
        request: &BookRequest,
    ) -> error_stack::Result<(), KernelError>;
    async fn delete(
        &self,
        con: &mut Connection,
        request_id: &RequestId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookRequestModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookRequestModifier: BookRequestModifier<Connection>;
    fn book_request_modifier(&self) -> &Self::BookRequestModifier;
}
