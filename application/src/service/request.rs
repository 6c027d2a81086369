use error_stack::Report;
use time::OffsetDateTime;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    BookQuery, BookRequestQuery, DependOnBookQuery, DependOnBookRequestQuery,
};
use kernel::interface::update::{
    BookModifier, BookRequestModifier, DependOnBookModifier, DependOnBookRequestModifier,
};
use kernel::prelude::entity::{
    BookId, BookRequest, RequestDate, RequestId, RequestStatus, StudentId, StudentName,
};
use kernel::KernelError;

use crate::service::required;
use crate::transfer::{
    ApproveRequestDto, BookRequestDto, CancelRequestDto, ListRequestsDto, RejectRequestDto,
    SubmitRequestDto,
};

#[async_trait::async_trait]
pub trait GetRequestService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookRequestQuery<Connection>
{
    async fn get_all_requests(
        &self,
        dto: ListRequestsDto,
    ) -> error_stack::Result<Vec<BookRequestDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let requests = match dto.student_id {
            Some(student) => {
                let student_id = StudentId::new(student);
                self.book_request_query()
                    .find_by_student_id(&mut connection, &student_id)
                    .await?
            }
            None => self.book_request_query().find_all(&mut connection).await?,
        };

        Ok(requests.into_iter().map(BookRequestDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetRequestService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookRequestQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait SubmitRequestService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookRequestQuery<Connection>
    + DependOnBookRequestModifier<Connection>
{
    async fn submit_request(
        &self,
        dto: SubmitRequestDto,
    ) -> error_stack::Result<BookRequestDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let student_id = StudentId::new(required(dto.student_id, "student id")?);
        let student_name = StudentName::new(required(dto.student_name, "student name")?);

        let book_id = BookId::new(dto.book_id);
        let book = self
            .book_query()
            .find_by_id(&mut connection, &book_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("book {} does not exist", dto.book_id))
            })?;

        let duplicate = self
            .book_request_query()
            .find_by_book_id(&mut connection, &book_id)
            .await?
            .into_iter()
            .any(|request| request.status().is_pending() && request.student_id() == &student_id);
        if duplicate {
            return Err(Report::new(KernelError::Conflict).attach_printable(format!(
                "student {} already has a pending request for book {}",
                student_id.as_ref(),
                dto.book_id
            )));
        }

        if book.available_copies().as_ref() <= &0 {
            return Err(Report::new(KernelError::Unavailable).attach_printable(format!(
                "book {} has no available copies",
                dto.book_id
            )));
        }

        // Stock is untouched here. Approval is the only operation that consumes a copy.
        let id = self
            .book_request_query()
            .next_identity(&mut connection)
            .await?;
        let request = BookRequest::new(
            id,
            book_id,
            book.title().clone(),
            student_id,
            student_name,
            RequestDate::new(OffsetDateTime::now_utc().date()),
            RequestStatus::Pending,
        );
        self.book_request_modifier()
            .create(&mut connection, &request)
            .await?;
        connection.commit().await?;

        Ok(BookRequestDto::from(request))
    }
}

impl<Connection: Transaction + Send, T> SubmitRequestService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookRequestQuery<Connection>
        + DependOnBookRequestModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait CancelRequestService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookRequestQuery<Connection>
    + DependOnBookRequestModifier<Connection>
{
    async fn cancel_request(
        &self,
        dto: CancelRequestDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RequestId::new(dto.id);
        let request = self
            .book_request_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("request {} does not exist", dto.id))
            })?;

        if !request.status().is_pending() {
            return Err(Report::new(KernelError::InvalidState).attach_printable(format!(
                "request {} is already {}",
                dto.id,
                request.status()
            )));
        }

        self.book_request_modifier()
            .delete(&mut connection, &id)
            .await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<Connection: Transaction + Send, T> CancelRequestService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookRequestQuery<Connection>
        + DependOnBookRequestModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ApproveRequestService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnBookRequestQuery<Connection>
    + DependOnBookRequestModifier<Connection>
{
    async fn approve_request(
        &self,
        dto: ApproveRequestDto,
    ) -> error_stack::Result<BookRequestDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RequestId::new(dto.id);
        let request = self
            .book_request_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("request {} does not exist", dto.id))
            })?;
        let approved = request.approve()?;

        // The authoritative stock check happens now, not at submission.
        let book = self
            .book_query()
            .find_by_id(&mut connection, approved.book_id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable(format!(
                    "book {} does not exist",
                    approved.book_id().as_ref()
                ))
            })?;
        let book = book.allocate_copy()?;

        self.book_modifier().update(&mut connection, &book).await?;
        self.book_request_modifier()
            .update(&mut connection, &approved)
            .await?;
        connection.commit().await?;

        Ok(BookRequestDto::from(approved))
    }
}

impl<Connection: Transaction + Send, T> ApproveRequestService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnBookRequestQuery<Connection>
        + DependOnBookRequestModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait RejectRequestService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookRequestQuery<Connection>
    + DependOnBookRequestModifier<Connection>
{
    async fn reject_request(
        &self,
        dto: RejectRequestDto,
    ) -> error_stack::Result<BookRequestDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = RequestId::new(dto.id);
        let request = self
            .book_request_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("request {} does not exist", dto.id))
            })?;
        let rejected = request.reject()?;

        self.book_request_modifier()
            .update(&mut connection, &rejected)
            .await?;
        connection.commit().await?;

        Ok(BookRequestDto::from(rejected))
    }
}

impl<Connection: Transaction + Send, T> RejectRequestService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookRequestQuery<Connection>
        + DependOnBookRequestModifier<Connection>
{
}
