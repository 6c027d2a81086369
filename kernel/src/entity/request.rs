mod date;
mod id;
mod status;

pub use self::{date::*, id::*, status::*};
use crate::entity::{BookId, BookTitle, StudentId, StudentName};
use crate::KernelError;
use destructure::{Destructure, Mutation};
use error_stack::Report;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct BookRequest {
    id: RequestId,
    book_id: BookId,
    book_title: BookTitle,
    student_id: StudentId,
    student_name: StudentName,
    request_date: RequestDate,
    status: RequestStatus,
}

impl BookRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RequestId,
        book_id: BookId,
        book_title: BookTitle,
        student_id: StudentId,
        student_name: StudentName,
        request_date: RequestDate,
        status: RequestStatus,
    ) -> Self {
        Self {
            id,
            book_id,
            book_title,
            student_id,
            student_name,
            request_date,
            status,
        }
    }

    pub fn approve(self) -> error_stack::Result<Self, KernelError> {
        self.transition(RequestStatus::Approved)
    }

    pub fn reject(self) -> error_stack::Result<Self, KernelError> {
        self.transition(RequestStatus::Rejected)
    }

    // Cascade arm of book deletion. Ignores the pending-only rule.
    pub fn force_reject(self) -> Self {
        self.reconstruct(|request| request.status = RequestStatus::Rejected)
    }

    fn transition(self, next: RequestStatus) -> error_stack::Result<Self, KernelError> {
        if !self.status.is_pending() {
            return Err(Report::new(KernelError::InvalidState).attach_printable(format!(
                "request {} is already {}",
                self.id.as_ref(),
                self.status
            )));
        }
        Ok(self.reconstruct(|request| request.status = next))
    }
}
