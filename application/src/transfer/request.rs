use kernel::prelude::entity::{BookRequest, DestructBookRequest, RequestStatus};
use time::Date;

#[derive(Debug, Clone)]
pub struct BookRequestDto {
    pub id: i64,
    pub book_id: i64,
    pub book_title: String,
    pub student_id: String,
    pub student_name: String,
    pub request_date: Date,
    pub status: RequestStatus,
}

impl From<BookRequest> for BookRequestDto {
    fn from(value: BookRequest) -> Self {
        let DestructBookRequest {
            id,
            book_id,
            book_title,
            student_id,
            student_name,
            request_date,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            book_id: book_id.into(),
            book_title: book_title.into(),
            student_id: student_id.into(),
            student_name: student_name.into(),
            request_date: request_date.into(),
            status,
        }
    }
}

pub struct ListRequestsDto {
    pub student_id: Option<String>,
}

pub struct SubmitRequestDto {
    pub book_id: i64,
    pub student_id: String,
    pub student_name: String,
}

pub struct CancelRequestDto {
    pub id: i64,
}

pub struct ApproveRequestDto {
    pub id: i64,
}

pub struct RejectRequestDto {
    pub id: i64,
}
