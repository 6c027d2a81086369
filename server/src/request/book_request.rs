use crate::controller::Intake;
use application::transfer::{
    ApproveRequestDto, CancelRequestDto, ListRequestsDto, RejectRequestDto, SubmitRequestDto,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    book_id: i64,
    student_id: String,
    student_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ListRequests {
    student: Option<String>,
}

#[derive(Debug)]
pub struct CancelRequest {
    id: i64,
}

impl CancelRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct ApproveRequest {
    id: i64,
}

impl ApproveRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct RejectRequest {
    id: i64,
}

impl RejectRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct RequestTransformer;

impl Intake<SubmitRequest> for RequestTransformer {
    type To = SubmitRequestDto;
    fn emit(&self, input: SubmitRequest) -> Self::To {
        SubmitRequestDto {
            book_id: input.book_id,
            student_id: input.student_id,
            student_name: input.student_name,
        }
    }
}

impl Intake<ListRequests> for RequestTransformer {
    type To = ListRequestsDto;
    fn emit(&self, input: ListRequests) -> Self::To {
        ListRequestsDto {
            student_id: input.student,
        }
    }
}

impl Intake<CancelRequest> for RequestTransformer {
    type To = CancelRequestDto;
    fn emit(&self, input: CancelRequest) -> Self::To {
        CancelRequestDto { id: input.id }
    }
}

impl Intake<ApproveRequest> for RequestTransformer {
    type To = ApproveRequestDto;
    fn emit(&self, input: ApproveRequest) -> Self::To {
        ApproveRequestDto { id: input.id }
    }
}

impl Intake<RejectRequest> for RequestTransformer {
    type To = RejectRequestDto;
    fn emit(&self, input: RejectRequest) -> Self::To {
        RejectRequestDto { id: input.id }
    }
}
