use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    ApproveRequest, CancelRequest, ListRequests, RejectRequest, RequestTransformer, SubmitRequest,
};
use crate::response::{RequestCreatedPresenter, RequestPresenter};
use application::service::{
    ApproveRequestService, CancelRequestService, GetRequestService, RejectRequestService,
    SubmitRequestService,
};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};

pub trait RequestRouter {
    fn route_request(self) -> Self;
}

impl RequestRouter for Router<AppModule> {
    fn route_request(self) -> Self {
        self.route(
            "/requests",
            get(
                |State(module): State<AppModule>, Query(req): Query<ListRequests>| async move {
                    Controller::new(RequestTransformer, RequestPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.ledger().get_all_requests(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>, Json(req): Json<SubmitRequest>| async move {
                    Controller::new(RequestTransformer, RequestCreatedPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.ledger().submit_request(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/requests/:id",
            axum::routing::delete(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(RequestTransformer, RequestPresenter)
                        .intake(CancelRequest::new(id))
                        .handle(|dto| async move { module.ledger().cancel_request(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/requests/:id/approve",
            post(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(RequestTransformer, RequestPresenter)
                        .intake(ApproveRequest::new(id))
                        .handle(|dto| async move { module.ledger().approve_request(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/requests/:id/reject",
            post(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(RequestTransformer, RequestPresenter)
                        .intake(RejectRequest::new(id))
                        .handle(|dto| async move { module.ledger().reject_request(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
