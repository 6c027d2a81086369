use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::{BookCsvPresenter, RequestCsvPresenter};
use application::service::{GetBookService, GetRequestService};
use application::transfer::{ListBooksDto, ListRequestsDto};
use axum::extract::State;
use axum::routing::get;
use axum::Router;

pub trait ExportRouter {
    fn route_export(self) -> Self;
}

impl ExportRouter for Router<AppModule> {
    fn route_export(self) -> Self {
        self.route(
            "/export/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookCsvPresenter)
                    .bypass(|| async move {
                        module
                            .ledger()
                            .get_all_books(ListBooksDto {
                                search: None,
                                department: None,
                                available: false,
                            })
                            .await
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/export/requests",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), RequestCsvPresenter)
                    .bypass(|| async move {
                        module
                            .ledger()
                            .get_all_requests(ListRequestsDto { student_id: None })
                            .await
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
