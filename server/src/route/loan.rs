use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use error_stack::Report;

use application::service::CreateLoanService;
use kernel::prelude::entity::LoanView;
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::book::{with_status, BookPresenter};

mod request;
mod response;

use self::request::{CreateLoanRequest, LoanTransformer};
use self::response::LoanPresenter;

pub trait LoanRouter {
    fn route_loan(self) -> Self;
}

impl LoanRouter for Router<AppModule> {
    fn route_loan(self) -> Self {
        self.route(
            "/loans",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), LoanPresenter)
                    .bypass(|| async {
                        let session = module.session().lock().await;
                        Ok::<_, Report<KernelError>>(session.loan_views())
                    })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 req: Result<Json<CreateLoanRequest>, JsonRejection>| async move {
                    let Json(req) = req?;
                    Controller::new(LoanTransformer, LoanPresenter)
                        .intake(req)
                        .handle(|dto| async move {
                            let mut session = module.session().lock().await;
                            let loan = module.create_loan(&mut session, dto)?;
                            Ok::<_, Report<KernelError>>(LoanView::resolve(&loan, session.catalog()))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/loans/available",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async {
                        let session = module.session().lock().await;
                        let books = with_status(&session, session.available_books());
                        Ok::<_, Report<KernelError>>(books)
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
