use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use error_stack::Report;

use application::Session;
use kernel::prelude::entity::{BookFilter, FilterOptions};
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;

mod request;
mod response;

use self::request::{FilterRequest, FilterTransformer};
use self::response::FilterPresenter;

fn current(session: &Session) -> (BookFilter, FilterOptions) {
    (session.filter().clone(), session.filter_options())
}

pub trait FilterRouter {
    fn route_filter(self) -> Self;
}

impl FilterRouter for Router<AppModule> {
    fn route_filter(self) -> Self {
        self.route(
            "/filter",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), FilterPresenter)
                    .bypass(|| async {
                        let session = module.session().lock().await;
                        Ok::<_, Report<KernelError>>(current(&session))
                    })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .put(
                |State(module): State<AppModule>,
                 req: Result<Json<FilterRequest>, JsonRejection>| async move {
                    let Json(req) = req?;
                    Controller::new(FilterTransformer, FilterPresenter)
                        .intake(req)
                        .handle(|filter| async move {
                            let mut session = module.session().lock().await;
                            session.set_filter(filter);
                            Ok::<_, Report<KernelError>>(current(&session))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
