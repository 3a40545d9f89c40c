use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use error_stack::Report;

use application::service::SimilarBooksService;
use application::{LookupTicket, Session, SimilarBooksSlot};
use kernel::prelude::entity::{Book, BookId, LoanStatus};
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;

mod response;

use self::response::DetailsPresenter;

/// Runs the similar-books search off the session lock and feeds the result back.
pub(crate) fn spawn_lookup(module: AppModule, ticket: Option<LookupTicket>) {
    let Some(ticket) = ticket else {
        return;
    };
    tokio::spawn(async move {
        let result = module.search_similar(&ticket).await;
        let mut session = module.session().lock().await;
        session.resolve_similar(&ticket, result);
    });
}

fn details(session: &Session) -> (Option<(Book, LoanStatus)>, SimilarBooksSlot) {
    let book = session
        .viewed_book()
        .map(|book| (book.clone(), session.loan_status(book.id())));
    (book, session.details().similar().clone())
}

pub trait DetailsRouter {
    fn route_details(self) -> Self;
}

impl DetailsRouter for Router<AppModule> {
    fn route_details(self) -> Self {
        self.route(
            "/books/:id/details",
            post(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    let id = BookId::new(id);
                    Controller::new((), DetailsPresenter)
                        .bypass(|| async {
                            let mut session = module.session().lock().await;
                            let ticket = session.open_details(&id)?;
                            spawn_lookup(module.clone(), ticket);
                            Ok::<_, Report<KernelError>>(details(&session))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/details",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), DetailsPresenter)
                    .bypass(|| async {
                        let session = module.session().lock().await;
                        Ok::<_, Report<KernelError>>(details(&session))
                    })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .delete(|State(module): State<AppModule>| async move {
                module.session().lock().await.close_details();
                StatusCode::NO_CONTENT
            }),
        )
    }
}
