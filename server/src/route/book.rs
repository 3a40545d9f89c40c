use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use error_stack::Report;

use application::service::{CreateBookService, DeleteBookService, UpdateBookService};
use application::Session;
use kernel::prelude::entity::{Book, BookId, LoanStatus};
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::details::spawn_lookup;

mod request;
mod response;

pub(crate) use self::request::BookFieldsRequest;
pub(crate) use self::response::{BookPresenter, BookResponse};
use self::request::{BookTransformer, CreateBookRequest, DeleteBookRequest};

pub(crate) fn with_status(session: &Session, books: Vec<&Book>) -> Vec<(Book, LoanStatus)> {
    books
        .into_iter()
        .map(|book| (book.clone(), session.loan_status(book.id())))
        .collect()
}

fn selection(session: &Session) -> Option<(Book, LoanStatus)> {
    session
        .catalog()
        .selected_book()
        .map(|book| (book.clone(), session.loan_status(book.id())))
}

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async {
                        let session = module.session().lock().await;
                        let books = with_status(&session, session.visible_books());
                        Ok::<_, Report<KernelError>>(books)
                    })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(module): State<AppModule>,
                 req: Result<Json<CreateBookRequest>, JsonRejection>| async move {
                    let Json(req) = req?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(req)
                        .handle(|dto| async move {
                            let mut session = module.session().lock().await;
                            module.create_book(&mut session, dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    let id = BookId::new(id);
                    Controller::new((), BookPresenter)
                        .bypass(|| async {
                            let session = module.session().lock().await;
                            let book = session.catalog().find(&id).cloned().ok_or_else(|| {
                                Report::new(KernelError::NotFound)
                                    .attach_printable(format!("no book with id {id}"))
                            })?;
                            Ok::<_, Report<KernelError>>((book, session.loan_status(&id)))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .patch(
                |State(module): State<AppModule>,
                 Path(id): Path<String>,
                 req: Result<Json<BookFieldsRequest>, JsonRejection>| async move {
                    let Json(req) = req?;
                    Controller::new(BookTransformer, BookPresenter)
                        .intake((id, req))
                        .handle(|dto| async move {
                            let mut session = module.session().lock().await;
                            let found = module.update_book(&mut session, dto).await?;
                            spawn_lookup(module.clone(), session.sync_details());
                            Ok::<_, Report<KernelError>>(found)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move {
                            let mut session = module.session().lock().await;
                            module.delete_book(&mut session, dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/books/:id/select",
            post(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    let id = BookId::new(id);
                    Controller::new((), BookPresenter)
                        .bypass(|| async {
                            let mut session = module.session().lock().await;
                            session.toggle_selection(&id)?;
                            Ok::<_, Report<KernelError>>(selection(&session))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/selection",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), BookPresenter)
                    .bypass(|| async {
                        let session = module.session().lock().await;
                        Ok::<_, Report<KernelError>>(selection(&session))
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
