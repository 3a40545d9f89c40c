use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use error_stack::Report;

use application::service::SubmitBookFormService;
use kernel::prelude::entity::BookId;
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::book::BookFieldsRequest;
use crate::route::details::spawn_lookup;

mod response;

use self::response::FormPresenter;

pub trait FormRouter {
    fn route_form(self) -> Self;
}

impl FormRouter for Router<AppModule> {
    fn route_form(self) -> Self {
        self.route(
            "/form",
            get(|State(module): State<AppModule>| async move {
                Controller::new((), FormPresenter)
                    .bypass(|| async {
                        let session = module.session().lock().await;
                        Ok::<_, Report<KernelError>>(session.form().clone())
                    })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(|State(module): State<AppModule>| async move {
                Controller::new((), FormPresenter)
                    .bypass(|| async {
                        let mut session = module.session().lock().await;
                        session.form_mut().open_create();
                        Ok::<_, Report<KernelError>>(session.form().clone())
                    })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .patch(
                |State(module): State<AppModule>,
                 req: Result<Json<BookFieldsRequest>, JsonRejection>| async move {
                    let Json(req) = req?;
                    Controller::new((), FormPresenter)
                        .bypass(|| async {
                            let mut session = module.session().lock().await;
                            for (field, value) in req.into_edits() {
                                session.form_mut().set_field(field, value)?;
                            }
                            Ok::<_, Report<KernelError>>(session.form().clone())
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .delete(|State(module): State<AppModule>| async move {
                Controller::new((), FormPresenter)
                    .bypass(|| async {
                        let mut session = module.session().lock().await;
                        session.form_mut().cancel();
                        Ok::<_, Report<KernelError>>(session.form().clone())
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/form/edit/:id",
            post(
                |State(module): State<AppModule>, Path(id): Path<String>| async move {
                    let id = BookId::new(id);
                    Controller::new((), FormPresenter)
                        .bypass(|| async {
                            let mut session = module.session().lock().await;
                            session.open_edit_form(&id)?;
                            Ok::<_, Report<KernelError>>(session.form().clone())
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/form/submit",
            post(|State(module): State<AppModule>| async move {
                Controller::new((), FormPresenter)
                    .bypass(|| async {
                        let mut session = module.session().lock().await;
                        let id = module.submit_book_form(&mut session).await?;
                        spawn_lookup(module.clone(), session.sync_details());
                        Ok::<_, Report<KernelError>>(id)
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
