use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use error_stack::Report;
use serde::Serialize;

use application::service::ImportSeedService;
use kernel::KernelError;

use crate::controller::{Controller, Exhaust};
use crate::error::ErrorStatus;
use crate::handler::AppModule;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    imported: usize,
}

pub struct SeedPresenter;

impl Exhaust<usize> for SeedPresenter {
    type To = Json<SeedResponse>;
    fn emit(&self, imported: usize) -> Self::To {
        Json(SeedResponse { imported })
    }
}

pub trait SeedRouter {
    fn route_seed(self) -> Self;
}

impl SeedRouter for Router<AppModule> {
    fn route_seed(self) -> Self {
        self.route(
            "/seed",
            post(|State(module): State<AppModule>| async move {
                Controller::new((), SeedPresenter)
                    .bypass(|| async {
                        let mut session = module.session().lock().await;
                        let imported = module.import_seed(&mut session).await?;
                        Ok::<_, Report<KernelError>>(imported)
                    })
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
