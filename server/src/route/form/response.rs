use axum::Json;
use serde::Serialize;

use application::{BookForm, FormMode};
use kernel::prelude::entity::{BookDraft, BookId};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct FormResponse {
    mode: &'static str,
    target: Option<BookId>,
    draft: BookDraft,
}

#[derive(Debug, Serialize)]
pub struct SubmittedResponse {
    id: BookId,
}

pub struct FormPresenter;

impl Exhaust<BookForm> for FormPresenter {
    type To = Json<FormResponse>;
    fn emit(&self, input: BookForm) -> Self::To {
        let (mode, target) = match input.mode() {
            FormMode::Closed => ("closed", None),
            FormMode::Create => ("create", None),
            FormMode::Edit(id) => ("edit", Some(id.clone())),
        };
        Json(FormResponse {
            mode,
            target,
            draft: input.draft().clone(),
        })
    }
}

impl Exhaust<BookId> for FormPresenter {
    type To = Json<SubmittedResponse>;
    fn emit(&self, input: BookId) -> Self::To {
        Json(SubmittedResponse { id: input })
    }
}
