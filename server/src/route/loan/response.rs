use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use kernel::prelude::entity::{BookId, Borrower, DueDate, LoanView};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponse {
    book_id: BookId,
    /// Title of the lent book, or its raw id once the book is gone.
    book: String,
    borrower: Borrower,
    due_date: DueDate,
    dangling: bool,
}

impl From<LoanView> for LoanResponse {
    fn from(view: LoanView) -> Self {
        Self {
            book_id: view.book_id().clone(),
            book: view.book_label().clone(),
            borrower: view.borrower().clone(),
            due_date: *view.due_date(),
            dangling: *view.dangling(),
        }
    }
}

pub struct LoanCreatedResponse(LoanResponse);

impl IntoResponse for LoanCreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct LoanPresenter;

impl Exhaust<LoanView> for LoanPresenter {
    type To = LoanCreatedResponse;
    fn emit(&self, input: LoanView) -> Self::To {
        LoanCreatedResponse(LoanResponse::from(input))
    }
}

impl Exhaust<Vec<LoanView>> for LoanPresenter {
    type To = Json<Vec<LoanResponse>>;
    fn emit(&self, input: Vec<LoanView>) -> Self::To {
        Json(input.into_iter().map(LoanResponse::from).collect())
    }
}
