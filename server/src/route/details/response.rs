use axum::Json;
use serde::Serialize;

use application::{SimilarBooksSlot, SimilarBooksState};
use kernel::prelude::entity::{Book, LoanStatus, SimilarBook};

use crate::controller::Exhaust;
use crate::route::book::BookResponse;

#[derive(Debug, Serialize)]
pub struct SimilarBookResponse {
    title: String,
    subtitle: String,
    price: String,
    image: String,
    url: String,
    isbn13: String,
}

impl From<&SimilarBook> for SimilarBookResponse {
    fn from(book: &SimilarBook) -> Self {
        Self {
            title: book.title().clone(),
            subtitle: book.subtitle().clone(),
            price: book.price().clone(),
            image: book.image().clone(),
            url: book.url().clone(),
            isbn13: book.isbn13().clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SimilarResponse {
    state: &'static str,
    query: String,
    books: Vec<SimilarBookResponse>,
    message: Option<String>,
}

impl From<SimilarBooksSlot> for SimilarResponse {
    fn from(slot: SimilarBooksSlot) -> Self {
        let query = slot.query().as_str().to_string();
        let (state, books, message) = match slot.state() {
            SimilarBooksState::Idle => ("idle", Vec::new(), None),
            SimilarBooksState::Loading => ("loading", Vec::new(), None),
            SimilarBooksState::Loaded(books) => (
                "loaded",
                books.iter().map(SimilarBookResponse::from).collect(),
                None,
            ),
            SimilarBooksState::Failed(message) => ("failed", Vec::new(), Some(message.clone())),
        };
        Self {
            state,
            query,
            books,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    book: Option<BookResponse>,
    similar: SimilarResponse,
}

pub struct DetailsPresenter;

impl Exhaust<(Option<(Book, LoanStatus)>, SimilarBooksSlot)> for DetailsPresenter {
    type To = Json<DetailsResponse>;
    fn emit(&self, (book, similar): (Option<(Book, LoanStatus)>, SimilarBooksSlot)) -> Self::To {
        Json(DetailsResponse {
            book: book.map(BookResponse::from),
            similar: SimilarResponse::from(similar),
        })
    }
}
