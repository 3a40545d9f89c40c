use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use kernel::prelude::entity::{
    Book, BookAuthor, BookId, BookLanguage, BookPrice, BookPublisher, BookSubtitle, BookTitle,
    CoverImage, DestructBook, ExternalUrl, Isbn, LoanStatus, PageCount, PublicationYear,
};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    id: BookId,
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    id: BookId,
    title: BookTitle,
    subtitle: BookSubtitle,
    author: BookAuthor,
    publisher: BookPublisher,
    publication_year: PublicationYear,
    language: BookLanguage,
    pages: PageCount,
    price: BookPrice,
    cover_image: CoverImage,
    url: ExternalUrl,
    isbn: Isbn,
    loan_status: LoanStatus,
}

impl From<(Book, LoanStatus)> for BookResponse {
    fn from((book, loan_status): (Book, LoanStatus)) -> Self {
        let DestructBook {
            id,
            title,
            subtitle,
            author,
            publisher,
            publication_year,
            language,
            pages,
            price,
            cover_image,
            url,
            isbn,
        } = book.into_destruct();
        Self {
            id,
            title,
            subtitle,
            author,
            publisher,
            publication_year,
            language,
            pages,
            price,
            cover_image,
            url,
            isbn,
            loan_status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    selected: Option<BookResponse>,
}

pub struct BookPresenter;

impl Exhaust<BookId> for BookPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: BookId) -> Self::To {
        CreatedResponse { id: input }
    }
}

impl Exhaust<(Book, LoanStatus)> for BookPresenter {
    type To = Json<BookResponse>;
    fn emit(&self, input: (Book, LoanStatus)) -> Self::To {
        Json(BookResponse::from(input))
    }
}

impl Exhaust<Vec<(Book, LoanStatus)>> for BookPresenter {
    type To = Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<(Book, LoanStatus)>) -> Self::To {
        Json(input.into_iter().map(BookResponse::from).collect())
    }
}

impl Exhaust<Option<(Book, LoanStatus)>> for BookPresenter {
    type To = Json<SelectionResponse>;
    fn emit(&self, input: Option<(Book, LoanStatus)>) -> Self::To {
        Json(SelectionResponse {
            selected: input.map(BookResponse::from),
        })
    }
}

/// Update and delete answer 204 when the book existed and 404 when it did not.
impl Exhaust<bool> for BookPresenter {
    type To = StatusCode;
    fn emit(&self, found: bool) -> Self::To {
        if found {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::NOT_FOUND
        }
    }
}
