use axum::Json;
use serde::Serialize;

use kernel::prelude::entity::{BookFilter, BookLanguage, BookPublisher, FilterOptions};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct FilterResponse {
    publisher: Option<BookPublisher>,
    language: Option<BookLanguage>,
    publishers: Vec<BookPublisher>,
    languages: Vec<BookLanguage>,
}

pub struct FilterPresenter;

impl Exhaust<(BookFilter, FilterOptions)> for FilterPresenter {
    type To = Json<FilterResponse>;
    fn emit(&self, (filter, options): (BookFilter, FilterOptions)) -> Self::To {
        Json(FilterResponse {
            publisher: filter.publisher().clone(),
            language: filter.language().clone(),
            publishers: options.publishers().clone(),
            languages: options.languages().clone(),
        })
    }
}
