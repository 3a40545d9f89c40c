use serde::Deserialize;

use kernel::prelude::entity::{BookFilter, BookLanguage, BookPublisher};

use crate::controller::Intake;

/// Empty strings and missing keys both clear a selector.
#[derive(Debug, Default, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

pub struct FilterTransformer;

impl Intake<FilterRequest> for FilterTransformer {
    type To = BookFilter;
    fn emit(&self, input: FilterRequest) -> Self::To {
        BookFilter::new(
            input.publisher.map(BookPublisher::new),
            input.language.map(BookLanguage::new),
        )
    }
}
