use serde::Deserialize;

use application::transfer::{CreateBookDto, DeleteBookDto, UpdateBookDto};
use kernel::prelude::entity::{BookDraft, BookField};

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[serde(default)]
    id: Option<String>,
    #[serde(flatten)]
    draft: BookDraft,
}

/// Partial set of book fields. Absent keys are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFieldsRequest {
    title: Option<String>,
    subtitle: Option<String>,
    author: Option<String>,
    publisher: Option<String>,
    publication_year: Option<String>,
    language: Option<String>,
    pages: Option<String>,
    price: Option<String>,
    cover_image: Option<String>,
    url: Option<String>,
    isbn: Option<String>,
}

impl BookFieldsRequest {
    pub fn into_edits(self) -> Vec<(BookField, String)> {
        [
            (BookField::Title, self.title),
            (BookField::Subtitle, self.subtitle),
            (BookField::Author, self.author),
            (BookField::Publisher, self.publisher),
            (BookField::PublicationYear, self.publication_year),
            (BookField::Language, self.language),
            (BookField::Pages, self.pages),
            (BookField::Price, self.price),
            (BookField::CoverImage, self.cover_image),
            (BookField::Url, self.url),
            (BookField::Isbn, self.isbn),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

#[derive(Debug)]
pub struct DeleteBookRequest {
    id: String,
}

impl DeleteBookRequest {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        CreateBookDto {
            id: input.id,
            draft: input.draft,
        }
    }
}

impl Intake<(String, BookFieldsRequest)> for BookTransformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (String, BookFieldsRequest)) -> Self::To {
        let (id, input) = input;
        UpdateBookDto {
            id,
            title: input.title,
            subtitle: input.subtitle,
            author: input.author,
            publisher: input.publisher,
            publication_year: input.publication_year,
            language: input.language,
            pages: input.pages,
            price: input.price,
            cover_image: input.cover_image,
            url: input.url,
            isbn: input.isbn,
        }
    }
}

impl Intake<DeleteBookRequest> for BookTransformer {
    type To = DeleteBookDto;
    fn emit(&self, input: DeleteBookRequest) -> Self::To {
        DeleteBookDto { id: input.id }
    }
}
