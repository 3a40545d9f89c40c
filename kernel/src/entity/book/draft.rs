use serde::{Deserialize, Serialize};

use crate::entity::Book;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookField {
    Title,
    Subtitle,
    Author,
    Publisher,
    PublicationYear,
    Language,
    Pages,
    Price,
    CoverImage,
    Url,
    Isbn,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookDraft {
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub publisher: String,
    pub publication_year: String,
    pub language: String,
    pub pages: String,
    pub price: String,
    pub cover_image: String,
    pub url: String,
    pub isbn: String,
}

impl BookDraft {
    fn slot(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Subtitle => &mut self.subtitle,
            BookField::Author => &mut self.author,
            BookField::Publisher => &mut self.publisher,
            BookField::PublicationYear => &mut self.publication_year,
            BookField::Language => &mut self.language,
            BookField::Pages => &mut self.pages,
            BookField::Price => &mut self.price,
            BookField::CoverImage => &mut self.cover_image,
            BookField::Url => &mut self.url,
            BookField::Isbn => &mut self.isbn,
        }
    }

    pub fn set(&mut self, field: BookField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Subtitle => &self.subtitle,
            BookField::Author => &self.author,
            BookField::Publisher => &self.publisher,
            BookField::PublicationYear => &self.publication_year,
            BookField::Language => &self.language,
            BookField::Pages => &self.pages,
            BookField::Price => &self.price,
            BookField::CoverImage => &self.cover_image,
            BookField::Url => &self.url,
            BookField::Isbn => &self.isbn,
        }
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title().as_ref().clone(),
            subtitle: book.subtitle().as_ref().clone(),
            author: book.author().as_ref().clone(),
            publisher: book.publisher().as_ref().clone(),
            publication_year: book.publication_year().as_ref().clone(),
            language: book.language().as_ref().clone(),
            pages: book.pages().as_ref().clone(),
            price: book.price().as_ref().clone(),
            cover_image: book.cover_image().as_ref().clone(),
            url: book.url().as_ref().clone(),
            isbn: book.isbn().as_ref().clone(),
        }
    }
}
