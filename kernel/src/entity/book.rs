mod author;
mod draft;
mod id;
mod isbn;
mod language;
mod link;
mod pages;
mod patch;
mod price;
mod publication_year;
mod publisher;
mod title;

pub use self::{
    author::*, draft::*, id::*, isbn::*, language::*, link::*, pages::*, patch::*, price::*,
    publication_year::*, publisher::*, title::*,
};
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
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
}

impl Book {
    pub fn new(id: BookId, draft: BookDraft) -> Self {
        Self {
            id,
            title: BookTitle::new(draft.title),
            subtitle: BookSubtitle::new(draft.subtitle),
            author: BookAuthor::new(draft.author),
            publisher: BookPublisher::new(draft.publisher),
            publication_year: PublicationYear::new(draft.publication_year),
            language: BookLanguage::new(draft.language),
            pages: PageCount::new(draft.pages),
            price: BookPrice::new(draft.price),
            cover_image: CoverImage::new(draft.cover_image),
            url: ExternalUrl::new(draft.url),
            isbn: Isbn::new(draft.isbn),
        }
    }
}
