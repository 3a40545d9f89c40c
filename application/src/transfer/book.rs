use kernel::prelude::entity::{
    BookAuthor, BookDraft, BookId, BookLanguage, BookPatch, BookPrice, BookPublisher,
    BookSubtitle, BookTitle, CoverImage, ExternalUrl, Isbn, PageCount, PublicationYear,
};

pub struct CreateBookDto {
    pub id: Option<String>,
    pub draft: BookDraft,
}

#[derive(Debug, Default)]
pub struct UpdateBookDto {
    pub id: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub publication_year: Option<String>,
    pub language: Option<String>,
    pub pages: Option<String>,
    pub price: Option<String>,
    pub cover_image: Option<String>,
    pub url: Option<String>,
    pub isbn: Option<String>,
}

impl UpdateBookDto {
    pub fn overwrite(id: BookId, draft: BookDraft) -> Self {
        Self {
            id: id.as_str().to_string(),
            title: Some(draft.title),
            subtitle: Some(draft.subtitle),
            author: Some(draft.author),
            publisher: Some(draft.publisher),
            publication_year: Some(draft.publication_year),
            language: Some(draft.language),
            pages: Some(draft.pages),
            price: Some(draft.price),
            cover_image: Some(draft.cover_image),
            url: Some(draft.url),
            isbn: Some(draft.isbn),
        }
    }

    pub fn into_patch(self) -> (BookId, BookPatch) {
        let patch = BookPatch {
            title: self.title.map(BookTitle::new),
            subtitle: self.subtitle.map(BookSubtitle::new),
            author: self.author.map(BookAuthor::new),
            publisher: self.publisher.map(BookPublisher::new),
            publication_year: self.publication_year.map(PublicationYear::new),
            language: self.language.map(BookLanguage::new),
            pages: self.pages.map(PageCount::new),
            price: self.price.map(BookPrice::new),
            cover_image: self.cover_image.map(CoverImage::new),
            url: self.url.map(ExternalUrl::new),
            isbn: self.isbn.map(Isbn::new),
        };
        (BookId::new(self.id), patch)
    }
}

pub struct DeleteBookDto {
    pub id: String,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CatalogLoad {
    Restored { books: usize, dropped: usize },
    Empty,
    Recovered,
}
