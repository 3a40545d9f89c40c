use crate::entity::{
    Book, BookAuthor, BookLanguage, BookPrice, BookPublisher, BookSubtitle, BookTitle, CoverImage,
    ExternalUrl, Isbn, PageCount, PublicationYear,
};

/// Partial overwrite of a book. `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BookPatch {
    pub title: Option<BookTitle>,
    pub subtitle: Option<BookSubtitle>,
    pub author: Option<BookAuthor>,
    pub publisher: Option<BookPublisher>,
    pub publication_year: Option<PublicationYear>,
    pub language: Option<BookLanguage>,
    pub pages: Option<PageCount>,
    pub price: Option<BookPrice>,
    pub cover_image: Option<CoverImage>,
    pub url: Option<ExternalUrl>,
    pub isbn: Option<Isbn>,
}

impl BookPatch {
    pub(crate) fn merge_into(self, book: &mut Book) {
        let BookPatch {
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
        } = self;
        book.substitute(|book| {
            if let Some(title) = title {
                *book.title = title;
            }
            if let Some(subtitle) = subtitle {
                *book.subtitle = subtitle;
            }
            if let Some(author) = author {
                *book.author = author;
            }
            if let Some(publisher) = publisher {
                *book.publisher = publisher;
            }
            if let Some(publication_year) = publication_year {
                *book.publication_year = publication_year;
            }
            if let Some(language) = language {
                *book.language = language;
            }
            if let Some(pages) = pages {
                *book.pages = pages;
            }
            if let Some(price) = price {
                *book.price = price;
            }
            if let Some(cover_image) = cover_image {
                *book.cover_image = cover_image;
            }
            if let Some(url) = url {
                *book.url = url;
            }
            if let Some(isbn) = isbn {
                *book.isbn = isbn;
            }
        });
    }
}
