use vodca::References;

use crate::entity::{Book, BookDraft, BookId};

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct SeedBook {
    isbn13: String,
    title: String,
    subtitle: String,
    image: String,
    price: String,
    url: String,
}

impl SeedBook {
    pub fn new(
        isbn13: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image: impl Into<String>,
        price: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            isbn13: isbn13.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            image: image.into(),
            price: price.into(),
            url: url.into(),
        }
    }

    /// Identity is the ISBN-13, or `book-<index>` when the seed has none.
    pub fn identity(&self, index: usize) -> BookId {
        if self.isbn13.trim().is_empty() {
            BookId::new(format!("book-{index}"))
        } else {
            BookId::new(self.isbn13.clone())
        }
    }

    pub fn into_book(self, index: usize) -> Book {
        let id = self.identity(index);
        let draft = BookDraft {
            title: self.title,
            subtitle: self.subtitle,
            price: self.price,
            cover_image: self.image,
            url: self.url,
            isbn: self.isbn13,
            ..Default::default()
        };
        Book::new(id, draft)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{BookId, SeedBook};

    #[test]
    fn seed_maps_image_and_isbn() {
        let seed = SeedBook::new("9781617294136", "Rust in Action", "", "cover.png", "$39.99", "u");
        let book = seed.into_book(0);
        assert_eq!(book.id(), &BookId::new("9781617294136"));
        assert_eq!(book.cover_image().as_ref(), "cover.png");
        assert_eq!(book.isbn().as_ref(), "9781617294136");
        assert_eq!(book.author().as_ref(), "");
    }

    #[test]
    fn seed_without_isbn_uses_index() {
        let seed = SeedBook::new("", "Untracked", "", "", "", "");
        assert_eq!(seed.identity(3), BookId::new("book-3"));
    }
}
