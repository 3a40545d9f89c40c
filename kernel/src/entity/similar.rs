use vodca::{AsRefln, Fromln, References};

use crate::entity::Book;

pub const SIMILAR_BOOKS_LIMIT: usize = 6;

#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct SimilarQuery(String);

impl SimilarQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    /// Title, else author, else publisher, else empty.
    pub fn for_book(book: &Book) -> Self {
        let candidates: [&String; 3] = [
            book.title().as_ref(),
            book.author().as_ref(),
            book.publisher().as_ref(),
        ];
        let query = candidates
            .into_iter()
            .find(|candidate| !candidate.is_empty())
            .cloned()
            .unwrap_or_default();
        Self(query)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct SimilarBook {
    title: String,
    subtitle: String,
    price: String,
    image: String,
    url: String,
    isbn13: String,
}

impl SimilarBook {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
        url: impl Into<String>,
        isbn13: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            price: price.into(),
            image: image.into(),
            url: url.into(),
            isbn13: isbn13.into(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{Book, BookDraft, BookId, SimilarQuery};

    fn book(title: &str, author: &str, publisher: &str) -> Book {
        let draft = BookDraft {
            title: title.to_string(),
            author: author.to_string(),
            publisher: publisher.to_string(),
            ..Default::default()
        };
        Book::new(BookId::new("x"), draft)
    }

    #[test]
    fn query_prefers_title_then_author_then_publisher() {
        assert_eq!(SimilarQuery::for_book(&book("Dune", "Herbert", "Ace")).as_str(), "Dune");
        assert_eq!(SimilarQuery::for_book(&book("", "Herbert", "Ace")).as_str(), "Herbert");
        assert_eq!(SimilarQuery::for_book(&book("", "", "Ace")).as_str(), "Ace");
        assert!(SimilarQuery::for_book(&book("", "", "")).is_empty());
    }
}
