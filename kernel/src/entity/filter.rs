use std::collections::BTreeSet;

use vodca::References;

use crate::entity::{Book, BookLanguage, BookPublisher};

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct BookFilter {
    publisher: Option<BookPublisher>,
    language: Option<BookLanguage>,
}

impl BookFilter {
    pub fn new(publisher: Option<BookPublisher>, language: Option<BookLanguage>) -> Self {
        Self {
            publisher: publisher.filter(|publisher| !publisher.is_empty()),
            language: language.filter(|language| !language.is_empty()),
        }
    }

    pub fn is_unset(&self) -> bool {
        self.publisher.is_none() && self.language.is_none()
    }

    pub fn matches(&self, book: &Book) -> bool {
        let publisher = self
            .publisher
            .as_ref()
            .map_or(true, |publisher| book.publisher() == publisher);
        let language = self
            .language
            .as_ref()
            .map_or(true, |language| book.language() == language);
        publisher && language
    }

    pub fn apply<'a>(&self, books: &'a [Book]) -> Vec<&'a Book> {
        books.iter().filter(|book| self.matches(book)).collect()
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct FilterOptions {
    publishers: Vec<BookPublisher>,
    languages: Vec<BookLanguage>,
}

impl FilterOptions {
    pub fn collect(books: &[Book]) -> Self {
        let publishers = books
            .iter()
            .map(Book::publisher)
            .filter(|publisher| !publisher.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>();
        let languages = books
            .iter()
            .map(Book::language)
            .filter(|language| !language.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>();
        Self {
            publishers: publishers.into_iter().collect(),
            languages: languages.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{
        Book, BookDraft, BookFilter, BookId, BookLanguage, BookPublisher, FilterOptions,
    };

    fn book(id: &str, publisher: &str, language: &str) -> Book {
        let draft = BookDraft {
            title: id.to_uppercase(),
            publisher: publisher.to_string(),
            language: language.to_string(),
            ..Default::default()
        };
        Book::new(BookId::new(id), draft)
    }

    fn shelf() -> Vec<Book> {
        vec![
            book("a", "Ace", "English"),
            book("b", "Penguin", "English"),
            book("c", "Ace", "French"),
            book("d", "", ""),
        ]
    }

    fn ids(books: Vec<&Book>) -> Vec<&str> {
        books.into_iter().map(|book| book.id().as_str()).collect()
    }

    #[test]
    fn unset_filter_returns_everything_in_order() {
        let books = shelf();
        let filter = BookFilter::default();
        assert!(filter.is_unset());
        assert_eq!(ids(filter.apply(&books)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_strings_count_as_unset() {
        let filter = BookFilter::new(Some(BookPublisher::new("")), Some(BookLanguage::new("")));
        assert!(filter.is_unset());
    }

    #[test]
    fn selectors_combine_with_and() {
        let books = shelf();
        let filter = BookFilter::new(Some(BookPublisher::new("Ace")), None);
        assert_eq!(ids(filter.apply(&books)), vec!["a", "c"]);

        let filter = BookFilter::new(
            Some(BookPublisher::new("Ace")),
            Some(BookLanguage::new("French")),
        );
        assert_eq!(ids(filter.apply(&books)), vec!["c"]);
    }

    #[test]
    fn unmatched_selector_yields_empty_view() {
        let books = shelf();
        let filter = BookFilter::new(None, Some(BookLanguage::new("Klingon")));
        assert!(filter.apply(&books).is_empty());
    }

    #[test]
    fn options_are_distinct_sorted_and_non_empty() {
        let options = FilterOptions::collect(&shelf());
        assert_eq!(
            options.publishers(),
            &vec![BookPublisher::new("Ace"), BookPublisher::new("Penguin")]
        );
        assert_eq!(
            options.languages(),
            &vec![BookLanguage::new("English"), BookLanguage::new("French")]
        );
    }
}
