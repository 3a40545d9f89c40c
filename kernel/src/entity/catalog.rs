use std::collections::HashSet;

use time::OffsetDateTime;
use vodca::References;

use crate::entity::{Book, BookId};

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct Catalog {
    books: Vec<Book>,
    selected: Option<BookId>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
            selected: None,
        }
    }

    /// Builds a catalog from a stored snapshot, keeping the first record of
    /// every identity. Returns the catalog and the number of dropped records.
    pub fn from_snapshot(books: Vec<Book>) -> (Self, usize) {
        let total = books.len();
        let mut seen = HashSet::with_capacity(total);
        let books = books
            .into_iter()
            .filter(|book| seen.insert(book.id().clone()))
            .collect::<Vec<_>>();
        let dropped = total - books.len();
        (Self::new(books), dropped)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub fn contains(&self, id: &BookId) -> bool {
        self.find(id).is_some()
    }

    pub fn fresh_id(&self, at: OffsetDateTime) -> BookId {
        let base = BookId::from_timestamp(at);
        if !self.contains(&base) {
            return base;
        }
        let mut suffix = 1;
        loop {
            let candidate = base.with_suffix(suffix);
            if !self.contains(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    pub fn toggle_selection(&mut self, id: BookId) {
        self.selected = match self.selected.take() {
            Some(current) if current == id => None,
            _ => Some(id),
        };
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.selected.as_ref().and_then(|id| self.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: &BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id() == id)
    }

    pub(crate) fn prepend(&mut self, books: Vec<Book>) {
        self.books.splice(0..0, books);
    }

    pub(crate) fn remove(&mut self, id: &BookId) {
        self.books.retain(|book| book.id() != id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
    }
}
