use crate::entity::{Book, BookId, BookPatch, Catalog};
use crate::event::Applier;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BookEvent {
    Create { book: Book },
    Import { books: Vec<Book> },
    Update { id: BookId, patch: BookPatch },
    Delete { id: BookId },
}

impl Applier<BookEvent> for Catalog {
    fn apply(&mut self, event: BookEvent) {
        match event {
            BookEvent::Create { book } => self.prepend(vec![book]),
            BookEvent::Import { books } => self.prepend(books),
            BookEvent::Update { id, patch } => {
                if let Some(book) = self.find_mut(&id) {
                    patch.merge_into(book);
                }
            }
            BookEvent::Delete { id } => self.remove(&id),
        }
    }
}
