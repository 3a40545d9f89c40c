mod book;
mod loan;

pub use self::{book::*, loan::*};

pub trait Applier<Event> {
    fn apply(&mut self, event: Event);
}
