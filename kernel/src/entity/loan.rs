mod borrower;
mod due_date;
mod weeks;

pub use self::{borrower::*, due_date::*, weeks::*};
use time::Date;
use vodca::References;

use crate::entity::BookId;

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Loan {
    book_id: BookId,
    borrower: Borrower,
    due_date: DueDate,
}

impl Loan {
    pub fn new(book_id: BookId, borrower: Borrower, due_date: DueDate) -> Self {
        Self {
            book_id,
            borrower,
            due_date,
        }
    }

    pub fn lend(book_id: BookId, borrower: Borrower, weeks: LoanWeeks, today: Date) -> Self {
        Self::new(book_id, borrower, DueDate::after(today, weeks))
    }
}
