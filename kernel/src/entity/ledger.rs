use std::collections::HashSet;

use serde::Serialize;
use time::Date;
use vodca::References;

use crate::entity::{Book, BookId, Borrower, Catalog, DueDate, Loan, LoanWeeks};
use crate::event::{Applier, LoanEvent};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanStatus {
    Available,
    OnLoan,
}

pub fn available_books<'a>(catalog: &'a [Book], loans: &[Loan]) -> Vec<&'a Book> {
    let loaned = loans.iter().map(Loan::book_id).collect::<HashSet<_>>();
    catalog
        .iter()
        .filter(|book| !loaned.contains(book.id()))
        .collect()
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct LoanLedger {
    loans: Vec<Loan>,
}

impl LoanLedger {
    pub fn new(loans: Vec<Loan>) -> Self {
        Self { loans }
    }

    pub fn available_books<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Book> {
        available_books(catalog.books(), &self.loans)
    }

    /// Appends a loan due `weeks` after `today`. Neither the week range nor
    /// the book's availability is checked here.
    pub fn create_loan(
        &mut self,
        borrower: Borrower,
        book_id: BookId,
        weeks: LoanWeeks,
        today: Date,
    ) -> Loan {
        let loan = Loan::lend(book_id, borrower, weeks, today);
        self.apply(LoanEvent::Lent { loan: loan.clone() });
        loan
    }

    pub fn status(&self, id: &BookId) -> LoanStatus {
        if self.loans.iter().any(|loan| loan.book_id() == id) {
            LoanStatus::OnLoan
        } else {
            LoanStatus::Available
        }
    }

    pub fn views(&self, catalog: &Catalog) -> Vec<LoanView> {
        self.loans
            .iter()
            .map(|loan| LoanView::resolve(loan, catalog))
            .collect()
    }

    pub(crate) fn push(&mut self, loan: Loan) {
        self.loans.push(loan);
    }
}

#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct LoanView {
    book_id: BookId,
    book_label: String,
    borrower: Borrower,
    due_date: DueDate,
    dangling: bool,
}

impl LoanView {
    pub fn resolve(loan: &Loan, catalog: &Catalog) -> Self {
        let book = catalog.find(loan.book_id());
        let book_label = match book {
            Some(book) => book.title().as_ref().clone(),
            None => loan.book_id().as_str().to_string(),
        };
        Self {
            book_id: loan.book_id().clone(),
            book_label,
            borrower: loan.borrower().clone(),
            due_date: *loan.due_date(),
            dangling: book.is_none(),
        }
    }
}
