mod book;
mod details;
mod filter;
mod form;
mod loan;
mod seed;

pub use self::{
    book::BookRouter, details::DetailsRouter, filter::FilterRouter, form::FormRouter,
    loan::LoanRouter, seed::SeedRouter,
};
