mod book;
mod catalog;
mod filter;
mod ledger;
mod loan;
mod seed;
mod similar;

pub use self::{book::*, catalog::*, filter::*, ledger::*, loan::*, seed::*, similar::*};
