mod book;
mod loan;
mod seed;
mod similar;

#[cfg(test)]
pub(crate) mod mock;

pub use self::{book::*, loan::*, seed::*, similar::*};
