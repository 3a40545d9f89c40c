mod catalog;
mod seed;
mod similar;

pub use self::{catalog::*, seed::*, similar::*};
