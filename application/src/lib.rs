mod form;
mod lookup;
mod session;

pub mod service;
pub mod transfer;

pub use self::{form::*, lookup::*, session::*};
