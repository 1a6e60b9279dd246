use super::*;

pub mod ledger;
pub mod book;

pub use ledger::*;
pub use book::*;
