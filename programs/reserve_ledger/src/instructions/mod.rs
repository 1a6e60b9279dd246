use super::*;

pub mod admin;
pub mod initialize_ledger;
pub mod buy;
pub mod sell_back;
pub mod receive_unconditional_deposit;
pub mod read_reserve;

pub use admin::*;
pub use initialize_ledger::*;
pub use buy::*;
pub use sell_back::*;
pub use receive_unconditional_deposit::*;
pub use read_reserve::*;
