use super::*;

pub mod mint_by_owner;
pub mod withdraw_funds;
pub mod transfer_ownership;

pub use mint_by_owner::*;
pub use withdraw_funds::*;
pub use transfer_ownership::*;
