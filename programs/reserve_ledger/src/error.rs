use super::*;

#[error_code]
pub enum ReserveLedgerError {
    #[msg("Caller is not the ledger owner")]
    Unauthorized,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Insufficient token balance to sell back")]
    InsufficientBalance,
    #[msg("Reserve does not hold enough lamports for the payout")]
    InsufficientReserve,
    #[msg("Exceeds maximum supply")]
    SupplyCapExceeded,
    #[msg("Amount exceeds withdrawable limit")]
    ExceedsWithdrawableLimit,
    #[msg("Math Overflow Error")]
    MathOverflow,
    #[msg("New owner cannot be the default address")]
    InvalidOwner,
    #[msg("Mint does not belong to this ledger")]
    InvalidMint,
    #[msg("Reserve vault does not belong to this ledger")]
    InvalidVault,
    #[msg("Metadata account does not match the ledger mint")]
    InvalidMetadata,
    #[msg("Post-state verification failed")]
    StateVerificationFailed,
    #[msg("Name is too long")]
    NameTooLong,
    #[msg("Symbol is too long")]
    SymbolTooLong,
    #[msg("URI is too long")]
    UriTooLong,
}
