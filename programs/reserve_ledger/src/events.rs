use super::*;

#[event]
pub struct LedgerInitializedEvent {
    pub owner: Pubkey,
    pub ledger: Pubkey,
    pub mint: Pubkey,
    pub reserve_vault: Pubkey,
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub buy_rate: u64,
    pub sell_rate: u64,
    pub timestamp: i64,
}

#[event]
pub struct OwnerMintedEvent {
    pub owner: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensPurchasedEvent {
    pub buyer: Pubkey,
    pub lamports: u64,
    pub tokens: u64,
    pub total_supply: u64,
    pub reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct TokensSoldBackEvent {
    pub holder: Pubkey,
    pub amount: u64,
    pub payout: u64,
    pub total_supply: u64,
    pub reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct FundsWithdrawnEvent {
    pub owner: Pubkey,
    pub amount: u64,
    pub reserve: u64,
    pub remaining_surplus: u64,
    pub timestamp: i64,
}

#[event]
pub struct ReserveDepositedEvent {
    pub depositor: Pubkey,
    pub lamports: u64,
    pub reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}
