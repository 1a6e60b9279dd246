use super::*;

// PDA seeds
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const MINT_SEED: &[u8] = b"mint";
pub const RESERVE_VAULT_SEED: &[u8] = b"reserve_vault";

/// Decimals of the ledger token. Matches lamports per SOL so that one whole
/// token and one whole native unit share the same scale.
pub const TOKEN_DECIMALS: u8 = 9;
pub const ONE_TOKEN: u64 = 10u64.pow(TOKEN_DECIMALS as u32);

/// Hard cap on purchased supply, in token base units (one million tokens).
pub const MAX_SUPPLY: u64 = 1_000_000 * ONE_TOKEN;

/// Token base units minted per lamport deposited through `buy`.
pub const BUY_RATE: u64 = 1_000;

/// Lamports paid out per token base unit redeemed through `sell_back`.
pub const SELL_RATE: u64 = 500_000;

// Metaplex metadata limits
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;

pub const DEFAULT_TOKEN_NAME: &str = "DeeVee";
pub const DEFAULT_TOKEN_SYMBOL: &str = "DV";

const_assert_eq!(MAX_SUPPLY, 1_000_000_000_000_000);
