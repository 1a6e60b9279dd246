use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::metadata::{
    create_metadata_accounts_v3,
    mpl_token_metadata::types::DataV2,
    CreateMetadataAccountsV3,
    Metadata,
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        self,
        Burn,
        Mint,
        MintTo,
        TokenAccount,
        TokenInterface,
    },
};
use mpl_token_metadata::accounts::Metadata as MetadataMpl;
use static_assertions::const_assert_eq;
use std::panic::Location;

pub mod error;
pub mod instructions;
pub mod state;
pub mod events;
pub mod constants;
pub mod math;

pub use error::ReserveLedgerError;
pub use instructions::*;
pub use state::*;
pub use events::*;
pub use constants::*;
pub use math::*;

declare_id!("APGDsuPfdjejsSLhN8LXsbo9HPDtKpX1gxAuNM1DuEPE");

#[program]
pub mod reserve_ledger {
    use super::*;

    /// Create the ledger, its token mint, the lamport reserve vault and the
    /// token metadata. The signer becomes the owner.
    #[access_control(InitializeLedger::validate(&args))]
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, args: LedgerMetadataArgs) -> Result<()> {
        InitializeLedger::handler(ctx, args)
    }

    pub fn mint_by_owner(ctx: Context<MintByOwner>, amount: u64) -> Result<()> {
        MintByOwner::handler(ctx, amount)
    }

    pub fn buy(ctx: Context<Buy>, lamports: u64) -> Result<()> {
        Buy::handler(ctx, lamports)
    }

    pub fn sell_back(ctx: Context<SellBack>, amount: u64) -> Result<()> {
        SellBack::handler(ctx, amount)
    }

    pub fn withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
        handle_withdraw_funds(ctx, amount)
    }

    pub fn receive_unconditional_deposit(
        ctx: Context<ReceiveUnconditionalDeposit>,
        lamports: u64,
    ) -> Result<()> {
        ReceiveUnconditionalDeposit::handler(ctx, lamports)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }

    /// Lamports the owner may currently withdraw.
    pub fn withdrawable_surplus(ctx: Context<ReadReserve>) -> Result<u64> {
        ReadReserve::withdrawable_surplus(ctx)
    }

    /// Whether `additional` purchased tokens would still fit under `MAX_SUPPLY`.
    pub fn check_max_supply(ctx: Context<ReadReserve>, additional: u64) -> Result<bool> {
        ReadReserve::check_max_supply(ctx, additional)
    }
}
