use super::*;

#[derive(Accounts)]
pub struct ReadReserve<'info> {
    #[account(
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        address = ledger.mint @ ReserveLedgerError::InvalidMint
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        address = ledger.reserve_vault @ ReserveLedgerError::InvalidVault
    )]
    pub reserve_vault: SystemAccount<'info>,
}

impl ReadReserve<'_> {
    fn book(&self) -> Result<ReserveBook> {
        read_book(self.mint.supply, &self.reserve_vault.to_account_info())
    }

    pub fn withdrawable_surplus(ctx: Context<Self>) -> Result<u64> {
        let book = ctx.accounts.book()?;
        let surplus = book.withdrawable_surplus()?;

        msg!(
            "Reserve: {}, supply: {}, withdrawable surplus: {}",
            book.reserve,
            book.supply,
            surplus
        );

        Ok(surplus)
    }

    pub fn check_max_supply(ctx: Context<Self>, additional: u64) -> Result<bool> {
        let book = ctx.accounts.book()?;
        let fits = book.has_capacity_for(additional);

        msg!(
            "Supply: {}, additional: {}, within max supply: {}",
            book.supply,
            additional,
            fits
        );

        Ok(fits)
    }
}
