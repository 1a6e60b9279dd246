use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct ReceiveUnconditionalDeposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        address = ledger.mint @ ReserveLedgerError::InvalidMint
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [RESERVE_VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
    )]
    pub reserve_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl ReceiveUnconditionalDeposit<'_> {
    /// Adds lamports to the reserve without minting anything in return.
    pub fn handler(ctx: Context<Self>, lamports: u64) -> Result<()> {
        let book = read_book(
            ctx.accounts.mint.supply,
            &ctx.accounts.reserve_vault.to_account_info(),
        )?;
        let plan = book.plan_deposit(lamports)?;

        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.depositor.to_account_info(),
                    to: ctx.accounts.reserve_vault.to_account_info(),
                },
            ),
            plan.lamports,
        )?;

        ctx.accounts.ledger.record_deposit(plan.lamports)?;

        let clock = Clock::get()?;
        emit_cpi!(ReserveDepositedEvent {
            depositor: ctx.accounts.depositor.key(),
            lamports: plan.lamports,
            reserve: plan.post.reserve,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
