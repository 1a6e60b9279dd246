use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct SellBack<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        mut,
        address = ledger.mint @ ReserveLedgerError::InvalidMint
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [RESERVE_VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
    )]
    pub reserve_vault: SystemAccount<'info>,

    /// Absent when the holder never opened a token account, which reads as
    /// a zero balance.
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = holder,
        associated_token::token_program = token_program,
    )]
    pub holder_token_account: Option<Box<InterfaceAccount<'info, TokenAccount>>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl SellBack<'_> {
    /// Plans a sell-back for a holder whose token account may not exist.
    pub fn plan(book: &ReserveBook, amount: u64, holder_balance: Option<u64>) -> Result<SellBackPlan> {
        book.plan_sell_back(amount, holder_balance.unwrap_or(0))
    }

    /// Burns `amount` from the holder and pays `amount * SELL_RATE` lamports
    /// out of the reserve. Supply and ledger stats are settled before the
    /// payout leaves the vault.
    pub fn handler(ctx: Context<Self>, amount: u64) -> Result<()> {
        let book = read_book(
            ctx.accounts.mint.supply,
            &ctx.accounts.reserve_vault.to_account_info(),
        )?;
        let holder_balance = ctx
            .accounts
            .holder_token_account
            .as_ref()
            .map(|account| account.amount);
        let plan = Self::plan(&book, amount, holder_balance)?;

        // a successful plan implies a non-zero balance
        let holder_token_account = ctx
            .accounts
            .holder_token_account
            .as_ref()
            .ok_or(ReserveLedgerError::InsufficientBalance)?;

        token_interface::burn(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Burn {
                    mint: ctx.accounts.mint.to_account_info(),
                    from: holder_token_account.to_account_info(),
                    authority: ctx.accounts.holder.to_account_info(),
                },
            ),
            plan.amount,
        )?;

        ctx.accounts.ledger.record_redemption(plan.amount, plan.payout)?;

        ctx.accounts.mint.reload()?;
        require!(
            ctx.accounts.mint.supply == plan.post.supply,
            ReserveLedgerError::StateVerificationFailed
        );

        let ledger_key = ctx.accounts.ledger.key();
        let vault_seeds = &[
            RESERVE_VAULT_SEED,
            ledger_key.as_ref(),
            &[ctx.accounts.ledger.vault_bump],
        ];
        let vault_signer = &[&vault_seeds[..]];

        system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.reserve_vault.to_account_info(),
                    to: ctx.accounts.holder.to_account_info(),
                },
                vault_signer,
            ),
            plan.payout,
        )?;

        msg!("Sold back {} tokens for {} lamports", plan.amount, plan.payout);

        let clock = Clock::get()?;
        emit_cpi!(TokensSoldBackEvent {
            holder: ctx.accounts.holder.key(),
            amount: plan.amount,
            payout: plan.payout,
            total_supply: plan.post.supply,
            reserve: plan.post.reserve,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
