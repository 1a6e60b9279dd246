use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_owner(&owner.key()) @ ReserveLedgerError::Unauthorized,
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

pub fn handle_withdraw_funds(ctx: Context<WithdrawFunds>, amount: u64) -> Result<()> {
    let book = read_book(
        ctx.accounts.mint.supply,
        &ctx.accounts.reserve_vault.to_account_info(),
    )?;
    let plan = book.plan_withdraw(amount)?;

    ctx.accounts.ledger.record_withdrawal(plan.amount)?;

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
                to: ctx.accounts.owner.to_account_info(),
            },
            vault_signer,
        ),
        plan.amount,
    )?;

    require!(
        vault_reserve(&ctx.accounts.reserve_vault.to_account_info())? == plan.post.reserve,
        ReserveLedgerError::StateVerificationFailed
    );

    msg!("Owner withdrew {} lamports from the reserve", plan.amount);

    let clock = Clock::get()?;
    emit_cpi!(FundsWithdrawnEvent {
        owner: ctx.accounts.owner.key(),
        amount: plan.amount,
        reserve: plan.post.reserve,
        remaining_surplus: plan.post.withdrawable_surplus()?,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
