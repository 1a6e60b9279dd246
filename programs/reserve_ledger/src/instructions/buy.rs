use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct Buy<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

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

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = mint,
        associated_token::authority = buyer,
        associated_token::token_program = token_program,
    )]
    pub buyer_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl Buy<'_> {
    pub fn handler(ctx: Context<Self>, lamports: u64) -> Result<()> {
        let book = read_book(
            ctx.accounts.mint.supply,
            &ctx.accounts.reserve_vault.to_account_info(),
        )?;
        let plan = book.plan_buy(lamports)?;

        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.buyer.to_account_info(),
                    to: ctx.accounts.reserve_vault.to_account_info(),
                },
            ),
            plan.lamports,
        )?;

        let ledger_seeds = ctx.accounts.ledger.signer_seeds();
        let ledger_signer = &[&ledger_seeds[..]];

        token_interface::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: ctx.accounts.buyer_token_account.to_account_info(),
                    authority: ctx.accounts.ledger.to_account_info(),
                },
                ledger_signer,
            ),
            plan.tokens,
        )?;

        ctx.accounts.ledger.record_purchase(plan.lamports, plan.tokens)?;

        ctx.accounts.mint.reload()?;
        require!(
            ctx.accounts.mint.supply == plan.post.supply,
            ReserveLedgerError::StateVerificationFailed
        );

        let clock = Clock::get()?;
        emit_cpi!(TokensPurchasedEvent {
            buyer: ctx.accounts.buyer.key(),
            lamports: plan.lamports,
            tokens: plan.tokens,
            total_supply: plan.post.supply,
            reserve: plan.post.reserve,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
