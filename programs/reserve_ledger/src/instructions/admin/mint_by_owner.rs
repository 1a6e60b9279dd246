use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct MintByOwner<'info> {
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
        mut,
        address = ledger.mint @ ReserveLedgerError::InvalidMint
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        seeds = [RESERVE_VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
    )]
    pub reserve_vault: SystemAccount<'info>,

    /// CHECK: Any wallet may receive owner-minted tokens
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = mint,
        associated_token::authority = recipient,
        associated_token::token_program = token_program,
    )]
    pub recipient_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl MintByOwner<'_> {
    pub fn handler(ctx: Context<Self>, amount: u64) -> Result<()> {
        let book = read_book(
            ctx.accounts.mint.supply,
            &ctx.accounts.reserve_vault.to_account_info(),
        )?;
        let plan = book.plan_owner_mint(amount)?;

        let ledger_seeds = ctx.accounts.ledger.signer_seeds();
        let ledger_signer = &[&ledger_seeds[..]];

        token_interface::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to: ctx.accounts.recipient_token_account.to_account_info(),
                    authority: ctx.accounts.ledger.to_account_info(),
                },
                ledger_signer,
            ),
            plan.amount,
        )?;

        ctx.accounts.ledger.record_owner_mint(plan.amount)?;

        ctx.accounts.mint.reload()?;
        require!(
            ctx.accounts.mint.supply == plan.post.supply,
            ReserveLedgerError::StateVerificationFailed
        );

        let clock = Clock::get()?;
        emit_cpi!(OwnerMintedEvent {
            owner: ctx.accounts.owner.key(),
            recipient: ctx.accounts.recipient.key(),
            amount: plan.amount,
            total_supply: plan.post.supply,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
