use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct LedgerMetadataArgs {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl LedgerMetadataArgs {
    /// Name and symbol, falling back to the ledger defaults when left empty.
    pub fn resolved(&self) -> (String, String) {
        let name = if self.name.is_empty() {
            DEFAULT_TOKEN_NAME.to_string()
        } else {
            self.name.clone()
        };
        let symbol = if self.symbol.is_empty() {
            DEFAULT_TOKEN_SYMBOL.to_string()
        } else {
            self.symbol.clone()
        };
        (name, symbol)
    }
}

#[event_cpi]
#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    #[account(
        init,
        payer = owner,
        seeds = [MINT_SEED, ledger.key().as_ref()],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = ledger,
        mint::token_program = token_program,
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [RESERVE_VAULT_SEED, ledger.key().as_ref()],
        bump,
    )]
    pub reserve_vault: SystemAccount<'info>,

    /// CHECK: Will be created via CPI to token metadata program
    #[account(
        mut,
        address = MetadataMpl::find_pda(&mint.key()).0 @ ReserveLedgerError::InvalidMetadata
    )]
    pub metadata: UncheckedAccount<'info>,

    pub token_metadata_program: Program<'info, Metadata>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl InitializeLedger<'_> {
    pub fn validate(args: &LedgerMetadataArgs) -> Result<()> {
        require!(
            args.name.len() <= MAX_NAME_LENGTH,
            ReserveLedgerError::NameTooLong
        );
        require!(
            args.symbol.len() <= MAX_SYMBOL_LENGTH,
            ReserveLedgerError::SymbolTooLong
        );
        require!(
            args.uri.len() <= MAX_URI_LENGTH,
            ReserveLedgerError::UriTooLong
        );

        Ok(())
    }

    pub fn handler(ctx: Context<Self>, args: LedgerMetadataArgs) -> Result<()> {
        let owner = ctx.accounts.owner.key();
        let mint = ctx.accounts.mint.key();
        let reserve_vault = ctx.accounts.reserve_vault.key();

        ctx.accounts.ledger.initialize(
            owner,
            mint,
            reserve_vault,
            ctx.bumps.ledger,
            ctx.bumps.mint,
            ctx.bumps.reserve_vault,
        );

        // Vault keeps its rent-exempt floor; reserve is counted above it.
        let rent_floor = Rent::get()?.minimum_balance(0);
        let shortfall = rent_floor.saturating_sub(ctx.accounts.reserve_vault.to_account_info().lamports());
        if shortfall > 0 {
            system_program::transfer(
                CpiContext::new(
                    ctx.accounts.system_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.owner.to_account_info(),
                        to: ctx.accounts.reserve_vault.to_account_info(),
                    },
                ),
                shortfall,
            )?;
        }

        let (name, symbol) = args.resolved();

        let ledger_seeds = ctx.accounts.ledger.signer_seeds();
        let ledger_signer = &[&ledger_seeds[..]];

        let cpi_program = ctx.accounts.token_metadata_program.to_account_info();
        let cpi_accounts = CreateMetadataAccountsV3 {
            metadata: ctx.accounts.metadata.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            mint_authority: ctx.accounts.ledger.to_account_info(),
            payer: ctx.accounts.owner.to_account_info(),
            update_authority: ctx.accounts.ledger.to_account_info(),
            system_program: ctx.accounts.system_program.to_account_info(),
            rent: ctx.accounts.rent.to_account_info(),
        };

        create_metadata_accounts_v3(
            CpiContext::new_with_signer(cpi_program, cpi_accounts, ledger_signer),
            DataV2 {
                name: name.clone(),
                symbol: symbol.clone(),
                uri: args.uri,
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            true,
            true,
            None,
        )?;

        msg!("Ledger initialized: {} ({}) owned by {}", name, symbol, owner);

        let clock = Clock::get()?;
        emit_cpi!(LedgerInitializedEvent {
            owner,
            ledger: ctx.accounts.ledger.key(),
            mint,
            reserve_vault,
            name,
            symbol,
            max_supply: MAX_SUPPLY,
            buy_rate: BUY_RATE,
            sell_rate: SELL_RATE,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
