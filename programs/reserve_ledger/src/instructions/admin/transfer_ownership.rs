use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
        constraint = ledger.is_owner(&owner.key()) @ ReserveLedgerError::Unauthorized,
    )]
    pub ledger: Box<Account<'info, Ledger>>,
}

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let previous_owner = ctx.accounts.ledger.owner;
    ctx.accounts.ledger.set_owner(new_owner)?;

    let clock = Clock::get()?;
    emit_cpi!(OwnershipTransferredEvent {
        previous_owner,
        new_owner,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
