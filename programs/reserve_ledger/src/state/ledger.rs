use super::*;

#[account]
#[derive(InitSpace, Debug)]
pub struct Ledger {
    pub owner: Pubkey,          // Only key allowed to owner-mint, withdraw and hand over ownership
    pub mint: Pubkey,           // SPL mint whose supply is the ledger supply
    pub reserve_vault: Pubkey,  // System-owned PDA holding the lamport reserve
    pub bump: u8,
    pub mint_bump: u8,
    pub vault_bump: u8,
    pub total_owner_minted: u128,   // Token base units minted without a deposit
    pub total_purchased: u128,      // Token base units minted through buy
    pub total_redeemed: u128,       // Token base units burned through sell_back
    pub total_deposited: u128,      // Lamports received through buy and explicit deposits
    pub total_paid_out: u128,       // Lamports paid to redeeming holders
    pub total_withdrawn: u128,      // Lamports withdrawn by the owner
    pub _padding: [u8; 64],
}

const_assert_eq!(Ledger::INIT_SPACE, 259);

impl Ledger {
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        mint: Pubkey,
        reserve_vault: Pubkey,
        bump: u8,
        mint_bump: u8,
        vault_bump: u8,
    ) {
        self.owner = owner;
        self.mint = mint;
        self.reserve_vault = reserve_vault;
        self.bump = bump;
        self.mint_bump = mint_bump;
        self.vault_bump = vault_bump;
        self.total_owner_minted = 0;
        self.total_purchased = 0;
        self.total_redeemed = 0;
        self.total_deposited = 0;
        self.total_paid_out = 0;
        self.total_withdrawn = 0;
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn set_owner(&mut self, new_owner: Pubkey) -> Result<()> {
        require!(new_owner != Pubkey::default(), ReserveLedgerError::InvalidOwner);
        self.owner = new_owner;
        Ok(())
    }

    pub fn record_owner_mint(&mut self, amount: u64) -> Result<()> {
        self.total_owner_minted = self.total_owner_minted.safe_add(amount as u128)?;
        Ok(())
    }

    pub fn record_purchase(&mut self, lamports: u64, tokens: u64) -> Result<()> {
        self.total_deposited = self.total_deposited.safe_add(lamports as u128)?;
        self.total_purchased = self.total_purchased.safe_add(tokens as u128)?;
        Ok(())
    }

    pub fn record_deposit(&mut self, lamports: u64) -> Result<()> {
        self.total_deposited = self.total_deposited.safe_add(lamports as u128)?;
        Ok(())
    }

    pub fn record_redemption(&mut self, tokens: u64, payout: u64) -> Result<()> {
        self.total_redeemed = self.total_redeemed.safe_add(tokens as u128)?;
        self.total_paid_out = self.total_paid_out.safe_add(payout as u128)?;
        Ok(())
    }

    pub fn record_withdrawal(&mut self, lamports: u64) -> Result<()> {
        self.total_withdrawn = self.total_withdrawn.safe_add(lamports as u128)?;
        Ok(())
    }

    /// Signer seeds for CPIs where the ledger PDA is the mint authority.
    pub fn signer_seeds(&self) -> [&[u8]; 2] {
        [LEDGER_SEED, std::slice::from_ref(&self.bump)]
    }
}

/// Reserve held by a vault account, net of its rent-exempt floor.
pub fn vault_reserve(vault: &AccountInfo) -> Result<u64> {
    let rent_floor = Rent::get()?.minimum_balance(0);
    Ok(reserve_above_floor(vault.lamports(), rent_floor))
}

/// Current book as seen by the instruction: mint supply and vault reserve.
pub fn read_book(supply: u64, vault: &AccountInfo) -> Result<ReserveBook> {
    Ok(ReserveBook::new(supply, vault_reserve(vault)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(owner: Pubkey) -> Ledger {
        let mut ledger = Ledger {
            owner: Pubkey::default(),
            mint: Pubkey::default(),
            reserve_vault: Pubkey::default(),
            bump: 0,
            mint_bump: 0,
            vault_bump: 0,
            total_owner_minted: 0,
            total_purchased: 0,
            total_redeemed: 0,
            total_deposited: 0,
            total_paid_out: 0,
            total_withdrawn: 0,
            _padding: [0u8; 64],
        };
        ledger.initialize(owner, Pubkey::new_unique(), Pubkey::new_unique(), 254, 253, 252);
        ledger
    }

    #[test]
    fn owner_check_compares_stored_key() {
        let owner = Pubkey::new_unique();
        let ledger = ledger(owner);

        assert!(ledger.is_owner(&owner));
        assert!(!ledger.is_owner(&Pubkey::new_unique()));
    }

    #[test]
    fn ownership_moves_to_new_key() {
        let owner = Pubkey::new_unique();
        let next = Pubkey::new_unique();
        let mut ledger = ledger(owner);

        ledger.set_owner(next).unwrap();
        assert!(ledger.is_owner(&next));
        assert!(!ledger.is_owner(&owner));
    }

    #[test]
    fn default_key_can_not_take_ownership() {
        let owner = Pubkey::new_unique();
        let mut ledger = ledger(owner);

        let invalid: anchor_lang::error::Error = ReserveLedgerError::InvalidOwner.into();
        assert_eq!(ledger.set_owner(Pubkey::default()).unwrap_err(), invalid);
        assert!(ledger.is_owner(&owner));
    }

    #[test]
    fn statistics_accumulate() {
        let mut ledger = ledger(Pubkey::new_unique());

        ledger.record_purchase(10, 10 * BUY_RATE).unwrap();
        ledger.record_deposit(5).unwrap();
        ledger.record_owner_mint(1_000).unwrap();
        ledger.record_redemption(500, 500 * SELL_RATE).unwrap();
        ledger.record_withdrawal(3).unwrap();

        assert_eq!(ledger.total_deposited, 15);
        assert_eq!(ledger.total_purchased, 10_000);
        assert_eq!(ledger.total_owner_minted, 1_000);
        assert_eq!(ledger.total_redeemed, 500);
        assert_eq!(ledger.total_paid_out, 250_000_000);
        assert_eq!(ledger.total_withdrawn, 3);
    }

    #[test]
    fn signer_seeds_carry_bump() {
        let ledger = ledger(Pubkey::new_unique());
        let seeds = ledger.signer_seeds();
        assert_eq!(seeds[0], LEDGER_SEED);
        assert_eq!(seeds[1], &[254u8][..]);
    }
}
