use super::*;

/// Snapshot of the two quantities the reserve accounting depends on: token
/// supply (read from the mint) and reserve lamports (read from the vault).
///
/// Every mutating instruction asks the book for a plan first. A plan is only
/// returned when all checks pass, and it carries the post-state and the
/// outbound lamport transfer. Handlers commit token/ledger state from the plan
/// and issue the transfer last, so nothing is paid out against a half-applied
/// state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveBook {
    pub supply: u64,
    pub reserve: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnerMintPlan {
    pub amount: u64,
    pub post: ReserveBook,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuyPlan {
    pub lamports: u64,
    pub tokens: u64,
    pub post: ReserveBook,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellBackPlan {
    pub amount: u64,
    pub payout: u64,
    pub post: ReserveBook,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WithdrawPlan {
    pub amount: u64,
    pub post: ReserveBook,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositPlan {
    pub lamports: u64,
    pub post: ReserveBook,
}

impl ReserveBook {
    pub fn new(supply: u64, reserve: u64) -> Self {
        Self { supply, reserve }
    }

    pub fn withdrawable_surplus(&self) -> Result<u64> {
        calculate_withdrawable_surplus(self.reserve, self.supply)
    }

    pub fn has_capacity_for(&self, additional: u64) -> bool {
        fits_supply_cap(self.supply, additional as u128)
    }

    /// `reserve >= supply * SELL_RATE`
    pub fn is_sufficient(&self) -> Result<bool> {
        Ok(self.reserve as u128 >= pledged_reserve(self.supply)?)
    }

    /// Owner-directed minting. Trusted path: no cap and no deposit.
    pub fn plan_owner_mint(&self, amount: u64) -> Result<OwnerMintPlan> {
        require!(amount > 0, ReserveLedgerError::InvalidAmount);

        let supply = self.supply.safe_add(amount)?;

        Ok(OwnerMintPlan {
            amount,
            post: Self { supply, ..*self },
        })
    }

    pub fn plan_buy(&self, lamports: u64) -> Result<BuyPlan> {
        require!(lamports > 0, ReserveLedgerError::InvalidAmount);

        let tokens = tokens_for_lamports(lamports)?;
        require!(
            fits_supply_cap(self.supply, tokens),
            ReserveLedgerError::SupplyCapExceeded
        );

        // bounded by MAX_SUPPLY from here on
        let tokens = tokens as u64;
        let supply = self.supply.safe_add(tokens)?;
        let reserve = self.reserve.safe_add(lamports)?;

        Ok(BuyPlan {
            lamports,
            tokens,
            post: Self { supply, reserve },
        })
    }

    pub fn plan_sell_back(&self, amount: u64, holder_balance: u64) -> Result<SellBackPlan> {
        require!(amount > 0, ReserveLedgerError::InvalidAmount);

        let payout = payout_for_tokens(amount)?;
        require!(
            payout <= self.reserve as u128,
            ReserveLedgerError::InsufficientReserve
        );
        require!(
            holder_balance >= amount,
            ReserveLedgerError::InsufficientBalance
        );

        let payout = payout as u64;
        let supply = self.supply.safe_sub(amount)?;
        let reserve = self.reserve.safe_sub(payout)?;

        Ok(SellBackPlan {
            amount,
            payout,
            post: Self { supply, reserve },
        })
    }

    pub fn plan_withdraw(&self, amount: u64) -> Result<WithdrawPlan> {
        require!(amount > 0, ReserveLedgerError::InvalidAmount);
        require!(
            amount <= self.withdrawable_surplus()?,
            ReserveLedgerError::ExceedsWithdrawableLimit
        );

        let reserve = self.reserve.safe_sub(amount)?;

        Ok(WithdrawPlan {
            amount,
            post: Self { reserve, ..*self },
        })
    }

    pub fn plan_deposit(&self, lamports: u64) -> Result<DepositPlan> {
        require!(lamports > 0, ReserveLedgerError::InvalidAmount);

        let reserve = self.reserve.safe_add(lamports)?;

        Ok(DepositPlan {
            lamports,
            post: Self { reserve, ..*self },
        })
    }
}
