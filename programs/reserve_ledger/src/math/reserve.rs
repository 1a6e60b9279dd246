use super::*;

/// Token base units minted for a lamport deposit, before the supply cap is
/// applied. Computed in u128 so that an oversized deposit surfaces as a cap
/// breach rather than an overflow.
pub fn tokens_for_lamports(lamports: u64) -> Result<u128> {
    (lamports as u128).safe_mul(BUY_RATE as u128)
}

/// Lamports owed for redeeming `amount` token base units.
pub fn payout_for_tokens(amount: u64) -> Result<u128> {
    (amount as u128).safe_mul(SELL_RATE as u128)
}

/// Lamports pledged to honor every outstanding token at `SELL_RATE`.
pub fn pledged_reserve(supply: u64) -> Result<u128> {
    payout_for_tokens(supply)
}

/// `max(0, reserve - supply * SELL_RATE)`
pub fn calculate_withdrawable_surplus(reserve: u64, supply: u64) -> Result<u64> {
    let pledged = pledged_reserve(supply)?;
    let reserve = reserve as u128;

    if reserve <= pledged {
        return Ok(0);
    }

    // reserve fits in u64, so the difference does too
    Ok(reserve.safe_sub(pledged)? as u64)
}

/// Whether `additional` freshly purchased base units fit under `MAX_SUPPLY`.
pub fn fits_supply_cap(supply: u64, additional: u128) -> bool {
    (supply as u128)
        .checked_add(additional)
        .map_or(false, |total| total <= MAX_SUPPLY as u128)
}

/// Lamports above the rent-exempt floor of the reserve vault. The floor is
/// never counted as reserve so the vault can not be drained below it.
pub fn reserve_above_floor(vault_lamports: u64, rent_floor: u64) -> u64 {
    vault_lamports.saturating_sub(rent_floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_native_unit_buys_a_thousand_tokens() {
        let one_sol = 1_000_000_000u64;
        assert_eq!(tokens_for_lamports(one_sol).unwrap(), (1_000 * ONE_TOKEN) as u128);
    }

    #[test]
    fn five_hundred_base_units_redeem_for_a_quarter_native_unit() {
        assert_eq!(payout_for_tokens(500).unwrap(), 250_000_000);
    }

    #[test]
    fn surplus_is_zero_at_or_below_pledge() {
        assert_eq!(calculate_withdrawable_surplus(0, 0).unwrap(), 0);
        assert_eq!(calculate_withdrawable_surplus(0, 1_000).unwrap(), 0);

        let pledged = (1_000 * SELL_RATE) as u64;
        assert_eq!(calculate_withdrawable_surplus(pledged, 1_000).unwrap(), 0);
        assert_eq!(calculate_withdrawable_surplus(pledged - 1, 1_000).unwrap(), 0);
        assert_eq!(calculate_withdrawable_surplus(pledged + 7, 1_000).unwrap(), 7);
    }

    #[test]
    fn surplus_of_unbacked_reserve_is_entire_balance() {
        assert_eq!(calculate_withdrawable_surplus(42, 0).unwrap(), 42);
    }

    #[test]
    fn pledge_of_max_supply_does_not_overflow() {
        let pledged = pledged_reserve(MAX_SUPPLY).unwrap();
        assert_eq!(pledged, MAX_SUPPLY as u128 * SELL_RATE as u128);
        assert!(pledged > u64::MAX as u128);
        assert_eq!(calculate_withdrawable_surplus(u64::MAX, MAX_SUPPLY).unwrap(), 0);
    }

    #[test]
    fn supply_cap_boundary() {
        assert!(fits_supply_cap(0, MAX_SUPPLY as u128));
        assert!(!fits_supply_cap(0, MAX_SUPPLY as u128 + 1));
        assert!(fits_supply_cap(MAX_SUPPLY - 10, 10));
        assert!(!fits_supply_cap(MAX_SUPPLY - 10, 11));
        assert!(!fits_supply_cap(u64::MAX, u128::MAX));
    }

    #[test]
    fn oversized_deposit_is_a_cap_breach_not_an_overflow() {
        let tokens = tokens_for_lamports(u64::MAX).unwrap();
        assert!(!fits_supply_cap(0, tokens));
    }

    #[test]
    fn rent_floor_is_not_reserve() {
        assert_eq!(reserve_above_floor(890_880, 890_880), 0);
        assert_eq!(reserve_above_floor(100, 890_880), 0);
        assert_eq!(reserve_above_floor(890_880 + 5, 890_880), 5);
    }
}
