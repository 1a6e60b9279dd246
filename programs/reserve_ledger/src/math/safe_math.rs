use super::*;

/// Checked arithmetic that reports the call site and maps overflow to
/// `ReserveLedgerError::MathOverflow`.
pub trait SafeMath<T>: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self>;
    fn safe_mul(self, rhs: Self) -> Result<Self>;
    fn safe_sub(self, rhs: Self) -> Result<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath<$t> for $t {
            #[inline(always)]
            #[track_caller]
            fn safe_add(self, v: $t) -> Result<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(ReserveLedgerError::MathOverflow.into())
                    }
                }
            }

            #[inline(always)]
            #[track_caller]
            fn safe_sub(self, v: $t) -> Result<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(ReserveLedgerError::MathOverflow.into())
                    }
                }
            }

            #[inline(always)]
            #[track_caller]
            fn safe_mul(self, v: $t) -> Result<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(ReserveLedgerError::MathOverflow.into())
                    }
                }
            }
        }
    };
}

checked_impl!(u64);
checked_impl!(u128);
