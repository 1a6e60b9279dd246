use super::*;

pub mod safe_math;
pub mod reserve;

pub use safe_math::*;
pub use reserve::*;
