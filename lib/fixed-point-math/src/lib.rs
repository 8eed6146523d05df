use cosmwasm_std::{Uint128, Uint256, OverflowError, ConversionOverflowError, DivideByZeroError};
use thiserror::Error;

/// Arithmetic helpers for fixed-point numbers scaled by `ONE` (18 decimals).
///
/// Every operation rounds towards zero. Intermediate products are computed with 256 bits, so
/// `mul_down(a, b)` only fails if the *result* does not fit in 128 bits.

/***************************************************************
                SIMPLIFIED FIXED POINT OPERATIONS
***************************************************************/

pub const ONE: Uint128 = Uint128::new(1_000_000_000_000_000_000u128);   // 1e18

pub fn mul_down(x: Uint128, y: Uint128) -> Result<Uint128, FixedPointMathError> {
    mul_div_down(x, y, ONE)     // Equivalent to (x * y) / ONE rounded down.
}

pub fn div_down(x: Uint128, y: Uint128) -> Result<Uint128, FixedPointMathError> {
    mul_div_down(x, ONE, y)     // Equivalent to (x * ONE) / y rounded down.
}

/***************************************************************
                LOW LEVEL FIXED POINT OPERATIONS
***************************************************************/

pub fn mul_div_down(x: Uint128, y: Uint128, denominator: Uint128) -> Result<Uint128, FixedPointMathError> {

    if denominator.is_zero() {
        return Err(FixedPointMathError::DivideByZero {});
    }

    // 'full_mul' cannot overflow (128 x 128 bits fit in 256 bits)
    let z: Uint256 = x.full_mul(y);

    Ok((z / Uint256::from(denominator)).try_into()?)
}

/***************************************************************
                        LIBRARY ERRORS
***************************************************************/

#[derive(Error, Debug, PartialEq)]
pub enum FixedPointMathError {
    #[error("Overflow")]
    Overflow {},

    #[error("Division by zero")]
    DivideByZero {}
}

impl From<OverflowError> for FixedPointMathError {
    fn from(_value: OverflowError) -> Self {
        FixedPointMathError::Overflow {}
    }
}

impl From<ConversionOverflowError> for FixedPointMathError {
    fn from(_value: ConversionOverflowError) -> Self {
        FixedPointMathError::Overflow {}
    }
}

impl From<DivideByZeroError> for FixedPointMathError {
    fn from(_value: DivideByZeroError) -> Self {
        FixedPointMathError::DivideByZero {}
    }
}
