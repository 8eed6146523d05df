use cosmwasm_std::{StdError, OverflowError, Uint64, Uint128, ConversionOverflowError, DivideByZeroError};
use fixed_point_math::FixedPointMathError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Arithmetic error")]
    ArithmeticError {},



    // Authorization errors
    #[error("Caller is not the owner.")]
    CallerIsNotOwner {},

    #[error("Caller is not the manager.")]
    CallerIsNotManager {},

    #[error("Caller is neither the owner nor the manager.")]
    CallerIsNotOwnerOrManager {},

    #[error("Caller is not the pending owner.")]
    CallerIsNotPendingOwner {},



    // Validation errors
    #[error("Invalid tokens: {reason}")]
    InvalidTokens { reason: String },

    #[error("Length mismatch: expected {expected} entries, received {actual}.")]
    LengthMismatch { expected: u64, actual: u64 },

    #[error("Token order mismatch at index {index}: expected {expected}, received {actual}.")]
    TokenOrderMismatch { index: u64, expected: String, actual: String },

    #[error("The vault description must not be empty.")]
    EmptyDescription {},

    #[error("Address must not be empty.")]
    ZeroAddress {},

    #[error("The manager cannot be the owner.")]
    ManagerIsOwner {},

    #[error("{manager} is not a whitelisted manager.")]
    ManagerNotWhitelisted { manager: String },

    #[error("Invalid weight {weight} at index {index}.")]
    InvalidWeight { index: u64, weight: Uint128 },

    #[error("Weights must sum to one (sum is {sum}).")]
    WeightSumNotOne { sum: Uint128 },

    #[error("Invalid weight update times: start {start_time}, end {end_time}.")]
    InvalidWeightUpdateTimes { start_time: Uint64, end_time: Uint64 },

    #[error("Weight change duration {duration} is below the minimum of {min} seconds.")]
    WeightChangeDurationTooShort { duration: Uint64, min: Uint64 },

    #[error("Weight change ratio {ratio} per second is above the maximum of {max}.")]
    WeightChangeRatioTooHigh { ratio: Uint128, max: Uint128 },

    #[error("Swap fee {fee} is out of bounds [{min}, {max}].")]
    SwapFeeOutOfBounds { fee: Uint128, min: Uint128, max: Uint128 },

    #[error("Swap fee change {change} is above the maximum of {max}.")]
    SwapFeeChangeTooLarge { change: Uint128, max: Uint128 },

    #[error("Management fee {fee} is above the maximum of {max}.")]
    ManagementFeeTooHigh { fee: Uint128, max: Uint128 },

    #[error("Notice period {period} is above the maximum of {max} seconds.")]
    NoticePeriodTooLong { period: Uint64, max: Uint64 },

    #[error("Initial deposit amount of {token} must not be zero.")]
    InvalidZeroAmount { token: String },

    #[error("The pool token cannot be swept.")]
    CannotSweepPoolToken {},

    #[error("Invalid validator response: expected {expected} allowances, received {actual}.")]
    InvalidValidatorResponse { expected: u64, actual: u64 },



    // State errors
    #[error("Vault is not initialized.")]
    VaultNotInitialized {},

    #[error("Vault is already initialized.")]
    VaultAlreadyInitialized {},

    #[error("Vault is finalizing.")]
    VaultFinalizing {},

    #[error("Vault is finalized.")]
    VaultFinalized {},

    #[error("Finalization has not been initiated.")]
    FinalizationNotInitiated {},

    #[error("Notice period has not elapsed (notice timeout is {notice_timeout}).")]
    NoticeTimeoutNotElapsed { notice_timeout: Uint64 },

    #[error("Cannot set the swap fee before cooldown (next change allowed at {next_allowed}).")]
    SwapFeeCooldown { next_allowed: Uint64 },

    #[error("Trading is already enabled.")]
    TradingAlreadyEnabled {},

    #[error("There is no pending ownership transfer.")]
    NoPendingOwnershipTransfer {},

    #[error("Balance of {token} changed: expected {expected}, current {actual}.")]
    BalanceChanged { token: String, expected: Uint128, actual: Uint128 },



    // Resource errors
    #[error("Amount {amount} of {token} exceeds the available {available}.")]
    AmountExceedsAvailable { token: String, amount: Uint128, available: Uint128 },

    #[error("Insufficient allowance of {token}: allowance is {allowance}, required {amount}.")]
    InsufficientAllowance { token: String, allowance: Uint128, amount: Uint128 },
}


/// Broad error categories, used to tell the caller how a failure may be recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    Validation,
    State,
    Resource,
    Internal
}

impl ContractError {

    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::Std(_)
            | ContractError::ArithmeticError {} => ErrorKind::Internal,

            ContractError::CallerIsNotOwner {}
            | ContractError::CallerIsNotManager {}
            | ContractError::CallerIsNotOwnerOrManager {}
            | ContractError::CallerIsNotPendingOwner {} => ErrorKind::Authorization,

            ContractError::InvalidTokens { .. }
            | ContractError::LengthMismatch { .. }
            | ContractError::TokenOrderMismatch { .. }
            | ContractError::EmptyDescription {}
            | ContractError::ZeroAddress {}
            | ContractError::ManagerIsOwner {}
            | ContractError::ManagerNotWhitelisted { .. }
            | ContractError::InvalidWeight { .. }
            | ContractError::WeightSumNotOne { .. }
            | ContractError::InvalidWeightUpdateTimes { .. }
            | ContractError::WeightChangeDurationTooShort { .. }
            | ContractError::WeightChangeRatioTooHigh { .. }
            | ContractError::SwapFeeOutOfBounds { .. }
            | ContractError::SwapFeeChangeTooLarge { .. }
            | ContractError::ManagementFeeTooHigh { .. }
            | ContractError::NoticePeriodTooLong { .. }
            | ContractError::InvalidZeroAmount { .. }
            | ContractError::CannotSweepPoolToken {}
            | ContractError::InvalidValidatorResponse { .. } => ErrorKind::Validation,

            ContractError::VaultNotInitialized {}
            | ContractError::VaultAlreadyInitialized {}
            | ContractError::VaultFinalizing {}
            | ContractError::VaultFinalized {}
            | ContractError::FinalizationNotInitiated {}
            | ContractError::NoticeTimeoutNotElapsed { .. }
            | ContractError::SwapFeeCooldown { .. }
            | ContractError::TradingAlreadyEnabled {}
            | ContractError::NoPendingOwnershipTransfer {}
            | ContractError::BalanceChanged { .. } => ErrorKind::State,

            ContractError::AmountExceedsAvailable { .. }
            | ContractError::InsufficientAllowance { .. } => ErrorKind::Resource,
        }
    }

}


impl From<OverflowError> for ContractError {
    fn from(_err: OverflowError) -> Self {
        ContractError::ArithmeticError {}
    }
}

impl From<ConversionOverflowError> for ContractError {
    fn from(_err: ConversionOverflowError) -> Self {
        ContractError::ArithmeticError {}
    }
}

impl From<DivideByZeroError> for ContractError {
    fn from(_err: DivideByZeroError) -> Self {
        ContractError::ArithmeticError {}
    }
}

impl From<FixedPointMathError> for ContractError {
    fn from(_err: FixedPointMathError) -> Self {
        ContractError::ArithmeticError {}
    }
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::GenericErr { msg: err.to_string() }
    }
}
