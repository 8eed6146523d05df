use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Manager {manager} is already whitelisted.")]
    DuplicateManager { manager: String },

    #[error("Manager {manager} is not whitelisted.")]
    ManagerNotFound { manager: String },
}

impl From<cw_controllers::AdminError> for ContractError {
    fn from(err: cw_controllers::AdminError) -> Self {
        match err {
            cw_controllers::AdminError::Std(err) => ContractError::Std(err),
            cw_controllers::AdminError::NotAdmin {} => ContractError::Unauthorized {},
        }
    }
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::GenericErr { msg: err.to_string() }
    }
}
