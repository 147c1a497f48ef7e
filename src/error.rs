use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {detail}")]
    Unauthorized { detail: String },

    #[error("insufficient funds: {detail}")]
    InsufficientFunds { detail: String },

    #[error("name does not exist: {name}")]
    NameNotFound { name: String },

    #[error("product does not exist: {product_id}")]
    ProductNotFound { product_id: String },

    #[error("product already exists: {product_id}")]
    ProductAlreadyExists { product_id: String },

    #[error("unknown request: {detail}")]
    UnknownRequest { detail: String },

    #[error("invalid address: {address:?}")]
    InvalidAddress { address: String },
}

impl ContractError {
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        ContractError::Unauthorized {
            detail: detail.into(),
        }
    }

    pub fn insufficient_funds(detail: impl Into<String>) -> Self {
        ContractError::InsufficientFunds {
            detail: detail.into(),
        }
    }

    pub fn unknown_request(detail: impl Into<String>) -> Self {
        ContractError::UnknownRequest {
            detail: detail.into(),
        }
    }
}
