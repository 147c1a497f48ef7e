//! Stateless checks run on every message before it is dispatched.

use cosmwasm_std::{Addr, Coin};

use crate::coins::is_all_positive;
use crate::error::ContractError;
use crate::msg::ExecuteMsg;

pub fn validate_execute(
    sender: &Addr,
    funds: &[Coin],
    msg: &ExecuteMsg,
) -> Result<(), ContractError> {
    validate_sender(sender)?;
    match msg {
        ExecuteMsg::SetName { name, value } => {
            if name.is_empty() || value.is_empty() {
                return Err(ContractError::unknown_request(
                    "Name and/or Value cannot be empty",
                ));
            }
        }
        ExecuteMsg::BuyName { name } => {
            non_empty_name(name)?;
            positive_amount(funds)?;
        }
        ExecuteMsg::DeleteName { name } => non_empty_name(name)?,
        ExecuteMsg::CreateProduct {
            product_id,
            description,
            price,
        }
        | ExecuteMsg::UpdateProduct {
            product_id,
            description,
            price,
        } => {
            if product_id.is_empty() || description.is_empty() {
                return Err(ContractError::unknown_request(
                    "ProductID and/or Description cannot be empty",
                ));
            }
            positive_amount(price)?;
        }
        ExecuteMsg::DeleteProduct { product_id } | ExecuteMsg::BuyProduct { product_id } => {
            if product_id.is_empty() {
                return Err(ContractError::unknown_request("ProductID cannot be empty"));
            }
        }
    }
    Ok(())
}

fn validate_sender(sender: &Addr) -> Result<(), ContractError> {
    if sender.as_str().trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            address: sender.to_string(),
        });
    }
    Ok(())
}

fn non_empty_name(name: &str) -> Result<(), ContractError> {
    if name.is_empty() {
        return Err(ContractError::unknown_request("Name cannot be empty"));
    }
    Ok(())
}

fn positive_amount(amount: &[Coin]) -> Result<(), ContractError> {
    if !is_all_positive(amount) {
        return Err(ContractError::insufficient_funds(
            "amount must be positive in every denomination",
        ));
    }
    Ok(())
}
