use cosmwasm_std::{BankMsg, Coin, Deps, DepsMut, MessageInfo, Response, StdResult};

use crate::coins::{coins_attr, has_coins, normalize, remainder};
use crate::error::ContractError;
use crate::state::{
    has_product, may_load_product, products, remove_product, save_product, Product,
};

pub fn execute_create_product(
    deps: DepsMut,
    info: MessageInfo,
    product_id: String,
    description: String,
    price: Vec<Coin>,
) -> Result<Response, ContractError> {
    if has_product(deps.storage, &product_id) {
        return Err(ContractError::ProductAlreadyExists { product_id });
    }

    let product = Product {
        product_id,
        description,
        price: normalize(price),
        owner: info.sender,
    };
    save_product(deps.storage, &product)?;

    Ok(Response::new()
        .add_attribute("action", "create_product")
        .add_attribute("product_id", product.product_id)
        .add_attribute("owner", product.owner)
        .add_attribute("price", coins_attr(&product.price)))
}

pub fn execute_update_product(
    deps: DepsMut,
    info: MessageInfo,
    product_id: String,
    description: String,
    price: Vec<Coin>,
) -> Result<Response, ContractError> {
    let mut product = load_owned(deps.as_ref(), &info, product_id)?;
    product.description = description;
    product.price = normalize(price);
    save_product(deps.storage, &product)?;

    Ok(Response::new()
        .add_attribute("action", "update_product")
        .add_attribute("product_id", product.product_id)
        .add_attribute("price", coins_attr(&product.price)))
}

pub fn execute_delete_product(
    deps: DepsMut,
    info: MessageInfo,
    product_id: String,
) -> Result<Response, ContractError> {
    let product = load_owned(deps.as_ref(), &info, product_id)?;
    remove_product(deps.storage, &product.product_id);

    Ok(Response::new()
        .add_attribute("action", "delete_product")
        .add_attribute("product_id", product.product_id)
        .add_attribute("owner", info.sender))
}

pub fn execute_buy_product(
    deps: DepsMut,
    info: MessageInfo,
    product_id: String,
) -> Result<Response, ContractError> {
    let mut product = load(deps.as_ref(), product_id)?;
    if product.owner == info.sender {
        return Err(ContractError::unauthorized("You are product owner"));
    }
    if !has_coins(&info.funds, &product.price) {
        return Err(ContractError::insufficient_funds(format!(
            "payment does not cover price {}",
            coins_attr(&product.price)
        )));
    }

    let mut res = Response::new().add_message(BankMsg::Send {
        to_address: product.owner.to_string(),
        amount: product.price.clone(),
    });
    let change = remainder(&info.funds, &product.price);
    if !change.is_empty() {
        res = res.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: change,
        });
    }

    let seller = std::mem::replace(&mut product.owner, info.sender.clone());
    save_product(deps.storage, &product)?;

    Ok(res
        .add_attribute("action", "buy_product")
        .add_attribute("product_id", product.product_id)
        .add_attribute("seller", seller)
        .add_attribute("buyer", info.sender))
}

pub fn query_product(deps: Deps, product_id: String) -> Result<Product, ContractError> {
    load(deps, product_id)
}

pub fn query_all_products(deps: Deps) -> StdResult<Vec<Product>> {
    products(deps.storage)
}

fn load(deps: Deps, product_id: String) -> Result<Product, ContractError> {
    may_load_product(deps.storage, &product_id)?
        .ok_or(ContractError::ProductNotFound { product_id })
}

fn load_owned(
    deps: Deps,
    info: &MessageInfo,
    product_id: String,
) -> Result<Product, ContractError> {
    let product = load(deps, product_id)?;
    if product.owner != info.sender {
        return Err(ContractError::unauthorized("Incorrect Owner"));
    }
    Ok(product)
}
