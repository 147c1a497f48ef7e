#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;

use crate::codec::to_indented_binary;
use crate::error::ContractError;
use crate::market::{
    execute_buy_product, execute_create_product, execute_delete_product, execute_update_product,
    query_all_products, query_product,
};
use crate::msg::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::registry::{
    execute_buy_name, execute_delete_name, execute_set_name, query_names, query_resolve,
    query_whois,
};
use crate::state::{Config, CONFIG};
use crate::validate::validate_execute;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:cw-nameservice";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        purchase_price: msg.purchase_price,
    };
    CONFIG.save(deps.storage, &config)?;

    let mut res = Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender);
    if let Some(price) = config.purchase_price {
        res = res.add_attribute("purchase_price", price.to_string());
    }
    Ok(res)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    validate_execute(&info.sender, &info.funds, &msg)?;

    match msg {
        ExecuteMsg::SetName { name, value } => execute_set_name(deps, info, name, value),
        ExecuteMsg::BuyName { name } => execute_buy_name(deps, info, name),
        ExecuteMsg::DeleteName { name } => execute_delete_name(deps, info, name),
        ExecuteMsg::CreateProduct {
            product_id,
            description,
            price,
        } => execute_create_product(deps, info, product_id, description, price),
        ExecuteMsg::UpdateProduct {
            product_id,
            description,
            price,
        } => execute_update_product(deps, info, product_id, description, price),
        ExecuteMsg::DeleteProduct { product_id } => execute_delete_product(deps, info, product_id),
        ExecuteMsg::BuyProduct { product_id } => execute_buy_product(deps, info, product_id),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let bin = match msg {
        QueryMsg::Resolve { name } => to_indented_binary(&query_resolve(deps, name)?)?,
        QueryMsg::Whois { name } => to_indented_binary(&query_whois(deps, name)?)?,
        QueryMsg::Names {} => to_indented_binary(&query_names(deps)?)?,
        QueryMsg::Product { product_id } => to_indented_binary(&query_product(deps, product_id)?)?,
        QueryMsg::AllProducts {} => to_indented_binary(&query_all_products(deps)?)?,
        QueryMsg::Config {} => to_indented_binary(&query_config(deps)?)?,
    };
    Ok(bin)
}

fn query_config(deps: Deps) -> Result<ConfigResponse, ContractError> {
    Ok(CONFIG.load(deps.storage)?.into())
}
