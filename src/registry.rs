use cosmwasm_std::{BankMsg, Deps, DepsMut, MessageInfo, Response, StdResult};

use crate::coins::{coins_attr, is_all_gt, normalize};
use crate::error::ContractError;
use crate::msg::ResolveResponse;
use crate::state::{
    has_name, load_whois, may_load_whois, names, remove_whois, save_whois, Whois, CONFIG,
};

pub fn execute_set_name(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    value: String,
) -> Result<Response, ContractError> {
    // no owner yet means nobody may write the value
    let mut whois = match may_load_whois(deps.storage, &name)? {
        Some(whois) if whois.owner.as_ref() == Some(&info.sender) => whois,
        _ => return Err(ContractError::unauthorized("Incorrect Owner")),
    };
    whois.value = value;
    save_whois(deps.storage, &name, &whois)?;

    Ok(Response::new()
        .add_attribute("action", "set_name")
        .add_attribute("name", name)
        .add_attribute("owner", info.sender))
}

pub fn execute_buy_name(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    let bid = normalize(info.funds);
    let whois = load_whois(deps.storage, &name)?;

    let price = match &whois.owner {
        Some(_) => whois.price.clone(),
        None => CONFIG
            .may_load(deps.storage)?
            .and_then(|config| config.purchase_price)
            .map(|coin| vec![coin])
            .unwrap_or_default(),
    };
    if !is_all_gt(&bid, &price) {
        return Err(ContractError::insufficient_funds("Bid not high enough"));
    }

    // Without a previous owner the bid stays with the contract.
    let mut res = Response::new();
    if let Some(previous) = &whois.owner {
        res = res.add_message(BankMsg::Send {
            to_address: previous.to_string(),
            amount: bid.clone(),
        });
    }

    let bid_attr = coins_attr(&bid);
    save_whois(
        deps.storage,
        &name,
        &Whois {
            value: whois.value,
            owner: Some(info.sender.clone()),
            price: bid,
        },
    )?;

    Ok(res
        .add_attribute("action", "buy_name")
        .add_attribute("name", name)
        .add_attribute("buyer", info.sender)
        .add_attribute("bid", bid_attr))
}

pub fn execute_delete_name(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    if !has_name(deps.storage, &name) {
        return Err(ContractError::NameNotFound { name });
    }
    let whois = load_whois(deps.storage, &name)?;
    if whois.owner.as_ref() != Some(&info.sender) {
        return Err(ContractError::unauthorized("Incorrect Owner"));
    }
    remove_whois(deps.storage, &name);

    Ok(Response::new()
        .add_attribute("action", "delete_name")
        .add_attribute("name", name)
        .add_attribute("owner", info.sender))
}

pub fn query_resolve(deps: Deps, name: String) -> StdResult<ResolveResponse> {
    let value = load_whois(deps.storage, &name)?.value;
    Ok(ResolveResponse { value })
}

pub fn query_whois(deps: Deps, name: String) -> StdResult<Whois> {
    load_whois(deps.storage, &name)
}

pub fn query_names(deps: Deps) -> StdResult<Vec<String>> {
    names(deps.storage)
}
