use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;

use crate::state::{Config, Product, Whois};

#[cw_serde]
#[derive(Default)]
pub struct InstantiateMsg {
    pub purchase_price: Option<Coin>,
}

/// State transitions. The signer of each message is the transaction sender;
/// `BuyName` bids and `BuyProduct` payments are the funds sent along.
#[cw_serde]
pub enum ExecuteMsg {
    SetName {
        name: String,
        value: String,
    },
    BuyName {
        name: String,
    },
    DeleteName {
        name: String,
    },
    CreateProduct {
        product_id: String,
        description: String,
        price: Vec<Coin>,
    },
    UpdateProduct {
        product_id: String,
        description: String,
        price: Vec<Coin>,
    },
    DeleteProduct {
        product_id: String,
    },
    BuyProduct {
        product_id: String,
    },
}

impl ExecuteMsg {
    /// Action name, also the serialized variant tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ExecuteMsg::SetName { .. } => "set_name",
            ExecuteMsg::BuyName { .. } => "buy_name",
            ExecuteMsg::DeleteName { .. } => "delete_name",
            ExecuteMsg::CreateProduct { .. } => "create_product",
            ExecuteMsg::UpdateProduct { .. } => "update_product",
            ExecuteMsg::DeleteProduct { .. } => "delete_product",
            ExecuteMsg::BuyProduct { .. } => "buy_product",
        }
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // Resolve returns the value a name points to, empty if unregistered
    #[returns(ResolveResponse)]
    Resolve { name: String },
    #[returns(Whois)]
    Whois { name: String },
    #[returns(Vec<String>)]
    Names {},
    #[returns(Product)]
    Product { product_id: String },
    #[returns(Vec<Product>)]
    AllProducts {},
    #[returns(ConfigResponse)]
    Config {},
}

#[cw_serde]
pub struct ResolveResponse {
    pub value: String,
}

#[cw_serde]
pub struct ConfigResponse {
    pub purchase_price: Option<Coin>,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> ConfigResponse {
        ConfigResponse {
            purchase_price: config.purchase_price,
        }
    }
}
