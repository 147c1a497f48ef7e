//! Message type registration and the JSON encodings built on it.
//!
//! `MsgCodec::new()` is built once by whoever wires the contract into a client
//! and handed around by reference.

use std::any::type_name;
use std::collections::BTreeMap;

use cosmwasm_std::{Binary, StdError, StdResult};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ContractError;
use crate::msg::ExecuteMsg;

pub const ROUTE: &str = "nameservice";

#[derive(Clone, Debug, Default)]
pub struct MsgCodec {
    // message kind -> registered type name
    names: BTreeMap<&'static str, String>,
    // registered type name -> message kind
    kinds: BTreeMap<String, &'static str>,
}

impl MsgCodec {
    /// Codec with every `ExecuteMsg` kind registered.
    pub fn new() -> Self {
        let mut codec = MsgCodec::default();
        codec.register("set_name", "SetName");
        codec.register("buy_name", "BuyName");
        codec.register("delete_name", "DeleteName");
        codec.register("create_product", "CreateProduct");
        codec.register("update_product", "UpdateProduct");
        codec.register("delete_product", "DeleteProduct");
        codec.register("buy_product", "BuyProduct");
        codec
    }

    /// Registers `kind` under `<route>/<name>`.
    pub fn register(&mut self, kind: &'static str, name: &str) {
        let full = format!("{}/{}", ROUTE, name);
        self.names.insert(kind, full.clone());
        self.kinds.insert(full, kind);
    }

    pub fn route(&self) -> &'static str {
        ROUTE
    }

    pub fn type_name(&self, msg: &ExecuteMsg) -> Result<&str, ContractError> {
        self.names
            .get(msg.kind())
            .map(String::as_str)
            .ok_or_else(|| {
                ContractError::unknown_request(format!(
                    "Unrecognized {} Msg type: {}",
                    ROUTE,
                    msg.kind()
                ))
            })
    }

    /// Canonical bytes a signer commits to: `{"type":..,"value":..}` with
    /// every object's keys in lexicographic order.
    pub fn sign_bytes(&self, msg: &ExecuteMsg) -> Result<Vec<u8>, ContractError> {
        let name = self.type_name(msg)?;
        let value = match to_value(msg)? {
            Value::Object(mut tagged) => tagged.remove(msg.kind()).unwrap_or(Value::Null),
            other => other,
        };
        let mut envelope = Map::new();
        envelope.insert("type".to_string(), Value::String(name.to_string()));
        envelope.insert("value".to_string(), value);
        serde_json::to_vec(&sort_keys(Value::Object(envelope)))
            .map_err(|err| ContractError::unknown_request(err.to_string()))
    }

    /// Decodes the fields of a message registered as `name`.
    pub fn decode(&self, name: &str, value: &[u8]) -> Result<ExecuteMsg, ContractError> {
        let kind = self.kinds.get(name).ok_or_else(|| {
            ContractError::unknown_request(format!("Unrecognized {} Msg type: {}", ROUTE, name))
        })?;
        let fields: Value = serde_json::from_slice(value)
            .map_err(|err| ContractError::unknown_request(err.to_string()))?;
        let mut tagged = Map::new();
        tagged.insert(kind.to_string(), fields);
        serde_json::from_value(Value::Object(tagged))
            .map_err(|err| ContractError::unknown_request(err.to_string()))
    }
}

/// Pretty-printed JSON, the encoding of every query response.
pub fn to_indented_binary<T: Serialize>(value: &T) -> StdResult<Binary> {
    serde_json::to_vec_pretty(value)
        .map(Binary)
        .map_err(|err| StdError::serialize_err(type_name::<T>(), err))
}

fn to_value(msg: &ExecuteMsg) -> Result<Value, ContractError> {
    serde_json::to_value(msg).map_err(|err| ContractError::unknown_request(err.to_string()))
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
