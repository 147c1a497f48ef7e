pub mod codec;
pub mod coins;
pub mod contract;
mod error;
pub mod market;
pub mod msg;
pub mod registry;
pub mod state;
pub mod validate;

pub use crate::codec::MsgCodec;
pub use crate::error::ContractError;
