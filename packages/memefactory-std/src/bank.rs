use std::str::FromStr;

use cosmwasm_std::{Coin, CosmosMsg, StdResult, Uint128};
use osmosis_std_derive::CosmwasmExt;

/// `cosmos.base.v1beta1.Coin`, with the amount carried as a string on the wire.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct ProtoCoin {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub amount: ::prost::alloc::string::String,
}

impl From<Coin> for ProtoCoin {
    fn from(coin: Coin) -> Self {
        ProtoCoin {
            denom: coin.denom,
            amount: coin.amount.to_string(),
        }
    }
}

impl ProtoCoin {
    pub fn to_coin(&self) -> StdResult<Coin> {
        Ok(Coin {
            denom: self.denom.clone(),
            amount: Uint128::from_str(&self.amount)?,
        })
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct DenomUnit {
    #[prost(string, tag = "1")]
    pub denom: ::prost::alloc::string::String,
    /// Power of 10 by which 1 unit of this denom exceeds the base unit
    #[prost(uint32, tag = "2")]
    pub exponent: u32,
    #[prost(string, repeated, tag = "3")]
    pub aliases: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}

/// `cosmos.bank.v1beta1.Metadata`
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct Metadata {
    #[prost(string, tag = "1")]
    pub description: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub denom_units: ::prost::alloc::vec::Vec<DenomUnit>,
    #[prost(string, tag = "3")]
    pub base: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub display: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub symbol: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub uri: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub uri_hash: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, CosmwasmExt)]
#[proto_message(type_url = "/cosmos.bank.v1beta1.MsgSend")]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub from_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub to_address: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub amount: ::prost::alloc::vec::Vec<ProtoCoin>,
}

/// Returns the MsgSend Stargate message. Signed by the wallet, so unlike [cosmwasm_std::BankMsg]
/// it carries the sender explicitly.
pub fn send(
    from_address: impl Into<String>,
    to_address: impl Into<String>,
    amount: Vec<Coin>,
) -> CosmosMsg {
    MsgSend {
        from_address: from_address.into(),
        to_address: to_address.into(),
        amount: amount.into_iter().map(ProtoCoin::from).collect(),
    }
    .into()
}
