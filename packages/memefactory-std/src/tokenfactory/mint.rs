use cosmwasm_std::{Coin, CosmosMsg};
use osmosis_std_derive::CosmwasmExt;

use crate::bank::ProtoCoin;

#[derive(Clone, PartialEq, Eq, ::prost::Message, CosmwasmExt)]
#[proto_message(type_url = "/osmosis.tokenfactory.v1beta1.MsgMint")]
pub struct MsgMint {
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub amount: ::core::option::Option<ProtoCoin>,
    #[prost(string, tag = "3")]
    pub mint_to_address: ::prost::alloc::string::String,
}

/// Returns the MsgMint Stargate message. Only the denom admin can mint.
pub fn mint(sender: impl Into<String>, coin: Coin, mint_to_address: impl Into<String>) -> CosmosMsg {
    MsgMint {
        sender: sender.into(),
        amount: Some(coin.into()),
        mint_to_address: mint_to_address.into(),
    }
    .into()
}
