use cosmwasm_std::CosmosMsg;
use osmosis_std_derive::CosmwasmExt;

use crate::bank::Metadata;

#[derive(Clone, PartialEq, Eq, ::prost::Message, CosmwasmExt)]
#[proto_message(type_url = "/osmosis.tokenfactory.v1beta1.MsgSetDenomMetadata")]
pub struct MsgSetDenomMetadata {
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub metadata: ::core::option::Option<Metadata>,
}

/// Returns the MsgSetDenomMetadata Stargate message
pub fn set_denom_metadata(sender: impl Into<String>, metadata: Metadata) -> CosmosMsg {
    MsgSetDenomMetadata {
        sender: sender.into(),
        metadata: Some(metadata),
    }
    .into()
}
