use cosmwasm_std::CosmosMsg;
use osmosis_std_derive::CosmwasmExt;

/// Creates the denom `factory/{sender}/{subdenom}` with the sender as admin.
#[derive(Clone, PartialEq, Eq, ::prost::Message, CosmwasmExt)]
#[proto_message(type_url = "/osmosis.tokenfactory.v1beta1.MsgCreateDenom")]
pub struct MsgCreateDenom {
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub subdenom: ::prost::alloc::string::String,
}

/// Returns the MsgCreateDenom Stargate message
pub fn create_denom(sender: impl Into<String>, subdenom: impl Into<String>) -> CosmosMsg {
    MsgCreateDenom {
        sender: sender.into(),
        subdenom: subdenom.into(),
    }
    .into()
}
