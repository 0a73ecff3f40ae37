use cosmwasm_std::CosmosMsg;
use osmosis_std_derive::CosmwasmExt;

#[derive(Clone, PartialEq, Eq, ::prost::Message, CosmwasmExt)]
#[proto_message(type_url = "/osmosis.tokenfactory.v1beta1.MsgChangeAdmin")]
pub struct MsgChangeAdmin {
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub denom: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub new_admin: ::prost::alloc::string::String,
}

/// Returns the MsgChangeAdmin Stargate message, handing the denom over to `new_admin`.
pub fn change_admin(
    sender: impl Into<String>,
    denom: impl Into<String>,
    new_admin: impl Into<String>,
) -> CosmosMsg {
    MsgChangeAdmin {
        sender: sender.into(),
        denom: denom.into(),
        new_admin: new_admin.into(),
    }
    .into()
}
