use cosmwasm_std::{Binary, StdError, StdResult};
use prost::Message;

/// Proto encodes the given message.
pub fn encode<M: Message>(message: &M) -> Binary {
    Binary::from(message.encode_to_vec())
}

/// Decodes a proto encoded message, as found in the value of a Stargate message or query.
pub fn decode<M: Message + Default>(value: &Binary) -> StdResult<M> {
    M::decode(value.as_slice()).map_err(|err| StdError::parse_err(std::any::type_name::<M>(), err))
}
