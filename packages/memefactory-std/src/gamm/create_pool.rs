use cosmwasm_std::{Coin, CosmosMsg, Decimal};
use osmosis_std_derive::CosmwasmExt;

use crate::bank::ProtoCoin;

/// Swap and exit fees of a balancer pool. Both are `cosmos.Dec` values, which travel as 18
/// decimal fixed point integers.
#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct PoolParams {
    #[prost(string, tag = "1")]
    pub swap_fee: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub exit_fee: ::prost::alloc::string::String,
}

impl PoolParams {
    pub fn new(swap_fee: Decimal, exit_fee: Decimal) -> Self {
        PoolParams {
            swap_fee: swap_fee.atomics().to_string(),
            exit_fee: exit_fee.atomics().to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct PoolAsset {
    #[prost(message, optional, tag = "1")]
    pub token: ::core::option::Option<ProtoCoin>,
    #[prost(string, tag = "2")]
    pub weight: ::prost::alloc::string::String,
}

impl PoolAsset {
    pub fn new(token: Coin, weight: impl Into<String>) -> Self {
        PoolAsset {
            token: Some(token.into()),
            weight: weight.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, CosmwasmExt)]
#[proto_message(type_url = "/osmosis.gamm.poolmodels.balancer.v1beta1.MsgCreateBalancerPool")]
pub struct MsgCreateBalancerPool {
    #[prost(string, tag = "1")]
    pub sender: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub pool_params: ::core::option::Option<PoolParams>,
    #[prost(message, repeated, tag = "3")]
    pub pool_assets: ::prost::alloc::vec::Vec<PoolAsset>,
    #[prost(string, tag = "4")]
    pub future_pool_governor: ::prost::alloc::string::String,
}

/// Returns the MsgCreateBalancerPool Stargate message. The pool has no future governor.
pub fn create_balancer_pool(
    sender: impl Into<String>,
    pool_assets: Vec<PoolAsset>,
    swap_fee: Decimal,
    exit_fee: Decimal,
) -> CosmosMsg {
    MsgCreateBalancerPool {
        sender: sender.into(),
        pool_params: Some(PoolParams::new(swap_fee, exit_fee)),
        pool_assets,
        future_pool_governor: String::new(),
    }
    .into()
}
