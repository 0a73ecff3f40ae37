use cosmwasm_schema::cw_serde;
use cosmwasm_std::{CustomQuery, QuerierWrapper, QueryRequest, StdResult, Uint64};

use crate::tokenfactory::common::encode;

pub const NUM_POOLS_PATH: &str = "/osmosis.gamm.v1beta1.Query/NumPools";

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct QueryNumPoolsRequest {}

#[cw_serde]
pub struct QueryNumPoolsResponse {
    pub num_pools: Uint64,
}

/// Read access to the number of pools on chain. The next pool created gets `num_pools + 1` as id.
pub trait PoolQuerier {
    fn num_pools(&self) -> StdResult<u64>;
}

impl<C: CustomQuery> PoolQuerier for QuerierWrapper<'_, C> {
    fn num_pools(&self) -> StdResult<u64> {
        let request = QueryRequest::Stargate {
            path: NUM_POOLS_PATH.to_string(),
            data: encode(&QueryNumPoolsRequest {}),
        };
        let response: QueryNumPoolsResponse = self.query(&request)?;

        Ok(response.num_pools.u64())
    }
}
