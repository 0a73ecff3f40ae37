use cosmwasm_schema::cw_serde;
use memefactory_std::chain::{get_transaction_link, Chain};
use memefactory_std::config::NetworkConfig;

use crate::submit::LaunchReceipt;

/// Content of the dialog shown once a token is launched.
#[cw_serde]
pub struct SuccessSummary {
    pub title: String,
    pub denom: String,
    /// Where to trade the new token
    pub trade_link: String,
    /// Where to add and remove liquidity, when a pool was created
    pub pool_link: Option<String>,
    pub transaction_link: Option<String>,
}

impl SuccessSummary {
    pub fn new(
        config: &NetworkConfig,
        chain: &Chain,
        name: &str,
        symbol: &str,
        receipt: &LaunchReceipt,
    ) -> Self {
        SuccessSummary {
            title: format!("{name} deployed to {}!", config.display_name),
            denom: receipt.denom.clone(),
            trade_link: trade_link(config, symbol),
            pool_link: receipt.pool_id.map(|pool_id| pool_link(config, pool_id)),
            transaction_link: get_transaction_link(chain, &receipt.transaction_hash),
        }
    }
}

pub fn trade_link(config: &NetworkConfig, symbol: &str) -> String {
    format!(
        "{}/?unverified_assets=true&from=OSMO&to={symbol}",
        config.osmosis_app
    )
}

pub fn pool_link(config: &NetworkConfig, pool_id: u64) -> String {
    format!("{}/pool/{pool_id}", config.osmosis_app)
}
