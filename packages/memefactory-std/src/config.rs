use std::env;
use std::time::Duration;

use cosmwasm_schema::cw_serde;

use crate::chain::{Chain, Explorer};
use crate::constants::{BURN_ADDRESS, FEE_DENOM, POOL_COUNT_REFRESH_SECS};

/// Environment flag selecting the test network. Only the exact value `true` enables it.
pub const TESTNET_ENV_VAR: &str = "MEMEFACTORY_TESTNET";

/// Network the factory talks to, along with the constants shown to the user for it.
#[cw_serde]
pub struct NetworkConfig {
    /// Chain registry name, e.g. `osmosis`
    pub chain_name: String,
    /// Human readable network name
    pub display_name: String,
    /// Pool creation fee charged by the chain, as displayed next to the pool toggle
    pub pool_creation_fee_display: String,
    /// Base url of the Osmosis app, used to build trading and pool links
    pub osmosis_app: String,
    pub fee_denom: String,
    /// Receives the denom admin and burned LP shares
    pub burn_address: String,
    pub pool_count_refresh_secs: u64,
}

impl NetworkConfig {
    pub fn mainnet() -> Self {
        Self {
            chain_name: "osmosis".to_string(),
            display_name: "Osmosis".to_string(),
            pool_creation_fee_display: "100 USDC".to_string(),
            osmosis_app: "https://app.osmosis.zone".to_string(),
            fee_denom: FEE_DENOM.to_string(),
            burn_address: BURN_ADDRESS.to_string(),
            pool_count_refresh_secs: POOL_COUNT_REFRESH_SECS,
        }
    }

    pub fn testnet() -> Self {
        Self {
            chain_name: "osmosistestnet".to_string(),
            display_name: "Osmosis Testnet".to_string(),
            pool_creation_fee_display: "100 OSMO".to_string(),
            osmosis_app: "https://testnet.osmosis.zone".to_string(),
            ..Self::mainnet()
        }
    }

    pub fn for_network(testnet: bool) -> Self {
        if testnet {
            Self::testnet()
        } else {
            Self::mainnet()
        }
    }

    /// Builds the config from [TESTNET_ENV_VAR].
    pub fn from_env() -> Self {
        Self::for_env_value(env::var(TESTNET_ENV_VAR).ok().as_deref())
    }

    /// Builds the config from the raw value of [TESTNET_ENV_VAR], if it is set.
    pub fn for_env_value(value: Option<&str>) -> Self {
        Self::for_network(value == Some("true"))
    }

    pub fn is_testnet(&self) -> bool {
        self.chain_name == "osmosistestnet"
    }

    pub fn pool_count_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.pool_count_refresh_secs)
    }

    /// Returns the chain registry entry of the configured network.
    pub fn chain(&self) -> Chain {
        let explorer_path = if self.is_testnet() {
            "osmosis-testnet"
        } else {
            "osmosis"
        };

        Chain {
            chain_name: self.chain_name.clone(),
            pretty_name: Some(self.display_name.clone()),
            bech32_prefix: "osmo".to_string(),
            explorers: vec![
                Explorer {
                    kind: Some("mintscan".to_string()),
                    url: Some(format!("https://www.mintscan.io/{explorer_path}")),
                    tx_page: Some(format!(
                        "https://www.mintscan.io/{explorer_path}/txs/${{txHash}}"
                    )),
                    account_page: Some(format!(
                        "https://www.mintscan.io/{explorer_path}/account/${{accountAddress}}"
                    )),
                },
                Explorer {
                    kind: Some("celatone".to_string()),
                    url: Some(format!("https://celatone.osmosis.zone/{}", self.chain_name)),
                    tx_page: Some(format!(
                        "https://celatone.osmosis.zone/{}/txs/${{txHash}}",
                        self.chain_name
                    )),
                    account_page: Some(format!(
                        "https://celatone.osmosis.zone/{}/accounts/${{accountAddress}}",
                        self.chain_name
                    )),
                },
            ],
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}
