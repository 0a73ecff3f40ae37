use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const PREFERRED_EXPLORER_KIND: &str = "mintscan";
const TX_HASH_PLACEHOLDER: &str = "${txHash}";
const ACCOUNT_ADDRESS_PLACEHOLDER: &str = "${accountAddress}";

/// Subset of a chain registry `chain.json` entry. Unknown fields are ignored so registry files
/// can be loaded as they are.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Chain {
    pub chain_name: String,
    #[serde(default)]
    pub pretty_name: Option<String>,
    pub bech32_prefix: String,
    #[serde(default)]
    pub explorers: Vec<Explorer>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Explorer {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tx_page: Option<String>,
    #[serde(default)]
    pub account_page: Option<String>,
}

/// Picks the mintscan explorer if the chain lists one, otherwise the first explorer.
pub fn preferred_explorer(chain: &Chain) -> Option<&Explorer> {
    chain
        .explorers
        .iter()
        .find(|explorer| explorer.kind.as_deref() == Some(PREFERRED_EXPLORER_KIND))
        .or_else(|| chain.explorers.first())
}

pub fn get_transaction_link(chain: &Chain, hash: &str) -> Option<String> {
    preferred_explorer(chain)?
        .tx_page
        .as_ref()
        .map(|page| page.replace(TX_HASH_PLACEHOLDER, hash))
}

pub fn get_address_link(chain: &Chain, address: &str) -> Option<String> {
    preferred_explorer(chain)?
        .account_page
        .as_ref()
        .map(|page| page.replace(ACCOUNT_ADDRESS_PLACEHOLDER, address))
}

pub fn get_explorer_link(chain: &Chain) -> Option<String> {
    preferred_explorer(chain)?.url.clone()
}
