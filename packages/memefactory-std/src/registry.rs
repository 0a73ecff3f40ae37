use std::collections::BTreeMap;

use cosmwasm_std::CosmosMsg;

/// Message types a signing client knows how to sign, keyed by proto type url and mapped to the
/// amino type name used when the wallet signs in amino (ledger) mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    types: BTreeMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, type_url: impl Into<String>, amino_type: impl Into<String>) -> Self {
        self.types.insert(type_url.into(), amino_type.into());
        self
    }

    /// Union of both registries. Entries of `other` win on conflicts.
    pub fn merge(mut self, other: Registry) -> Self {
        self.types.extend(other.types);
        self
    }

    pub fn contains(&self, type_url: &str) -> bool {
        self.types.contains_key(type_url)
    }

    pub fn amino_type(&self, type_url: &str) -> Option<&str> {
        self.types.get(type_url).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn type_urls(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

fn registry_of(entries: &[(&str, &str)]) -> Registry {
    entries
        .iter()
        .fold(Registry::new(), |registry, (type_url, amino_type)| {
            registry.register(*type_url, *amino_type)
        })
}

pub fn cosmos_registry() -> Registry {
    registry_of(&[
        ("/cosmos.bank.v1beta1.MsgSend", "cosmos-sdk/MsgSend"),
        ("/cosmos.bank.v1beta1.MsgMultiSend", "cosmos-sdk/MsgMultiSend"),
        ("/cosmos.staking.v1beta1.MsgDelegate", "cosmos-sdk/MsgDelegate"),
        ("/cosmos.staking.v1beta1.MsgUndelegate", "cosmos-sdk/MsgUndelegate"),
        (
            "/cosmos.staking.v1beta1.MsgBeginRedelegate",
            "cosmos-sdk/MsgBeginRedelegate",
        ),
        (
            "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward",
            "cosmos-sdk/MsgWithdrawDelegationReward",
        ),
        ("/cosmos.gov.v1beta1.MsgVote", "cosmos-sdk/MsgVote"),
    ])
}

pub fn cosmwasm_registry() -> Registry {
    registry_of(&[
        ("/cosmwasm.wasm.v1.MsgStoreCode", "wasm/MsgStoreCode"),
        (
            "/cosmwasm.wasm.v1.MsgInstantiateContract",
            "wasm/MsgInstantiateContract",
        ),
        (
            "/cosmwasm.wasm.v1.MsgExecuteContract",
            "wasm/MsgExecuteContract",
        ),
        ("/cosmwasm.wasm.v1.MsgMigrateContract", "wasm/MsgMigrateContract"),
    ])
}

pub fn ibc_registry() -> Registry {
    registry_of(&[(
        "/ibc.applications.transfer.v1.MsgTransfer",
        "cosmos-sdk/MsgTransfer",
    )])
}

pub fn osmosis_registry() -> Registry {
    registry_of(&[
        (
            "/osmosis.tokenfactory.v1beta1.MsgCreateDenom",
            "osmosis/tokenfactory/create-denom",
        ),
        (
            "/osmosis.tokenfactory.v1beta1.MsgMint",
            "osmosis/tokenfactory/mint",
        ),
        (
            "/osmosis.tokenfactory.v1beta1.MsgBurn",
            "osmosis/tokenfactory/burn",
        ),
        (
            "/osmosis.tokenfactory.v1beta1.MsgChangeAdmin",
            "osmosis/tokenfactory/change-admin",
        ),
        (
            "/osmosis.tokenfactory.v1beta1.MsgSetDenomMetadata",
            "osmosis/tokenfactory/set-denom-metadata",
        ),
        (
            "/osmosis.gamm.poolmodels.balancer.v1beta1.MsgCreateBalancerPool",
            "osmosis/gamm/create-balancer-pool",
        ),
        ("/osmosis.gamm.v1beta1.MsgJoinPool", "osmosis/gamm/join-pool"),
        ("/osmosis.gamm.v1beta1.MsgExitPool", "osmosis/gamm/exit-pool"),
        (
            "/osmosis.poolmanager.v1beta1.MsgSwapExactAmountIn",
            "osmosis/poolmanager/swap-exact-amount-in",
        ),
    ])
}

/// Fixed union of the cosmos, cosmwasm, ibc and osmosis registries, attached to every signing
/// client before broadcasting.
pub fn default_registry() -> Registry {
    cosmos_registry()
        .merge(cosmwasm_registry())
        .merge(ibc_registry())
        .merge(osmosis_registry())
}

/// Returns the proto type url of a Stargate message. Other messages have none, wallets can't
/// sign them directly.
pub fn type_url_of(msg: &CosmosMsg) -> Option<&str> {
    match msg {
        CosmosMsg::Stargate { type_url, .. } => Some(type_url.as_str()),
        _ => None,
    }
}
