use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Coin, CosmosMsg, Decimal, OverflowError, OverflowOperation, StdError, Uint128,
};
use memefactory_std::bank::{send, DenomUnit, Metadata};
use memefactory_std::coin::{format_units, lp_share_denom};
use memefactory_std::config::NetworkConfig;
use memefactory_std::constants::{
    DECIMALS, LP_SHARES_BURN_AMOUNT, MIN_SYMBOL_LENGTH, OSMO_DENOM, POOL_ASSET_WEIGHT,
};
use memefactory_std::fee::{total_gas, MsgKind, StdFee};
use memefactory_std::gamm::create_pool::{create_balancer_pool, PoolAsset};
use memefactory_std::tokenfactory::change_admin::change_admin;
use memefactory_std::tokenfactory::create_denom::create_denom;
use memefactory_std::tokenfactory::mint::mint;
use memefactory_std::tokenfactory::set_denom_metadata::set_denom_metadata;

use crate::form::TokenForm;
use crate::LaunchError;

/// The messages of a launch transaction. `messages`, `fees` and `kinds` are parallel lists.
#[cw_serde]
pub struct LaunchPlan {
    /// Denom of the token being created
    pub denom: String,
    pub messages: Vec<CosmosMsg>,
    /// Gas estimate of each message
    pub fees: Vec<u64>,
    pub kinds: Vec<MsgKind>,
}

impl LaunchPlan {
    fn new(denom: String) -> Self {
        LaunchPlan {
            denom,
            messages: vec![],
            fees: vec![],
            kinds: vec![],
        }
    }

    fn push(&mut self, kind: MsgKind, msg: CosmosMsg) {
        self.messages.push(msg);
        self.fees.push(kind.gas());
        self.kinds.push(kind);
    }

    pub fn total_gas(&self) -> u64 {
        total_gas(&self.fees)
    }

    /// Fee of the whole transaction, paid in `fee_denom`.
    pub fn fee(&self, fee_denom: &str) -> StdFee {
        StdFee::zero_bid(self.total_gas(), fee_denom)
    }

    pub fn contains(&self, kind: MsgKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Composes the messages launching the token described by `form`, created and signed by
/// `sender`.
///
/// The token is created, its whole supply minted to the sender, its metadata set and its admin
/// handed to the burn address. If requested, an OSMO pool is created with the given liquidity
/// and its LP shares burned. Burning relies on the pool getting id `num_pools + 1`, which can be
/// wrong if another pool is created in the same block.
///
/// No network call is made.
pub fn compose_launch(
    config: &NetworkConfig,
    sender: &str,
    form: &TokenForm,
    num_pools: Option<u64>,
) -> Result<LaunchPlan, LaunchError> {
    if form.symbol.chars().count() < MIN_SYMBOL_LENGTH {
        return Err(LaunchError::SymbolTooShort {
            symbol: form.symbol.clone(),
            min: MIN_SYMBOL_LENGTH,
        });
    }

    let subdenom = form.subdenom();
    let denom = form.denom(sender);
    let mut plan = LaunchPlan::new(denom.clone());

    plan.push(MsgKind::CreateDenom, create_denom(sender, &subdenom));

    let supply = Coin {
        denom: denom.clone(),
        amount: format_units(&form.supply.to_string(), DECIMALS)?,
    };
    plan.push(MsgKind::Mint, mint(sender, supply, sender));

    plan.push(
        MsgKind::SetDenomMetadata,
        set_denom_metadata(sender, token_metadata(form, &denom)),
    );
    plan.push(
        MsgKind::ChangeAdmin,
        change_admin(sender, &denom, &config.burn_address),
    );

    if form.create_pool {
        let pool_assets = vec![
            PoolAsset::new(
                Coin {
                    denom: denom.clone(),
                    amount: format_units(&form.token_liquidity, DECIMALS)?,
                },
                POOL_ASSET_WEIGHT,
            ),
            PoolAsset::new(
                Coin {
                    denom: OSMO_DENOM.to_string(),
                    amount: format_units(&form.osmo_liquidity, DECIMALS)?,
                },
                POOL_ASSET_WEIGHT,
            ),
        ];
        let swap_fee = Decimal::from_str(form.swap_fee.trim())?;
        let exit_fee = Decimal::from_str(form.exit_fee.trim())?;
        plan.push(
            MsgKind::CreateBalancerPool,
            create_balancer_pool(sender, pool_assets, swap_fee, exit_fee),
        );

        if form.burn_lp {
            let num_pools = num_pools.ok_or(LaunchError::PoolCountUnavailable {})?;
            let next_pool_id = num_pools.checked_add(1).ok_or_else(|| {
                StdError::overflow(OverflowError::new(OverflowOperation::Add, num_pools, 1))
            })?;
            let shares = Coin {
                denom: lp_share_denom(next_pool_id),
                amount: Uint128::new(LP_SHARES_BURN_AMOUNT),
            };
            plan.push(
                MsgKind::Send,
                send(sender, &config.burn_address, vec![shares]),
            );
        }
    }

    Ok(plan)
}

/// Bank metadata of the new token: the factory denom as base unit, the subdenom as display unit.
fn token_metadata(form: &TokenForm, denom: &str) -> Metadata {
    let subdenom = form.subdenom();

    Metadata {
        description: form.description.clone(),
        denom_units: vec![
            DenomUnit {
                denom: denom.to_string(),
                exponent: 0,
                aliases: vec![],
            },
            DenomUnit {
                denom: subdenom.clone(),
                exponent: DECIMALS,
                aliases: vec![],
            },
        ],
        base: denom.to_string(),
        display: subdenom,
        name: form.name.clone(),
        symbol: form.symbol.clone(),
        uri: form.image_url.clone(),
        uri_hash: String::new(),
    }
}
