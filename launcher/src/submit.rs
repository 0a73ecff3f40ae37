use cosmwasm_schema::cw_serde;
use memefactory_std::config::NetworkConfig;
use memefactory_std::constants::TX_MEMO;
use memefactory_std::gamm::{POOL_CREATED_EVENT, POOL_ID_ATTRIBUTE};
use memefactory_std::registry::{default_registry, type_url_of};
use memefactory_std::wallet::{DeliverTxResponse, Wallet};
use tracing::{error, info, warn};

use crate::compose::{compose_launch, LaunchPlan};
use crate::form::TokenForm;
use crate::LaunchError;

/// A launch included in a block.
#[cw_serde]
pub struct LaunchReceipt {
    pub denom: String,
    pub transaction_hash: String,
    pub height: u64,
    /// Id of the pool created along with the token, read from the tx events
    pub pool_id: Option<u64>,
    pub response: DeliverTxResponse,
}

/// Composes the launch described by `form` and has the connected wallet sign and broadcast it as
/// a single transaction. Nothing is sent to the wallet when the launch can't be composed.
pub fn submit(
    config: &NetworkConfig,
    wallet: &mut dyn Wallet,
    form: &TokenForm,
    num_pools: Option<u64>,
) -> Result<LaunchReceipt, LaunchError> {
    let sender = wallet.address().ok_or(LaunchError::NotConnected {})?;
    let plan = compose_launch(config, &sender, form, num_pools)?;

    broadcast_plan(config, wallet, &sender, plan)
}

/// Signs and broadcasts an already composed plan.
pub fn broadcast_plan(
    config: &NetworkConfig,
    wallet: &mut dyn Wallet,
    sender: &str,
    plan: LaunchPlan,
) -> Result<LaunchReceipt, LaunchError> {
    let client = wallet.signing_client()?;

    let registry = default_registry();
    for msg in &plan.messages {
        let type_url = type_url_of(msg).unwrap_or_default();
        if !registry.contains(type_url) {
            return Err(LaunchError::UnregisteredType {
                type_url: type_url.to_string(),
            });
        }
    }
    client.set_registry(registry);

    let fee = plan.fee(&config.fee_denom);
    info!(
        denom = %plan.denom,
        messages = plan.messages.len(),
        gas = fee.gas.u64(),
        "broadcasting launch transaction"
    );

    let response = client
        .sign_and_broadcast(sender, plan.messages, fee, TX_MEMO)
        .map_err(|err| {
            if err.is_rejection() {
                warn!(denom = %plan.denom, "launch rejected in wallet");
            } else {
                error!(denom = %plan.denom, error = %err, "launch broadcast failed");
            }
            LaunchError::from(err)
        })?;

    if !response.is_ok() {
        let raw_log = response.raw_log.clone().unwrap_or_default();
        error!(
            denom = %plan.denom,
            code = response.code,
            tx_hash = %response.transaction_hash,
            raw_log = %raw_log,
            "launch transaction failed"
        );
        return Err(LaunchError::BroadcastFailed {
            code: response.code,
            raw_log,
        });
    }

    let pool_id = response
        .event_attribute(POOL_CREATED_EVENT, POOL_ID_ATTRIBUTE)
        .and_then(|pool_id| pool_id.parse::<u64>().ok());
    info!(
        denom = %plan.denom,
        tx_hash = %response.transaction_hash,
        height = response.height,
        pool_id = ?pool_id,
        "token launched"
    );

    Ok(LaunchReceipt {
        denom: plan.denom,
        transaction_hash: response.transaction_hash.clone(),
        height: response.height,
        pool_id,
        response,
    })
}
