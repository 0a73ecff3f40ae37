use std::fmt::Debug;
use std::str::FromStr;

use anyhow::{anyhow, bail, ensure, Result as AnyResult};
use bech32::Bech32;
use cosmwasm_schema::schemars::JsonSchema;
use cosmwasm_schema::serde::de::DeserializeOwned;
use cosmwasm_std::{
    to_json_binary, Addr, Api, BankMsg, Binary, BlockInfo, Coin, CustomQuery, Event, Querier,
    StdResult, Storage, Uint128, Uint64,
};
use cw_multi_test::{AppResponse, BankSudo, CosmosRouter, Stargate};
use cw_storage_plus::{Item, Map};

use memefactory_std::bank::MsgSend;
use memefactory_std::coin::{factory_denom, lp_share_denom};
use memefactory_std::constants::LP_SHARES_BURN_AMOUNT;
use memefactory_std::gamm::create_pool::MsgCreateBalancerPool;
use memefactory_std::gamm::query::{QueryNumPoolsResponse, NUM_POOLS_PATH};
use memefactory_std::gamm::{POOL_CREATED_EVENT, POOL_ID_ATTRIBUTE};
use memefactory_std::tokenfactory::change_admin::MsgChangeAdmin;
use memefactory_std::tokenfactory::common::{decode, encode};
use memefactory_std::tokenfactory::create_denom::MsgCreateDenom;
use memefactory_std::tokenfactory::mint::MsgMint;
use memefactory_std::tokenfactory::responses::MsgCreateDenomResponse;
use memefactory_std::tokenfactory::set_denom_metadata::MsgSetDenomMetadata;

use crate::multi_test::queries::{
    DenomAuthorityMetadata, DenomMetadataRecord, QueryDenomAuthorityMetadataResponse,
    QueryDenomMetadataResponse, QueryDenomRequest, DENOM_AUTHORITY_METADATA_PATH,
    DENOM_METADATA_PATH,
};

const DENOM_ADMINS: Map<&str, String> = Map::new("tokenfactory_denom_admins");
const DENOM_METADATA: Map<&str, DenomMetadataRecord> = Map::new("tokenfactory_denom_metadata");
const NUM_POOLS: Item<u64> = Item::new("gamm_num_pools");

const MAX_SUBDENOM_LENGTH: usize = 44;
/// 1.0 as a `cosmos.Dec` wire value
const DEC_ONE: u128 = 1_000_000_000_000_000_000;

/// Simulates the parts of the Osmosis tokenfactory, gamm and bank modules a launch touches.
pub struct StargateMock {}

/// Overrides the number of pools already on chain, so the next pool gets `num_pools + 1` as id.
pub fn set_num_pools(storage: &mut dyn Storage, num_pools: u64) -> StdResult<()> {
    NUM_POOLS.save(storage, &num_pools)
}

impl Stargate for StargateMock {
    fn execute<ExecC, QueryC>(
        &self,
        api: &dyn Api,
        storage: &mut dyn Storage,
        router: &dyn CosmosRouter<ExecC = ExecC, QueryC = QueryC>,
        block: &BlockInfo,
        sender: Addr,
        type_url: String,
        value: Binary,
    ) -> AnyResult<AppResponse>
    where
        ExecC: Debug + Clone + PartialEq + JsonSchema + DeserializeOwned + 'static,
        QueryC: CustomQuery + DeserializeOwned + 'static,
    {
        match type_url.as_str() {
            "/osmosis.tokenfactory.v1beta1.MsgCreateDenom" => {
                let tf_msg: MsgCreateDenom = decode(&value)?;
                ensure_signer(&sender, &tf_msg.sender)?;
                ensure!(
                    !tf_msg.subdenom.is_empty() && tf_msg.subdenom.len() <= MAX_SUBDENOM_LENGTH,
                    "subdenom too long, max length is {MAX_SUBDENOM_LENGTH} bytes: invalid denom"
                );

                let denom = factory_denom(&tf_msg.sender, &tf_msg.subdenom);
                ensure!(
                    !DENOM_ADMINS.has(storage, denom.as_str()),
                    "attempting to create a denom that already exists (has bank metadata): {denom}"
                );
                DENOM_ADMINS.save(storage, denom.as_str(), &tf_msg.sender)?;

                Ok(AppResponse {
                    events: vec![Event::new("create_denom")
                        .add_attribute("creator", &tf_msg.sender)
                        .add_attribute("new_token_denom", &denom)],
                    data: Some(encode(&MsgCreateDenomResponse {
                        new_token_denom: denom,
                    })),
                })
            }
            "/osmosis.tokenfactory.v1beta1.MsgMint" => {
                let tf_msg: MsgMint = decode(&value)?;
                ensure_signer(&sender, &tf_msg.sender)?;
                let mint_coin = tf_msg
                    .amount
                    .as_ref()
                    .ok_or_else(|| anyhow!("mint amount is required"))?
                    .to_coin()?;
                ensure_admin(storage, &mint_coin.denom, &tf_msg.sender)?;
                ensure!(!mint_coin.amount.is_zero(), "amount must be positive");

                let mint_to_address = if tf_msg.mint_to_address.is_empty() {
                    tf_msg.sender.clone()
                } else {
                    tf_msg.mint_to_address
                };
                let bank_sudo = BankSudo::Mint {
                    to_address: mint_to_address.clone(),
                    amount: vec![mint_coin.clone()],
                };
                let mut response = router.sudo(api, storage, block, bank_sudo.into())?;
                response.events.push(
                    Event::new("tf_mint")
                        .add_attribute("mint_to_address", mint_to_address)
                        .add_attribute("amount", mint_coin.to_string()),
                );

                Ok(response)
            }
            "/osmosis.tokenfactory.v1beta1.MsgSetDenomMetadata" => {
                let tf_msg: MsgSetDenomMetadata = decode(&value)?;
                ensure_signer(&sender, &tf_msg.sender)?;
                let metadata = tf_msg
                    .metadata
                    .ok_or_else(|| anyhow!("metadata is required"))?;
                ensure_admin(storage, &metadata.base, &tf_msg.sender)?;
                ensure!(
                    metadata
                        .denom_units
                        .first()
                        .map_or(false, |unit| unit.denom == metadata.base && unit.exponent == 0),
                    "metadata's first denomination unit must be the one with base denom '{}'",
                    metadata.base
                );

                let record = DenomMetadataRecord::from(&metadata);
                DENOM_METADATA.save(storage, metadata.base.as_str(), &record)?;

                Ok(AppResponse {
                    events: vec![Event::new("set_denom_metadata")
                        .add_attribute("denom", &metadata.base)],
                    data: None,
                })
            }
            "/osmosis.tokenfactory.v1beta1.MsgChangeAdmin" => {
                let tf_msg: MsgChangeAdmin = decode(&value)?;
                ensure_signer(&sender, &tf_msg.sender)?;
                ensure_admin(storage, &tf_msg.denom, &tf_msg.sender)?;
                ensure!(
                    !tf_msg.new_admin.is_empty(),
                    "Invalid address (empty address string is not allowed): invalid address"
                );
                DENOM_ADMINS.save(storage, tf_msg.denom.as_str(), &tf_msg.new_admin)?;

                Ok(AppResponse {
                    events: vec![Event::new("change_admin")
                        .add_attribute("denom", &tf_msg.denom)
                        .add_attribute("new_admin", &tf_msg.new_admin)],
                    data: None,
                })
            }
            "/osmosis.gamm.poolmodels.balancer.v1beta1.MsgCreateBalancerPool" => {
                let gamm_msg: MsgCreateBalancerPool = decode(&value)?;
                ensure_signer(&sender, &gamm_msg.sender)?;
                ensure!(
                    gamm_msg.pool_assets.len() >= 2,
                    "pool should have at least 2 assets, as they must be swapping between at least two assets"
                );

                let params = gamm_msg
                    .pool_params
                    .ok_or_else(|| anyhow!("pool params are required"))?;
                for fee in [&params.swap_fee, &params.exit_fee] {
                    let fee = Uint128::from_str(fee)?;
                    ensure!(fee < Uint128::new(DEC_ONE), "pool fee must be lower than 1");
                }

                let mut tokens: Vec<Coin> = vec![];
                for asset in &gamm_msg.pool_assets {
                    let token = asset
                        .token
                        .as_ref()
                        .ok_or_else(|| anyhow!("pool asset token is required"))?
                        .to_coin()?;
                    ensure!(
                        !token.amount.is_zero(),
                        "token amount must be positive: {}",
                        token.denom
                    );
                    ensure!(
                        !Uint128::from_str(&asset.weight)?.is_zero(),
                        "token weight must be positive: {}",
                        token.denom
                    );
                    tokens.push(token);
                }

                let pool_id = NUM_POOLS.may_load(storage)?.unwrap_or_default() + 1;
                NUM_POOLS.save(storage, &pool_id)?;

                let escrow = pool_escrow_address(&sender, pool_id)?;
                let mut events = router
                    .execute(
                        api,
                        storage,
                        block,
                        sender.clone(),
                        BankMsg::Send {
                            to_address: escrow,
                            amount: tokens,
                        }
                        .into(),
                    )?
                    .events;

                let shares = BankSudo::Mint {
                    to_address: sender.to_string(),
                    amount: vec![Coin {
                        denom: lp_share_denom(pool_id),
                        amount: Uint128::new(LP_SHARES_BURN_AMOUNT),
                    }],
                };
                events.extend(router.sudo(api, storage, block, shares.into())?.events);
                events.push(
                    Event::new(POOL_CREATED_EVENT)
                        .add_attribute(POOL_ID_ATTRIBUTE, pool_id.to_string()),
                );

                Ok(AppResponse { events, data: None })
            }
            "/cosmos.bank.v1beta1.MsgSend" => {
                let bank_msg: MsgSend = decode(&value)?;
                ensure_signer(&sender, &bank_msg.from_address)?;
                let amount = bank_msg
                    .amount
                    .iter()
                    .map(|coin| coin.to_coin())
                    .collect::<StdResult<Vec<Coin>>>()?;

                router.execute(
                    api,
                    storage,
                    block,
                    sender,
                    BankMsg::Send {
                        to_address: bank_msg.to_address,
                        amount,
                    }
                    .into(),
                )
            }
            _ => Err(anyhow!(
                "Unexpected exec msg {type_url} from {sender:?}"
            )),
        }
    }

    fn query(
        &self,
        _api: &dyn Api,
        storage: &dyn Storage,
        _querier: &dyn Querier,
        _block: &BlockInfo,
        path: String,
        data: Binary,
    ) -> AnyResult<Binary> {
        match path.as_str() {
            NUM_POOLS_PATH => Ok(to_json_binary(&QueryNumPoolsResponse {
                num_pools: Uint64::new(NUM_POOLS.may_load(storage)?.unwrap_or_default()),
            })?),
            DENOM_AUTHORITY_METADATA_PATH => {
                let request: QueryDenomRequest = decode(&data)?;
                let admin = DENOM_ADMINS
                    .may_load(storage, request.denom.as_str())?
                    .ok_or_else(|| anyhow!("denom does not exist: {}", request.denom))?;

                Ok(to_json_binary(&QueryDenomAuthorityMetadataResponse {
                    authority_metadata: DenomAuthorityMetadata { admin },
                })?)
            }
            DENOM_METADATA_PATH => {
                let request: QueryDenomRequest = decode(&data)?;
                let metadata = DENOM_METADATA
                    .may_load(storage, request.denom.as_str())?
                    .ok_or_else(|| anyhow!("client metadata for denom {}", request.denom))?;

                Ok(to_json_binary(&QueryDenomMetadataResponse { metadata })?)
            }
            _ => Err(anyhow!("Unexpected stargate query request {path}")),
        }
    }
}

/// The account signing the transaction must be the one named in the message.
fn ensure_signer(signer: &Addr, msg_sender: &str) -> AnyResult<()> {
    if signer.as_str() != msg_sender {
        bail!("invalid signer {signer}, message is from {msg_sender}: unauthorized");
    }

    Ok(())
}

fn ensure_admin(storage: &dyn Storage, denom: &str, sender: &str) -> AnyResult<()> {
    let admin = DENOM_ADMINS
        .may_load(storage, denom)?
        .ok_or_else(|| anyhow!("denom does not exist: {denom}"))?;
    ensure!(
        admin == sender,
        "unauthorized account: {sender} is not the admin of {denom}"
    );

    Ok(())
}

/// Deterministic module account holding the liquidity of the given pool.
fn pool_escrow_address(sender: &Addr, pool_id: u64) -> AnyResult<String> {
    let (hrp, _) = bech32::decode(sender.as_str()).map_err(|err| anyhow!("{err}"))?;
    let mut data = [0u8; 20];
    data[..8].copy_from_slice(b"gammpool");
    data[12..].copy_from_slice(&pool_id.to_be_bytes());

    bech32::encode::<Bech32>(hrp, &data).map_err(|err| anyhow!("{err}"))
}
