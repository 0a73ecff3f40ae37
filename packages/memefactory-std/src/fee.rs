use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coins, Coin, Uint64};

use crate::bank::MsgSend;
use crate::gamm::create_pool::MsgCreateBalancerPool;
use crate::tokenfactory::change_admin::MsgChangeAdmin;
use crate::tokenfactory::create_denom::MsgCreateDenom;
use crate::tokenfactory::mint::MsgMint;
use crate::tokenfactory::set_denom_metadata::MsgSetDenomMetadata;

/// Kinds of message a launch transaction can carry.
#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum MsgKind {
    CreateDenom,
    Mint,
    SetDenomMetadata,
    ChangeAdmin,
    CreateBalancerPool,
    Send,
}

impl MsgKind {
    /// Gas budgeted for one message of this kind. These are fixed estimates, not simulated.
    pub fn gas(&self) -> u64 {
        match self {
            MsgKind::CreateDenom => 1_400_000,
            MsgKind::Mint => 100_000,
            MsgKind::SetDenomMetadata => 200_000,
            MsgKind::ChangeAdmin => 200_000,
            MsgKind::CreateBalancerPool => 200_000,
            MsgKind::Send => 100_000,
        }
    }

    pub fn type_url(&self) -> &'static str {
        match self {
            MsgKind::CreateDenom => MsgCreateDenom::TYPE_URL,
            MsgKind::Mint => MsgMint::TYPE_URL,
            MsgKind::SetDenomMetadata => MsgSetDenomMetadata::TYPE_URL,
            MsgKind::ChangeAdmin => MsgChangeAdmin::TYPE_URL,
            MsgKind::CreateBalancerPool => MsgCreateBalancerPool::TYPE_URL,
            MsgKind::Send => MsgSend::TYPE_URL,
        }
    }
}

/// Fee handed to the signing client.
#[cw_serde]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: Uint64,
}

impl StdFee {
    /// A fee bidding nothing on top of the gas limit, leaving the gas price to the signing client.
    pub fn zero_bid(gas: u64, denom: &str) -> Self {
        StdFee {
            amount: coins(0, denom),
            gas: Uint64::new(gas),
        }
    }
}

/// Sums the gas estimates of a transaction.
pub fn total_gas(fees: &[u64]) -> u64 {
    fees.iter().sum()
}
