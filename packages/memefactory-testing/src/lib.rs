use cosmwasm_std::CosmosMsg;
use memefactory_std::fee::StdFee;

pub mod mock_wallet;
#[cfg(not(target_arch = "wasm32"))]
pub mod multi_test;

/// A transaction handed to a test wallet for signing.
#[derive(Clone, Debug, PartialEq)]
pub struct Broadcast {
    pub signer: String,
    pub messages: Vec<CosmosMsg>,
    pub fee: StdFee,
    pub memo: String,
}
