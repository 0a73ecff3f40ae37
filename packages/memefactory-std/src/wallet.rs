use cosmwasm_schema::cw_serde;
use cosmwasm_std::CosmosMsg;
use thiserror::Error;

use crate::constants::REJECTED_MARKER;
use crate::fee::StdFee;
use crate::registry::Registry;

/// Error raised by a wallet or its signing client. Wallets only give us a message, so that is all
/// this carries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct WalletError {
    pub message: String,
}

impl WalletError {
    pub fn new(message: impl Into<String>) -> Self {
        WalletError {
            message: message.into(),
        }
    }

    /// Whether the user declined the signing request in the wallet.
    pub fn is_rejection(&self) -> bool {
        self.message.contains(REJECTED_MARKER)
    }
}

#[cw_serde]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

#[cw_serde]
pub struct TxEvent {
    #[serde(rename = "type")]
    pub ty: String,
    pub attributes: Vec<EventAttribute>,
}

/// Result of a broadcast transaction, as reported by the chain once included in a block.
#[cw_serde]
pub struct DeliverTxResponse {
    /// 0 on success, the module error code otherwise
    pub code: u32,
    pub raw_log: Option<String>,
    pub transaction_hash: String,
    pub height: u64,
    pub events: Vec<TxEvent>,
}

impl DeliverTxResponse {
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// First value of the attribute `key` on an event of type `ty`.
    pub fn event_attribute(&self, ty: &str, key: &str) -> Option<&str> {
        self.events
            .iter()
            .filter(|event| event.ty == ty)
            .flat_map(|event| event.attributes.iter())
            .find(|attribute| attribute.key == key)
            .map(|attribute| attribute.value.as_str())
    }
}

/// A connected browser or hardware wallet. Keys never leave it.
pub trait Wallet {
    /// Prompts the user to connect the wallet to the page.
    fn connect(&mut self) -> Result<(), WalletError>;

    /// Address of the connected account, if any.
    fn address(&self) -> Option<String>;

    fn rpc_endpoint(&self) -> Result<String, WalletError>;

    /// Client signing with the connected account.
    fn signing_client(&mut self) -> Result<&mut dyn SigningClient, WalletError>;
}

pub trait SigningClient {
    /// Replaces the message types the client is able to encode and sign.
    fn set_registry(&mut self, registry: Registry);

    /// Signs the messages as a single transaction and broadcasts it, waiting for its inclusion.
    /// Sequence numbers and gas price are the client's business.
    fn sign_and_broadcast(
        &mut self,
        signer: &str,
        messages: Vec<CosmosMsg>,
        fee: StdFee,
        memo: &str,
    ) -> Result<DeliverTxResponse, WalletError>;
}
