use std::collections::VecDeque;

use cosmwasm_std::{CosmosMsg, StdError, StdResult};
use memefactory_std::fee::StdFee;
use memefactory_std::gamm::query::PoolQuerier;
use memefactory_std::registry::{type_url_of, Registry};
use memefactory_std::wallet::{DeliverTxResponse, SigningClient, Wallet, WalletError};

use crate::Broadcast;

/// A wallet answering broadcasts with scripted responses, without executing anything.
#[derive(Debug, Default)]
pub struct MockWallet {
    account: String,
    connected: bool,
    refuse_connection: bool,
    rpc_endpoint: Option<String>,
    registry: Option<Registry>,
    responses: VecDeque<Result<DeliverTxResponse, WalletError>>,
    broadcasts: Vec<Broadcast>,
    signing_client_requests: usize,
    num_pools: Option<u64>,
}

impl MockWallet {
    pub fn new(account: impl Into<String>) -> Self {
        MockWallet {
            account: account.into(),
            rpc_endpoint: Some("https://rpc.osmosis.zone".to_string()),
            ..Default::default()
        }
    }

    /// A wallet the user already connected.
    pub fn connected(account: impl Into<String>) -> Self {
        MockWallet {
            connected: true,
            ..Self::new(account)
        }
    }

    pub fn refusing_connection(mut self) -> Self {
        self.refuse_connection = true;
        self
    }

    pub fn without_rpc_endpoint(mut self) -> Self {
        self.rpc_endpoint = None;
        self
    }

    /// Queues the response of the next broadcast. Broadcasts with nothing queued succeed.
    pub fn with_response(mut self, response: DeliverTxResponse) -> Self {
        self.responses.push_back(Ok(response));
        self
    }

    /// Queues an error raised by the next broadcast.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.responses.push_back(Err(WalletError::new(message)));
        self
    }

    pub fn with_num_pools(mut self, num_pools: u64) -> Self {
        self.num_pools = Some(num_pools);
        self
    }

    pub fn broadcasts(&self) -> &[Broadcast] {
        &self.broadcasts
    }

    pub fn registry(&self) -> Option<&Registry> {
        self.registry.as_ref()
    }

    pub fn signing_client_requests(&self) -> usize {
        self.signing_client_requests
    }

    fn default_response(&self) -> DeliverTxResponse {
        DeliverTxResponse {
            code: 0,
            raw_log: None,
            transaction_hash: format!("{:064X}", self.broadcasts.len()),
            height: 100 + self.broadcasts.len() as u64,
            events: vec![],
        }
    }
}

impl Wallet for MockWallet {
    fn connect(&mut self) -> Result<(), WalletError> {
        if self.refuse_connection {
            return Err(WalletError::new("Request rejected"));
        }

        self.connected = true;
        Ok(())
    }

    fn address(&self) -> Option<String> {
        self.connected.then(|| self.account.clone())
    }

    fn rpc_endpoint(&self) -> Result<String, WalletError> {
        self.rpc_endpoint
            .clone()
            .ok_or_else(|| WalletError::new("No RPC endpoint available"))
    }

    fn signing_client(&mut self) -> Result<&mut dyn SigningClient, WalletError> {
        self.signing_client_requests += 1;
        if !self.connected {
            return Err(WalletError::new("Wallet is not connected"));
        }

        Ok(self)
    }
}

impl SigningClient for MockWallet {
    fn set_registry(&mut self, registry: Registry) {
        self.registry = Some(registry);
    }

    fn sign_and_broadcast(
        &mut self,
        signer: &str,
        messages: Vec<CosmosMsg>,
        fee: StdFee,
        memo: &str,
    ) -> Result<DeliverTxResponse, WalletError> {
        let registry = self
            .registry
            .as_ref()
            .ok_or_else(|| WalletError::new("No message type registry set"))?;
        if let Some(type_url) = messages
            .iter()
            .filter_map(type_url_of)
            .find(|type_url| !registry.contains(type_url))
        {
            return Err(WalletError::new(format!("Unregistered type url: {type_url}")));
        }

        self.broadcasts.push(Broadcast {
            signer: signer.to_string(),
            messages,
            fee,
            memo: memo.to_string(),
        });

        match self.responses.pop_front() {
            Some(response) => response,
            None => Ok(self.default_response()),
        }
    }
}

impl PoolQuerier for MockWallet {
    fn num_pools(&self) -> StdResult<u64> {
        self.num_pools
            .ok_or_else(|| StdError::generic_err("pool count query failed"))
    }
}
