use anyhow::Result as AnyResult;
use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::{Addr, Coin, CosmosMsg, Empty, Event, StdResult, Uint128};
use cw_multi_test::addons::MockApiBech32;
use cw_multi_test::{
    next_block, App, AppBuilder, BankKeeper, BankSudo, DistributionKeeper, FailingModule,
    GovFailingModule, IbcFailingModule, StakeKeeper, WasmKeeper,
};

use memefactory_std::fee::StdFee;
use memefactory_std::gamm::query::PoolQuerier;
use memefactory_std::registry::{type_url_of, Registry};
use memefactory_std::wallet::{
    DeliverTxResponse, EventAttribute, SigningClient, TxEvent, Wallet, WalletError,
};

use crate::multi_test::queries::{query_denom_admin, query_denom_metadata, DenomMetadataRecord};
use crate::multi_test::stargate_mock::{set_num_pools, StargateMock};
use crate::Broadcast;

pub const BECH32_PREFIX: &str = "osmo";
pub const LOCAL_RPC_ENDPOINT: &str = "http://localhost:26657";
/// Code reported for transactions the simulated chain failed to execute
pub const FAILED_TX_CODE: u32 = 1;

pub type OsmosisApp = App<
    BankKeeper,
    MockApiBech32,
    MockStorage,
    FailingModule<Empty, Empty, Empty>,
    WasmKeeper<Empty, Empty>,
    StakeKeeper,
    DistributionKeeper,
    IbcFailingModule,
    GovFailingModule,
    StargateMock,
>;

/// Builds an app simulating the Osmosis modules touched by a launch.
pub fn osmosis_app() -> OsmosisApp {
    AppBuilder::new()
        .with_api(MockApiBech32::new(BECH32_PREFIX))
        .with_stargate(StargateMock {})
        .build(|_, _, _| {})
}

/// A wallet signing with an account of a simulated Osmosis chain. Every broadcast is executed
/// atomically in a new block.
pub struct MultiTestWallet {
    app: OsmosisApp,
    account: Addr,
    connected: bool,
    registry: Option<Registry>,
    reject_signing: bool,
    broadcasts: Vec<Broadcast>,
    tx_count: u64,
}

impl MultiTestWallet {
    /// Creates a disconnected wallet whose account holds `balances`.
    pub fn new(balances: Vec<Coin>) -> AnyResult<Self> {
        let mut app = osmosis_app();
        let account = app.api().addr_make("creator");
        app.init_modules(|router, _, storage| {
            router.bank.init_balance(storage, &account, balances)
        })?;

        Ok(MultiTestWallet {
            app,
            account,
            connected: false,
            registry: None,
            reject_signing: false,
            broadcasts: vec![],
            tx_count: 0,
        })
    }

    /// Makes the user decline every signing request.
    pub fn rejecting_signatures(mut self) -> Self {
        self.reject_signing = true;
        self
    }

    /// Pretends `num_pools` pools already exist on chain.
    pub fn with_existing_pools(mut self, num_pools: u64) -> AnyResult<Self> {
        self.app
            .init_modules(|_, _, storage| set_num_pools(storage, num_pools))?;
        Ok(self)
    }

    pub fn account(&self) -> &Addr {
        &self.account
    }

    pub fn app(&self) -> &OsmosisApp {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut OsmosisApp {
        &mut self.app
    }

    pub fn registry(&self) -> Option<&Registry> {
        self.registry.as_ref()
    }

    pub fn broadcasts(&self) -> &[Broadcast] {
        &self.broadcasts
    }

    /// Mints `amount` straight into `address`.
    pub fn fund(&mut self, address: &str, amount: Vec<Coin>) -> AnyResult<()> {
        self.app.sudo(
            BankSudo::Mint {
                to_address: address.to_string(),
                amount,
            }
            .into(),
        )?;
        Ok(())
    }

    pub fn balance(&self, address: &str, denom: &str) -> StdResult<Uint128> {
        Ok(self.app.wrap().query_balance(address, denom)?.amount)
    }

    pub fn denom_admin(&self, denom: &str) -> StdResult<String> {
        query_denom_admin(&self.app.wrap(), denom)
    }

    pub fn denom_metadata(&self, denom: &str) -> StdResult<DenomMetadataRecord> {
        query_denom_metadata(&self.app.wrap(), denom)
    }

    fn ensure_signable(&self, signer: &str, messages: &[CosmosMsg]) -> Result<(), WalletError> {
        if signer != self.account.as_str() {
            return Err(WalletError::new(format!(
                "Signer {signer} is not the connected account"
            )));
        }

        let registry = self
            .registry
            .as_ref()
            .ok_or_else(|| WalletError::new("No message type registry set"))?;
        for msg in messages {
            let type_url = type_url_of(msg)
                .ok_or_else(|| WalletError::new(format!("Unsupported message {msg:?}")))?;
            if !registry.contains(type_url) {
                return Err(WalletError::new(format!("Unregistered type url: {type_url}")));
            }
        }

        Ok(())
    }
}

impl Wallet for MultiTestWallet {
    fn connect(&mut self) -> Result<(), WalletError> {
        self.connected = true;
        Ok(())
    }

    fn address(&self) -> Option<String> {
        self.connected.then(|| self.account.to_string())
    }

    fn rpc_endpoint(&self) -> Result<String, WalletError> {
        Ok(LOCAL_RPC_ENDPOINT.to_string())
    }

    fn signing_client(&mut self) -> Result<&mut dyn SigningClient, WalletError> {
        if !self.connected {
            return Err(WalletError::new("Wallet is not connected"));
        }

        Ok(self)
    }
}

impl SigningClient for MultiTestWallet {
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
        if self.reject_signing {
            return Err(WalletError::new("Request rejected"));
        }
        self.ensure_signable(signer, &messages)?;

        self.broadcasts.push(Broadcast {
            signer: signer.to_string(),
            messages: messages.clone(),
            fee,
            memo: memo.to_string(),
        });

        self.app.update_block(next_block);
        self.tx_count += 1;
        let transaction_hash = format!("{:064X}", self.tx_count);
        let height = self.app.block_info().height;

        let response = match self.app.execute_multi(self.account.clone(), messages) {
            Ok(responses) => DeliverTxResponse {
                code: 0,
                raw_log: None,
                transaction_hash,
                height,
                events: responses
                    .iter()
                    .flat_map(|response| response.events.iter())
                    .map(tx_event)
                    .collect(),
            },
            Err(err) => DeliverTxResponse {
                code: FAILED_TX_CODE,
                raw_log: Some(format!("{err:#}")),
                transaction_hash,
                height,
                events: vec![],
            },
        };

        Ok(response)
    }
}

impl PoolQuerier for MultiTestWallet {
    fn num_pools(&self) -> StdResult<u64> {
        self.app.wrap().num_pools()
    }
}

fn tx_event(event: &Event) -> TxEvent {
    TxEvent {
        ty: event.ty.clone(),
        attributes: event
            .attributes
            .iter()
            .map(|attribute| EventAttribute {
                key: attribute.key.clone(),
                value: attribute.value.clone(),
            })
            .collect(),
    }
}
