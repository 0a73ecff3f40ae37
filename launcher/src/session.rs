use std::time::Instant;

use memefactory_std::chain::{get_address_link, Chain};
use memefactory_std::config::NetworkConfig;
use memefactory_std::format::format_address;
use memefactory_std::gamm::query::PoolQuerier;
use memefactory_std::wallet::Wallet;
use tracing::{info, warn};

use crate::form::TokenForm;
use crate::notice::Notice;
use crate::pools::PoolCountPoller;
use crate::submit::{submit, LaunchReceipt};
use crate::summary::SuccessSummary;
use crate::LaunchError;

/// State of one user session: the form being filled, the pool count kept fresh in the background,
/// and the outcome of the last launch.
#[derive(Debug)]
pub struct Launcher {
    config: NetworkConfig,
    chain: Chain,
    form: TokenForm,
    show_pool_options: bool,
    submitting: bool,
    success: Option<LaunchReceipt>,
    notice: Option<Notice>,
    pools: PoolCountPoller,
}

impl Launcher {
    pub fn new(config: NetworkConfig) -> Self {
        Launcher {
            chain: config.chain(),
            pools: PoolCountPoller::for_network(&config),
            config,
            form: TokenForm::default(),
            show_pool_options: false,
            submitting: false,
            success: None,
            notice: None,
        }
    }

    /// Starts a session on the network selected by the environment.
    pub fn from_env() -> Self {
        Self::new(NetworkConfig::from_env())
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn form(&self) -> &TokenForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TokenForm {
        &mut self.form
    }

    pub fn show_pool_options(&self) -> bool {
        self.show_pool_options
    }

    pub fn toggle_pool_options(&mut self) {
        self.show_pool_options = !self.show_pool_options;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn success(&self) -> Option<&LaunchReceipt> {
        self.success.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn pools(&self) -> &PoolCountPoller {
        &self.pools
    }

    pub fn refresh_pool_count<Q: PoolQuerier + ?Sized>(
        &mut self,
        querier: &Q,
        now: Instant,
    ) -> Option<u64> {
        self.pools.poll(querier, now)
    }

    pub fn connect(&mut self, wallet: &mut dyn Wallet) -> Result<(), LaunchError> {
        if let Err(err) = wallet.connect() {
            let err = LaunchError::from(err);
            self.notice = Some(err.notice());
            return Err(err);
        }

        match wallet.rpc_endpoint() {
            Ok(endpoint) => info!(
                chain = %self.config.chain_name,
                address = ?wallet.address(),
                rpc_endpoint = %endpoint,
                "wallet connected"
            ),
            Err(err) => warn!(chain = %self.config.chain_name, error = %err, "no rpc endpoint"),
        }

        Ok(())
    }

    /// Marks a launch as in flight, clearing the outcome of the previous one. Fails while another
    /// launch is in flight.
    pub fn begin_submit(&mut self) -> Result<(), LaunchError> {
        if self.submitting {
            return Err(LaunchError::AlreadySubmitting {});
        }

        self.submitting = true;
        self.success = None;
        self.notice = None;
        Ok(())
    }

    /// Records the outcome of the launch in flight: the receipt on success, a notice otherwise.
    pub fn finish_submit(
        &mut self,
        result: Result<LaunchReceipt, LaunchError>,
    ) -> Result<(), LaunchError> {
        self.submitting = false;

        match result {
            Ok(receipt) => {
                self.success = Some(receipt);
                Ok(())
            }
            Err(err) => {
                self.notice = Some(err.notice());
                Err(err)
            }
        }
    }

    /// Launches the token in the form with the connected wallet. Ignored while a launch is
    /// already in flight.
    pub fn submit(&mut self, wallet: &mut dyn Wallet) -> Result<(), LaunchError> {
        self.begin_submit()?;
        let result = submit(&self.config, wallet, &self.form, self.pools.latest());

        self.finish_submit(result)
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn success_summary(&self) -> Option<SuccessSummary> {
        self.success.as_ref().map(|receipt| {
            SuccessSummary::new(
                &self.config,
                &self.chain,
                &self.form.name,
                &self.form.symbol,
                receipt,
            )
        })
    }

    /// Shortened address of the connected account, or the raw address if it isn't bech32.
    pub fn connected_label(&self, wallet: &dyn Wallet) -> Option<String> {
        wallet
            .address()
            .map(|address| format_address(&address).unwrap_or(address))
    }

    /// Explorer page of the connected account.
    pub fn connected_link(&self, wallet: &dyn Wallet) -> Option<String> {
        wallet
            .address()
            .and_then(|address| get_address_link(&self.chain, &address))
    }
}
