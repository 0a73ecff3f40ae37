use std::time::Instant;

use cosmwasm_std::{Coin, StdResult, Uint128};

use memefactory_launcher::form::TokenForm;
use memefactory_launcher::session::Launcher;
use memefactory_launcher::LaunchError;
use memefactory_std::config::NetworkConfig;
use memefactory_std::gamm::query::PoolQuerier;
use memefactory_testing::multi_test::queries::DenomMetadataRecord;
use memefactory_testing::multi_test::stargate_mock::set_num_pools;
use memefactory_testing::multi_test::wallet::MultiTestWallet;

pub struct TestingSuite {
    pub wallet: MultiTestWallet,
    pub launcher: Launcher,
}

/// TestingSuite helpers
impl TestingSuite {
    pub(crate) fn creator(&self) -> String {
        self.wallet.account().to_string()
    }

    /// Creates pools on chain behind the launcher's back.
    pub(crate) fn set_num_pools(&mut self, num_pools: u64) -> &mut Self {
        self.wallet
            .app_mut()
            .init_modules(|_, _, storage| set_num_pools(storage, num_pools))
            .unwrap();

        self
    }
}

/// Instantiate
impl TestingSuite {
    pub(crate) fn default_with_balances(initial_balance: Vec<Coin>) -> Self {
        Self {
            wallet: MultiTestWallet::new(initial_balance).unwrap(),
            launcher: Launcher::new(NetworkConfig::mainnet()),
        }
    }

    pub(crate) fn rejecting_signatures(self) -> Self {
        Self {
            wallet: self.wallet.rejecting_signatures(),
            ..self
        }
    }

    #[track_caller]
    pub(crate) fn connect(&mut self) -> &mut Self {
        self.launcher.connect(&mut self.wallet).unwrap();

        self
    }
}

/// Launcher actions
impl TestingSuite {
    pub(crate) fn fill_form(&mut self, fill: impl FnOnce(&mut TokenForm)) -> &mut Self {
        fill(self.launcher.form_mut());

        self
    }

    #[track_caller]
    pub(crate) fn refresh_pool_count(&mut self) -> &mut Self {
        self.launcher
            .refresh_pool_count(&self.wallet, Instant::now())
            .unwrap();

        self
    }

    #[track_caller]
    pub(crate) fn launch(
        &mut self,
        result: impl Fn(Result<(), LaunchError>, &Launcher),
    ) -> &mut Self {
        let outcome = self.launcher.submit(&mut self.wallet);
        result(outcome, &self.launcher);

        self
    }
}

/// Queries
impl TestingSuite {
    #[track_caller]
    pub(crate) fn query_balance(
        &mut self,
        address: &str,
        denom: &str,
        result: impl Fn(Uint128),
    ) -> &mut Self {
        result(self.wallet.balance(address, denom).unwrap());

        self
    }

    pub(crate) fn query_denom_admin(
        &mut self,
        denom: &str,
        result: impl Fn(StdResult<String>),
    ) -> &mut Self {
        result(self.wallet.denom_admin(denom));

        self
    }

    pub(crate) fn query_denom_metadata(
        &mut self,
        denom: &str,
        result: impl Fn(StdResult<DenomMetadataRecord>),
    ) -> &mut Self {
        result(self.wallet.denom_metadata(denom));

        self
    }

    #[track_caller]
    pub(crate) fn query_num_pools(&mut self, result: impl Fn(u64)) -> &mut Self {
        result(self.wallet.num_pools().unwrap());

        self
    }
}
