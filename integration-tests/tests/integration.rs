use cosmwasm_std::{coin, Uint128};

use memefactory_launcher::notice::Notice;
use memefactory_launcher::LaunchError;
use memefactory_std::constants::{BURN_ADDRESS, LP_SHARES_BURN_AMOUNT};
use memefactory_std::wallet::Wallet;

use crate::common::suite::TestingSuite;

mod common;

const OSMO_BALANCE: u128 = 10_000_000_000;

fn suite() -> TestingSuite {
    TestingSuite::default_with_balances(vec![coin(OSMO_BALANCE, "uosmo")])
}

#[test]
fn launch_token() {
    let mut suite = suite();
    let creator = suite.creator();
    let denom = format!("factory/{creator}/awe");

    suite
        .connect()
        .fill_form(|form| {
            form.name = "Awesome".to_string();
            form.symbol = "AWE".to_string();
            form.description = "The most awesome token".to_string();
            form.image_url = "https://memefactory.zone/awe.png".to_string();
        })
        .launch(|result, launcher| {
            result.unwrap();

            let receipt = launcher.success().unwrap();
            assert_eq!(receipt.pool_id, None);
            assert_eq!(receipt.response.code, 0);
            assert_eq!(launcher.notice(), None);

            let summary = launcher.success_summary().unwrap();
            assert_eq!(summary.title, "Awesome deployed to Osmosis!");
            assert_eq!(summary.pool_link, None);
            assert_eq!(
                summary.transaction_link,
                Some(format!(
                    "https://www.mintscan.io/osmosis/txs/{}",
                    receipt.transaction_hash
                ))
            );
        })
        .query_balance(&creator, &denom, |balance| {
            assert_eq!(balance, Uint128::new(1_000_000_000_000));
        })
        .query_denom_admin(&denom, |admin| {
            assert_eq!(admin.unwrap(), BURN_ADDRESS);
        })
        .query_denom_metadata(&denom, |metadata| {
            let metadata = metadata.unwrap();
            assert_eq!(metadata.base, denom);
            assert_eq!(metadata.display, "awe");
            assert_eq!(metadata.name, "Awesome");
            assert_eq!(metadata.symbol, "AWE");
            assert_eq!(metadata.description, "The most awesome token");
            assert_eq!(metadata.uri, "https://memefactory.zone/awe.png");
            assert_eq!(metadata.denom_units.len(), 2);
            assert_eq!(metadata.denom_units[1].denom, "awe");
            assert_eq!(metadata.denom_units[1].exponent, 6);
        });

    let label = suite.launcher.connected_label(&suite.wallet).unwrap();
    assert!(label.starts_with("osmo1"));
    assert_eq!(label.len(), "osmo".len() + 6 + 3 + 6);
    assert!(creator.ends_with(&label[label.len() - 6..]));

    let broadcasts = suite.wallet.broadcasts();
    assert_eq!(broadcasts.len(), 1);
    assert_eq!(broadcasts[0].memo, "Created via memefactory");
    assert_eq!(broadcasts[0].fee.gas.u64(), 1_900_000);
}

#[test]
fn launch_token_with_pool() {
    let mut suite = suite();
    let creator = suite.creator();
    let denom = format!("factory/{creator}/awe");

    suite
        .set_num_pools(1262)
        .connect()
        .fill_form(|form| {
            form.name = "Awesome".to_string();
            form.symbol = "AWE".to_string();
            form.create_pool = true;
            form.osmo_liquidity = "1000".to_string();
            form.token_liquidity = "250000.5".to_string();
        })
        .launch(|result, launcher| {
            result.unwrap();

            let receipt = launcher.success().unwrap();
            assert_eq!(receipt.pool_id, Some(1263));
            assert_eq!(
                launcher.success_summary().unwrap().pool_link,
                Some("https://app.osmosis.zone/pool/1263".to_string())
            );
        })
        .query_num_pools(|num_pools| assert_eq!(num_pools, 1263))
        .query_balance(&creator, &denom, |balance| {
            assert_eq!(balance, Uint128::new(749_999_500_000));
        })
        .query_balance(&creator, "uosmo", |balance| {
            assert_eq!(balance, Uint128::new(OSMO_BALANCE - 1_000_000_000));
        })
        .query_balance(&creator, "gamm/pool/1263", |balance| {
            assert_eq!(balance, Uint128::new(LP_SHARES_BURN_AMOUNT));
        });
}

#[test]
fn launch_token_and_burn_lp_shares() {
    let mut suite = suite();
    let creator = suite.creator();

    suite
        .set_num_pools(7)
        .connect()
        .refresh_pool_count()
        .fill_form(|form| {
            form.name = "Awesome".to_string();
            form.symbol = "AWE".to_string();
            form.create_pool = true;
            form.osmo_liquidity = "100".to_string();
            form.token_liquidity = "1000".to_string();
            form.burn_lp = true;
        })
        .launch(|result, launcher| {
            result.unwrap();
            assert_eq!(launcher.success().unwrap().pool_id, Some(8));
        })
        .query_balance(&creator, "gamm/pool/8", |balance| {
            assert_eq!(balance, Uint128::zero());
        })
        .query_balance(BURN_ADDRESS, "gamm/pool/8", |balance| {
            assert_eq!(balance, Uint128::new(LP_SHARES_BURN_AMOUNT));
        });

    assert_eq!(suite.wallet.broadcasts()[0].fee.gas.u64(), 2_200_000);
}

#[test]
fn burn_lp_requires_a_pool_count() {
    let mut suite = suite();

    suite
        .connect()
        .fill_form(|form| {
            form.symbol = "AWE".to_string();
            form.create_pool = true;
            form.osmo_liquidity = "100".to_string();
            form.token_liquidity = "1000".to_string();
            form.burn_lp = true;
        })
        .launch(|result, launcher| {
            assert_eq!(result.unwrap_err(), LaunchError::PoolCountUnavailable {});
            assert!(launcher.notice().is_some());
            assert_eq!(launcher.success(), None);
        });

    assert!(suite.wallet.broadcasts().is_empty());
}

#[test]
fn stale_pool_count_reverts_the_whole_launch() {
    let mut suite = suite();
    let creator = suite.creator();
    let denom = format!("factory/{creator}/awe");

    suite
        .set_num_pools(7)
        .connect()
        .refresh_pool_count()
        // another pool lands before ours, so ours gets id 9 and the shares of pool 8 can't be burned
        .set_num_pools(8)
        .fill_form(|form| {
            form.symbol = "AWE".to_string();
            form.create_pool = true;
            form.osmo_liquidity = "100".to_string();
            form.token_liquidity = "1000".to_string();
            form.burn_lp = true;
        })
        .launch(|result, launcher| {
            match result.unwrap_err() {
                LaunchError::BroadcastFailed { code, raw_log } => {
                    assert_eq!(code, 1);
                    assert!(!raw_log.is_empty());
                    assert_eq!(
                        launcher.notice(),
                        Some(&Notice::new("Unable to create token", Some(raw_log)))
                    );
                }
                err => panic!("unexpected error {err:?}"),
            }
            assert_eq!(launcher.success(), None);
        })
        .query_denom_admin(&denom, |admin| {
            assert!(admin.is_err());
        })
        .query_balance(&creator, "uosmo", |balance| {
            assert_eq!(balance, Uint128::new(OSMO_BALANCE));
        })
        .query_num_pools(|num_pools| assert_eq!(num_pools, 8));
}

#[test]
fn duplicate_symbol_fails_without_minting_again() {
    let mut suite = suite();
    let creator = suite.creator();
    let denom = format!("factory/{creator}/awe");

    suite
        .connect()
        .fill_form(|form| {
            form.name = "Awesome".to_string();
            form.symbol = "AWE".to_string();
        })
        .launch(|result, _| {
            result.unwrap();
        })
        // same subdenom, different case
        .fill_form(|form| form.symbol = "awe".to_string())
        .launch(|result, launcher| {
            let err = result.unwrap_err();
            assert!(matches!(err, LaunchError::BroadcastFailed { code: 1, .. }));
            assert!(err.to_string().contains("already exists"));
            assert_eq!(launcher.success(), None);
        })
        .query_balance(&creator, &denom, |balance| {
            assert_eq!(balance, Uint128::new(1_000_000_000_000));
        });
}

#[test]
fn insufficient_liquidity_reverts_the_whole_launch() {
    let mut suite = suite();
    let creator = suite.creator();
    let denom = format!("factory/{creator}/awe");

    suite
        .set_num_pools(3)
        .connect()
        .fill_form(|form| {
            form.symbol = "AWE".to_string();
            form.create_pool = true;
            form.osmo_liquidity = "1000000".to_string();
            form.token_liquidity = "1000".to_string();
        })
        .launch(|result, _| {
            assert!(matches!(
                result.unwrap_err(),
                LaunchError::BroadcastFailed { .. }
            ));
        })
        .query_denom_admin(&denom, |admin| {
            assert!(admin.is_err());
        })
        .query_balance(&creator, &denom, |balance| {
            assert_eq!(balance, Uint128::zero());
        })
        .query_num_pools(|num_pools| assert_eq!(num_pools, 3));
}

#[test]
fn rejected_signature_broadcasts_nothing() {
    let mut suite = suite().rejecting_signatures();
    let creator = suite.creator();
    let denom = format!("factory/{creator}/awe");

    suite
        .connect()
        .fill_form(|form| form.symbol = "AWE".to_string())
        .launch(|result, launcher| {
            assert_eq!(result.unwrap_err(), LaunchError::Rejected {});
            assert_eq!(
                launcher.notice(),
                Some(&Notice::new("Request rejected", None))
            );
        })
        .query_denom_admin(&denom, |admin| {
            assert!(admin.is_err());
        });

    assert!(suite.wallet.broadcasts().is_empty());
}

#[test]
fn short_symbol_never_reaches_the_chain() {
    let mut suite = suite();

    suite
        .connect()
        .fill_form(|form| form.symbol = "AW".to_string())
        .launch(|result, _| {
            assert!(matches!(
                result.unwrap_err(),
                LaunchError::SymbolTooShort { .. }
            ));
        });

    assert!(suite.wallet.broadcasts().is_empty());
    assert_eq!(suite.wallet.registry(), None);
    assert!(suite.wallet.address().is_some());
}
