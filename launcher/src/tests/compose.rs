use cosmwasm_std::{coin, StdError};
use memefactory_std::bank::MsgSend;
use memefactory_std::config::NetworkConfig;
use memefactory_std::constants::BURN_ADDRESS;
use memefactory_std::fee::MsgKind;
use memefactory_std::gamm::create_pool::MsgCreateBalancerPool;
use memefactory_std::tokenfactory::change_admin::MsgChangeAdmin;
use memefactory_std::tokenfactory::common::decode;
use memefactory_std::tokenfactory::create_denom::MsgCreateDenom;
use memefactory_std::tokenfactory::mint::MsgMint;
use memefactory_std::tokenfactory::set_denom_metadata::MsgSetDenomMetadata;
use test_case::test_case;

use crate::compose::compose_launch;
use crate::tests::{pool_form, stargate_value, token_form, CREATOR};
use crate::LaunchError;

const DENOM: &str = "factory/osmo1creator/awe";

#[test_case("" ; "empty symbol")]
#[test_case("AW" ; "two characters")]
#[test_case("éé" ; "two multibyte characters")]
fn short_symbol_builds_nothing(symbol: &str) {
    let err = compose_launch(
        &NetworkConfig::mainnet(),
        CREATOR,
        &token_form(symbol),
        Some(1),
    )
    .unwrap_err();

    assert_eq!(
        err,
        LaunchError::SymbolTooShort {
            symbol: symbol.to_string(),
            min: 3,
        }
    );
}

#[test]
fn symbol_length_counts_characters() {
    let plan = compose_launch(&NetworkConfig::mainnet(), CREATOR, &token_form("ééé"), None)
        .unwrap();

    assert_eq!(plan.denom, "factory/osmo1creator/ééé");
}

#[test]
fn minimal_launch() {
    let plan =
        compose_launch(&NetworkConfig::mainnet(), CREATOR, &token_form("AWE"), None).unwrap();

    assert_eq!(plan.denom, DENOM);
    assert_eq!(
        plan.kinds,
        vec![
            MsgKind::CreateDenom,
            MsgKind::Mint,
            MsgKind::SetDenomMetadata,
            MsgKind::ChangeAdmin,
        ]
    );
    assert_eq!(plan.fees, vec![1_400_000, 100_000, 200_000, 200_000]);
    assert_eq!(plan.total_gas(), 1_900_000);
    assert_eq!(plan.messages.len(), 4);

    let create: MsgCreateDenom = decode(stargate_value(&plan.messages[0])).unwrap();
    assert_eq!(create.sender, CREATOR);
    assert_eq!(create.subdenom, "awe");

    let mint: MsgMint = decode(stargate_value(&plan.messages[1])).unwrap();
    assert_eq!(mint.mint_to_address, CREATOR);
    assert_eq!(
        mint.amount.unwrap().to_coin().unwrap(),
        coin(1_000_000_000_000, DENOM)
    );

    let metadata = decode::<MsgSetDenomMetadata>(stargate_value(&plan.messages[2]))
        .unwrap()
        .metadata
        .unwrap();
    assert_eq!(metadata.base, DENOM);
    assert_eq!(metadata.display, "awe");
    assert_eq!(metadata.name, "Awesome");
    assert_eq!(metadata.symbol, "AWE");
    assert_eq!(metadata.description, "hello");
    assert_eq!(metadata.uri, "https://memefactory.zone/awe.png");
    assert_eq!(
        metadata
            .denom_units
            .iter()
            .map(|unit| (unit.denom.as_str(), unit.exponent))
            .collect::<Vec<_>>(),
        vec![(DENOM, 0), ("awe", 6)]
    );

    let change_admin: MsgChangeAdmin = decode(stargate_value(&plan.messages[3])).unwrap();
    assert_eq!(change_admin.denom, DENOM);
    assert_eq!(change_admin.new_admin, BURN_ADDRESS);
}

#[test]
fn pool_creation_appends_one_balanced_pool() {
    let plan = compose_launch(
        &NetworkConfig::mainnet(),
        CREATOR,
        &pool_form("AWE", false),
        Some(1_000),
    )
    .unwrap();

    assert_eq!(plan.messages.len(), 5);
    assert_eq!(plan.kinds[4], MsgKind::CreateBalancerPool);
    assert_eq!(plan.total_gas(), 2_100_000);

    let pool: MsgCreateBalancerPool = decode(stargate_value(&plan.messages[4])).unwrap();
    assert_eq!(pool.sender, CREATOR);
    assert_eq!(pool.future_pool_governor, "");
    assert_eq!(pool.pool_assets.len(), 2);
    assert!(pool.pool_assets.iter().all(|asset| asset.weight == "50"));
    assert_eq!(
        pool.pool_assets
            .iter()
            .map(|asset| asset.token.as_ref().unwrap().to_coin().unwrap())
            .collect::<Vec<_>>(),
        vec![coin(500_000_000_000, DENOM), coin(1_000_000_000, "uosmo")]
    );

    let params = pool.pool_params.unwrap();
    assert_eq!(params.swap_fee, "10000000000000000");
    assert_eq!(params.exit_fee, "0");
}

#[test]
fn burn_lp_without_pool_is_ignored() {
    let form = crate::form::TokenForm {
        burn_lp: true,
        ..token_form("AWE")
    };
    let plan = compose_launch(&NetworkConfig::mainnet(), CREATOR, &form, Some(10)).unwrap();

    assert_eq!(plan.messages.len(), 4);
    assert!(!plan.contains(MsgKind::Send));
}

#[test]
fn burn_lp_sends_shares_of_next_pool_to_burn_address() {
    let plan = compose_launch(
        &NetworkConfig::mainnet(),
        CREATOR,
        &pool_form("AWE", true),
        Some(41),
    )
    .unwrap();

    assert_eq!(plan.messages.len(), 6);
    assert_eq!(plan.kinds[5], MsgKind::Send);
    assert_eq!(plan.total_gas(), 2_200_000);

    let burn: MsgSend = decode(stargate_value(&plan.messages[5])).unwrap();
    assert_eq!(burn.from_address, CREATOR);
    assert_eq!(burn.to_address, BURN_ADDRESS);
    assert_eq!(burn.amount.len(), 1);
    assert_eq!(
        burn.amount[0].to_coin().unwrap(),
        coin(100_000_000_000_000_000_000, "gamm/pool/42")
    );
}

#[test]
fn burn_lp_needs_the_pool_count() {
    let err = compose_launch(
        &NetworkConfig::mainnet(),
        CREATOR,
        &pool_form("AWE", true),
        None,
    )
    .unwrap_err();

    assert_eq!(err, LaunchError::PoolCountUnavailable {});
}

#[test]
fn burn_lp_with_exhausted_pool_ids_overflows() {
    let err = compose_launch(
        &NetworkConfig::mainnet(),
        CREATOR,
        &pool_form("AWE", true),
        Some(u64::MAX),
    )
    .unwrap_err();

    assert!(matches!(err, LaunchError::Std(StdError::Overflow { .. })));
}

#[test]
fn malformed_liquidity_is_a_parse_error() {
    let form = crate::form::TokenForm {
        osmo_liquidity: "a lot".to_string(),
        ..pool_form("AWE", false)
    };
    let err = compose_launch(&NetworkConfig::mainnet(), CREATOR, &form, Some(1)).unwrap_err();

    assert!(matches!(err, LaunchError::Std(StdError::GenericErr { .. })));
}

#[test]
fn testnet_hands_admin_to_configured_burn_address() {
    let config = NetworkConfig {
        burn_address: "osmo1burn".to_string(),
        ..NetworkConfig::testnet()
    };
    let plan = compose_launch(&config, CREATOR, &token_form("AWE"), None).unwrap();

    let change_admin: MsgChangeAdmin = decode(stargate_value(&plan.messages[3])).unwrap();
    assert_eq!(change_admin.new_admin, "osmo1burn");
}
