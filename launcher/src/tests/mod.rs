use cosmwasm_std::{Binary, CosmosMsg};

use crate::form::TokenForm;

mod compose;

pub const CREATOR: &str = "osmo1creator";

pub fn token_form(symbol: &str) -> TokenForm {
    TokenForm {
        name: "Awesome".to_string(),
        symbol: symbol.to_string(),
        image_url: "https://memefactory.zone/awe.png".to_string(),
        ..TokenForm::default()
    }
}

/// A form creating a pool with 1,000 OSMO and 500,000 tokens.
pub fn pool_form(symbol: &str, burn_lp: bool) -> TokenForm {
    TokenForm {
        create_pool: true,
        osmo_liquidity: "1000".to_string(),
        token_liquidity: "500000".to_string(),
        burn_lp,
        ..token_form(symbol)
    }
}

pub fn stargate_value(msg: &CosmosMsg) -> &Binary {
    match msg {
        CosmosMsg::Stargate { value, .. } => value,
        other => panic!("expected a stargate message, got {other:?}"),
    }
}
