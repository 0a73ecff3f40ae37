use std::str::FromStr;

use cosmwasm_std::{Decimal, StdError, StdResult, Uint128};

pub const FACTORY_PREFIX: &str = "factory";
pub const GAMM_POOL_PREFIX: &str = "gamm/pool";
/// Fractional digits carried by [Decimal]
const DECIMAL_PLACES: u32 = 18;

/// Scales a user entered decimal amount by `10^decimals`, e.g. `"1.5"` with 6 decimals gives
/// `1_500_000`.
///
/// Fails when the amount is not a number, or when it has more fractional digits than the token
/// can represent.
pub fn format_units(amount: &str, decimals: u32) -> StdResult<Uint128> {
    if decimals > DECIMAL_PLACES {
        return Err(StdError::generic_err(format!(
            "Can't scale to {decimals} decimals, at most {DECIMAL_PLACES} are supported"
        )));
    }

    let value = Decimal::from_str(amount.trim())?;
    let divisor = Uint128::from(10u128.pow(DECIMAL_PLACES - decimals));
    let atomics = value.atomics();

    if !atomics.checked_rem(divisor)?.is_zero() {
        return Err(StdError::generic_err(format!(
            "Amount {amount} has more than {decimals} decimal places"
        )));
    }

    Ok(atomics.checked_div(divisor)?)
}

/// Builds the full token factory denom, `factory/{creator}/{subdenom}`.
pub fn factory_denom(creator: &str, subdenom: &str) -> String {
    format!("{FACTORY_PREFIX}/{creator}/{subdenom}")
}

/// Denom of the shares issued by the gamm pool with the given id.
pub fn lp_share_denom(pool_id: u64) -> String {
    format!("{GAMM_POOL_PREFIX}/{pool_id}")
}
