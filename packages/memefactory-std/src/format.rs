use cosmwasm_std::{StdError, StdResult};

const ADDRESS_TAKE: usize = 6usize;

/// Shortens a bech32 address for display, keeping the prefix and six characters on each side,
/// e.g. `osmo1qyqszq...8zqkz5`.
pub fn format_address(address: &str) -> StdResult<String> {
    let (hrp, _) = bech32::decode(address)
        .map_err(|err| StdError::generic_err(format!("Invalid address {address}: {err}")))?;
    let prefix = hrp.to_string();

    let head_end = prefix.len() + ADDRESS_TAKE;
    if address.len() <= head_end + ADDRESS_TAKE {
        return Ok(address.to_string());
    }

    Ok(format!(
        "{}{}...{}",
        prefix,
        &address[prefix.len()..head_end],
        &address[address.len() - ADDRESS_TAKE..]
    ))
}

#[cfg(test)]
mod tests {
    use bech32::{Bech32, Hrp};

    use super::*;

    fn address(prefix: &str, data: &[u8]) -> String {
        bech32::encode::<Bech32>(Hrp::parse(prefix).unwrap(), data).unwrap()
    }

    #[test]
    fn keeps_prefix_and_both_ends() {
        let addr = address("osmo", &[7u8; 20]);
        let formatted = format_address(&addr).unwrap();

        assert!(formatted.starts_with("osmo1"));
        assert_eq!(formatted.len(), "osmo".len() + 6 + 3 + 6);
        assert_eq!(&formatted[4..10], &addr[4..10]);
        assert!(formatted.ends_with(&addr[addr.len() - 6..]));
        assert_eq!(&formatted[10..13], "...");
    }

    #[test]
    fn rejects_non_bech32() {
        assert!(format_address("not-an-address").is_err());
        assert!(format_address("").is_err());
    }
}
