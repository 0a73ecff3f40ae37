/// Memo attached to every launch transaction
pub const TX_MEMO: &str = "Created via memefactory";

/// Decimal places of every token created through the factory
pub const DECIMALS: u32 = 6;

pub const FEE_DENOM: &str = "uosmo";
pub const OSMO_DENOM: &str = "uosmo";

/// Bonded tokens pool module account. Nobody holds its key, so admin rights and LP shares
/// sent here are gone for good.
pub const BURN_ADDRESS: &str = "osmo1fl48vsnmsdzcv85q5d2q4z5ajdha8yu3aq6l09";

/// Shares minted by a balancer pool on creation, 100 * 10^18.
pub const LP_SHARES_BURN_AMOUNT: u128 = 100_000_000_000_000_000_000;

/// Shortest accepted symbol, counted in characters (Unicode scalar values) rather than bytes.
pub const MIN_SYMBOL_LENGTH: usize = 3;
pub const DEFAULT_SUPPLY: u64 = 1_000_000;
pub const DEFAULT_DESCRIPTION: &str = "hello";
pub const DEFAULT_SWAP_FEE: &str = "0.01";
pub const DEFAULT_EXIT_FEE: &str = "0";

/// Weight given to each side of a newly created pool
pub const POOL_ASSET_WEIGHT: &str = "50";

pub const POOL_COUNT_REFRESH_SECS: u64 = 5;

/// Substring wallets put in the error raised when the user declines to sign
pub const REJECTED_MARKER: &str = "Request rejected";
