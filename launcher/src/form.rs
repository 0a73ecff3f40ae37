use cosmwasm_schema::cw_serde;
use memefactory_std::coin::factory_denom;
use memefactory_std::constants::{
    DEFAULT_DESCRIPTION, DEFAULT_EXIT_FEE, DEFAULT_SUPPLY, DEFAULT_SWAP_FEE,
};

/// Token parameters as entered by the user. Amounts are kept as typed and only parsed when the
/// launch is composed.
#[cw_serde]
pub struct TokenForm {
    pub name: String,
    pub symbol: String,
    pub description: String,
    /// Stored as the metadata uri
    pub image_url: String,
    /// Whole tokens minted to the creator
    pub supply: u64,
    pub create_pool: bool,
    /// OSMO put in the pool, in whole OSMO
    pub osmo_liquidity: String,
    /// New tokens put in the pool, in whole tokens
    pub token_liquidity: String,
    /// Sends the LP shares of the new pool to the burn address
    pub burn_lp: bool,
    pub swap_fee: String,
    pub exit_fee: String,
}

impl Default for TokenForm {
    fn default() -> Self {
        TokenForm {
            name: String::new(),
            symbol: String::new(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image_url: String::new(),
            supply: DEFAULT_SUPPLY,
            create_pool: false,
            osmo_liquidity: String::new(),
            token_liquidity: String::new(),
            burn_lp: false,
            swap_fee: DEFAULT_SWAP_FEE.to_string(),
            exit_fee: DEFAULT_EXIT_FEE.to_string(),
        }
    }
}

impl TokenForm {
    /// The token factory subdenom, which is the lowercased symbol.
    pub fn subdenom(&self) -> String {
        self.symbol.to_lowercase()
    }

    pub fn denom(&self, creator: &str) -> String {
        factory_denom(creator, &self.subdenom())
    }
}
