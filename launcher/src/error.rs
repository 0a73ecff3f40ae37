use cosmwasm_std::StdError;
use memefactory_std::constants::REJECTED_MARKER;
use memefactory_std::wallet::WalletError;
use thiserror::Error;

use crate::notice::Notice;

#[derive(Error, Debug, PartialEq)]
pub enum LaunchError {
    // Handle all normal errors from the StdError
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Wallet is not connected")]
    NotConnected {},

    #[error("Symbol \"{symbol}\" is too short, it needs at least {min} characters")]
    SymbolTooShort { symbol: String, min: usize },

    #[error("The pool count hasn't been fetched yet, can't tell which LP shares to burn")]
    PoolCountUnavailable {},

    #[error("Message type {type_url} is not registered in the signing client")]
    UnregisteredType { type_url: String },

    #[error("Request rejected")]
    Rejected {},

    #[error("{0}")]
    Wallet(WalletError),

    #[error("Transaction failed with code {code}: {raw_log}")]
    BroadcastFailed { code: u32, raw_log: String },

    #[error("A launch is already being submitted")]
    AlreadySubmitting {},
}

impl From<WalletError> for LaunchError {
    fn from(err: WalletError) -> Self {
        if err.is_rejection() {
            LaunchError::Rejected {}
        } else {
            LaunchError::Wallet(err)
        }
    }
}

impl LaunchError {
    /// The notice shown to the user for this error. Failed broadcasts show the chain's raw log.
    pub fn notice(&self) -> Notice {
        match self {
            LaunchError::Rejected {} => Notice::new(REJECTED_MARKER, None),
            LaunchError::BroadcastFailed { raw_log, .. } => {
                Notice::new(Notice::LAUNCH_FAILED, Some(raw_log.clone()))
            }
            err => Notice::new(Notice::LAUNCH_FAILED, Some(err.to_string())),
        }
    }
}
