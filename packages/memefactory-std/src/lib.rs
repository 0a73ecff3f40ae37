pub mod bank;
pub mod chain;
pub mod coin;
pub mod config;
pub mod constants;
pub mod fee;
pub mod format;
pub mod gamm;
pub mod registry;
pub mod tokenfactory;
pub mod wallet;
