pub mod queries;
pub mod stargate_mock;
pub mod wallet;
