pub mod create_pool;
pub mod query;

/// Event emitted by the gamm module once a pool is created
pub const POOL_CREATED_EVENT: &str = "pool_created";
pub const POOL_ID_ATTRIBUTE: &str = "pool_id";
