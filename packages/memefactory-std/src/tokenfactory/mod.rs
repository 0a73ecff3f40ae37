pub mod change_admin;
pub mod common;
pub mod create_denom;
pub mod mint;
pub mod responses;
pub mod set_denom_metadata;
