use cosmwasm_schema::cw_serde;

/// Short message surfaced to the user, e.g. as a toast.
#[cw_serde]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub const LAUNCH_FAILED: &'static str = "Unable to create token";

    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Notice {
            title: title.into(),
            description,
        }
    }
}
