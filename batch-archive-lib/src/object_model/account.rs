use serde::Deserialize;

/// Account as reported by `gh api user`; other fields are ignored
#[derive(Debug, Deserialize)]
pub struct Account {
    pub login: String,
}
