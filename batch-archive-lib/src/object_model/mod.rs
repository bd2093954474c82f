mod account;
mod action;
mod outcome;
mod repo;

pub use self::account::Account;
pub use self::action::Action;
pub use self::outcome::Outcome;
pub(crate) use self::repo::Repo;
pub use self::repo::RepoRef;
