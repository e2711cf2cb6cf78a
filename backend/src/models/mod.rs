mod transaction;

pub use transaction::{DeleteTransaction, Transaction};

/// Field-level checks applied to a request body after it has been decoded.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
