mod memory;
mod postgres;

use async_trait::async_trait;

use crate::models::Transaction;

pub use memory::InMemoryTransactionRepository;
pub use postgres::PgTransactionRepository;

/// Storage for transactions. Implementations own every persisted row;
/// callers only ever hold copies.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Transaction>, sqlx::Error>;

    /// Returns `None` when no row has this id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, sqlx::Error>;

    /// Persists a new row and writes the assigned id back into `txn`.
    /// Any id already on `txn` is ignored.
    async fn add(&self, txn: &mut Transaction) -> Result<(), sqlx::Error>;

    /// Overwrites every field of the row identified by `txn.id`.
    async fn edit(&self, txn: &Transaction) -> Result<(), sqlx::Error>;

    /// Removes the row if it exists. Deleting a missing id is not an error.
    async fn delete(&self, id: i32) -> Result<(), sqlx::Error>;

    /// Releases storage resources on shutdown.
    async fn close(&self) {}
}
