use std::sync::Arc;

use crate::models::Transaction;
use crate::repository::TransactionRepository;

/// Sits between the HTTP handlers and storage. Every operation currently
/// forwards to the repository and returns its result as-is.
#[derive(Clone)]
pub struct TransactionService {
    repository: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> Result<Vec<Transaction>, sqlx::Error> {
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, sqlx::Error> {
        self.repository.find_by_id(id).await
    }

    pub async fn add(&self, txn: &mut Transaction) -> Result<(), sqlx::Error> {
        self.repository.add(txn).await
    }

    pub async fn edit(&self, txn: &Transaction) -> Result<(), sqlx::Error> {
        self.repository.edit(txn).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        self.repository.delete(id).await
    }

    pub async fn shutdown(&self) {
        self.repository.close().await;
    }
}
