use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::db::transaction_queries;
use crate::models::Transaction;

use super::TransactionRepository;

#[derive(Clone)]
pub struct PgTransactionRepository {
    pool: PgPool,
}

impl PgTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn find_all(&self) -> Result<Vec<Transaction>, sqlx::Error> {
        transaction_queries::fetch_all(&self.pool).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Transaction>, sqlx::Error> {
        transaction_queries::fetch_one(&self.pool, id).await
    }

    async fn add(&self, txn: &mut Transaction) -> Result<(), sqlx::Error> {
        txn.id = transaction_queries::insert(&self.pool, txn).await?;
        Ok(())
    }

    async fn edit(&self, txn: &Transaction) -> Result<(), sqlx::Error> {
        let rows = transaction_queries::update(&self.pool, txn).await?;
        debug!("Edit of transaction {} touched {} row(s)", txn.id, rows);
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), sqlx::Error> {
        let rows = transaction_queries::delete(&self.pool, id).await?;
        debug!("Delete of transaction {} touched {} row(s)", id, rows);
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
