use sqlx::PgPool;
use crate::models::Transaction;

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT id, type, ticker, volume, price, date
         FROM transactions"
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: i32) -> Result<Option<Transaction>, sqlx::Error> {
    sqlx::query_as::<_, Transaction>(
        "SELECT id, type, ticker, volume, price, date
         FROM transactions
         WHERE id = $1"
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Inserts the transaction and returns the id assigned by the database.
pub async fn insert(pool: &PgPool, txn: &Transaction) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO transactions (type, ticker, volume, price, date)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id"
    )
    .bind(&txn.kind)
    .bind(&txn.ticker)
    .bind(txn.volume)
    .bind(txn.price)
    .bind(&txn.date)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, txn: &Transaction) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE transactions
         SET type = $1, ticker = $2, volume = $3, price = $4, date = $5
         WHERE id = $6"
    )
    .bind(&txn.kind)
    .bind(&txn.ticker)
    .bind(txn.volume)
    .bind(txn.price)
    .bind(&txn.date)
    .bind(txn.id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
