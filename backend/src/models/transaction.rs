use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Validate;

const TYPE_MAX_LEN: usize = 5;
const TICKER_MAX_LEN: usize = 30;

// Represents a single buy or sell (or similar) event for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub ticker: String,
    pub volume: f64,
    pub price: f64,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTransaction {
    pub id: i32,
}

impl Transaction {
    pub fn new(
        kind: impl Into<String>,
        ticker: impl Into<String>,
        volume: f64,
        price: f64,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            kind: kind.into(),
            ticker: ticker.into(),
            volume,
            price,
            date: date.into(),
        }
    }
}

impl Validate for Transaction {
    /// Presence of `volume` and `price` is already guaranteed by deserialization;
    /// string lengths are counted in characters.
    fn validate(&self) -> Result<(), String> {
        if self.id <= 0 {
            return Err(format!("id must be greater than 0, got {}", self.id));
        }
        check_length("type", &self.kind, TYPE_MAX_LEN)?;
        check_length("ticker", &self.ticker, TICKER_MAX_LEN)?;
        if self.date.is_empty() {
            return Err("date is required".to_string());
        }
        Ok(())
    }
}

impl Validate for DeleteTransaction {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(format!(
            "{} must be between 1 and {} characters, got {}",
            field, max, len
        ));
    }
    Ok(())
}
