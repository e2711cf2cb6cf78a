pub mod transaction_queries;
