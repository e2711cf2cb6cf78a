use crate::services::TransactionService;

#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService,
}

impl AppState {
    pub fn new(transaction_service: TransactionService) -> Self {
        Self { transaction_service }
    }
}
