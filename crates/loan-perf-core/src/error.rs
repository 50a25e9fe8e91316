use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanPerfError {
    #[error("database '{path}' is missing the 'loan' table or one or more required columns: {columns}")]
    Schema { path: String, columns: String },

    #[error("can't connect to database '{path}': {reason}. Make sure name and location are correct.")]
    Connection { path: String, reason: String },
}
