use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillfoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not open PDF: {0}")]
    Pdf(String),

    #[error("Wrong password or the PDF cannot be decrypted")]
    Password,

    #[error("No table text found in the PDF")]
    NoTableText,

    #[error("No valid transactions found in the extracted table data")]
    NoTransactions,

    #[error("No statement PDF for {year}-{month:02} in {dir}")]
    StatementNotFound { year: i32, month: u32, dir: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, BillfoldError>;
