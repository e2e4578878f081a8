use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    #[error("identifier can not be empty")]
    #[diagnostic(
        code(factory_employees::invalid_identifier),
        help("pass one of the names printed by --list")
    )]
    InvalidIdentifier,
    #[error("no payment processor has been registered with the identifier: {0}")]
    #[diagnostic(
        code(factory_employees::unknown_identifier),
        help("identifiers are case-sensitive, see --list")
    )]
    UnknownIdentifier(String),
    #[error("IO error: {0}")]
    #[diagnostic(code(factory_employees::io))]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    #[diagnostic(code(factory_employees::json))]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
