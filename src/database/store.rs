use async_trait::async_trait;
use mongodb::bson::Document;

use crate::database::IndexSpec;
use crate::utils::AppError;

/// Operações que o seeder consome do banco.
/// O banco é tratado como caixa-preta: nada além disso é exigido.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert ordenado: para no primeiro documento rejeitado pelo servidor.
    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<usize, AppError>;

    /// Retorna o nome do índice criado.
    async fn create_index(&self, collection: &str, index: &IndexSpec) -> Result<String, AppError>;

    async fn count_documents(&self, collection: &str) -> Result<u64, AppError>;

    async fn list_index_names(&self, collection: &str) -> Result<Vec<String>, AppError>;
}
