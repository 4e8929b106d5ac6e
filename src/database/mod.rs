mod indexes;
#[cfg(test)]
pub mod memory;
mod store;

pub use indexes::*;
pub use store::*;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection, Database};

use crate::utils::AppError;

/// Conexão com o banco selecionado pelo nome (equivalente a `getSiblingDB`)
#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Execução única: poucas conexões bastam
        client_options.max_pool_size = Some(4);
        client_options.min_pool_size = Some(1);
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        // Timeouts curtos: falha rápido se o servidor não estiver de pé
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // Testa a conexão
        db.list_collection_names().await?;

        Ok(Self { db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database().collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn name(&self) -> &str {
        self.db.name()
    }
}

#[async_trait]
impl DocumentStore for MongoDB {
    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<usize, AppError> {
        let result = self
            .collection::<Document>(collection)
            .insert_many(&documents)
            .await?;
        Ok(result.inserted_ids.len())
    }

    async fn create_index(&self, collection: &str, index: &IndexSpec) -> Result<String, AppError> {
        let result = self
            .collection::<Document>(collection)
            .create_index(index.to_model())
            .await?;
        Ok(result.index_name)
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, AppError> {
        let count = self
            .collection::<Document>(collection)
            .count_documents(doc! {})
            .await?;
        Ok(count)
    }

    async fn list_index_names(&self, collection: &str) -> Result<Vec<String>, AppError> {
        let models: Vec<mongodb::IndexModel> = self
            .collection::<Document>(collection)
            .list_indexes()
            .await?
            .try_collect()
            .await?;

        Ok(models
            .into_iter()
            .filter_map(|model| model.options.and_then(|options| options.name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedConfig;

    #[tokio::test]
    #[ignore] // Exige MongoDB rodando
    async fn test_mongodb_connection() {
        dotenv::dotenv().ok();
        let config = SeedConfig::from_env();

        let db = MongoDB::new(&config.uri, &config.database).await;
        assert!(db.is_ok());
        assert_eq!(db.unwrap().name(), config.database);
    }

    #[tokio::test]
    #[ignore] // Exige MongoDB rodando
    async fn test_selects_database_by_name() {
        dotenv::dotenv().ok();
        let config = SeedConfig::from_env();

        let db = MongoDB::new(&config.uri, "myapp_seeder_switch_test").await.unwrap();
        assert_eq!(db.name(), "myapp_seeder_switch_test");
        assert_eq!(db.database().name(), "myapp_seeder_switch_test");
        assert!(db.count_documents("users").await.is_ok());
    }
}
