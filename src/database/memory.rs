//! `DocumentStore` em memória para os testes. Índices únicos são aplicados
//! como no servidor: no insert contra os índices existentes e na criação do
//! índice contra os documentos já gravados.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use crate::database::{DocumentStore, IndexSpec};
use crate::utils::AppError;

#[derive(Default)]
struct Collection {
    documents: Vec<Document>,
    indexes: Vec<IndexSpec>,
}

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|c| c.documents.clone())
            .unwrap_or_default()
    }

    pub fn indexes(&self, collection: &str) -> Vec<IndexSpec> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|c| c.indexes.clone())
            .unwrap_or_default()
    }
}

fn index_key(index: &IndexSpec, document: &Document) -> Vec<Bson> {
    index
        .fields()
        .iter()
        .map(|field| document.get(*field).cloned().unwrap_or(Bson::Null))
        .collect()
}

fn duplicate_error(collection: &str, index: &IndexSpec, key: &[Bson]) -> AppError {
    AppError::DuplicateKey(format!(
        "E11000 duplicate key error collection: {} index: {} dup key: {:?}",
        collection,
        index.name(),
        key
    ))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_many(&self, collection: &str, documents: Vec<Document>) -> Result<usize, AppError> {
        let mut collections = self.collections.lock().unwrap();
        let target = collections.entry(collection.to_string()).or_default();

        let mut inserted = 0;
        for document in documents {
            for index in target.indexes.iter().filter(|i| i.unique) {
                let key = index_key(index, &document);
                if target.documents.iter().any(|d| index_key(index, d) == key) {
                    return Err(duplicate_error(collection, index, &key));
                }
            }
            target.documents.push(document);
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn create_index(&self, collection: &str, index: &IndexSpec) -> Result<String, AppError> {
        let mut collections = self.collections.lock().unwrap();
        let target = collections.entry(collection.to_string()).or_default();

        // Mesma definição já existente: o servidor aceita sem erro
        if target.indexes.iter().any(|i| i == index) {
            return Ok(index.name());
        }

        if index.unique {
            let mut seen = HashSet::new();
            for document in &target.documents {
                let key = index_key(index, document);
                if !seen.insert(format!("{:?}", key)) {
                    return Err(duplicate_error(collection, index, &key));
                }
            }
        }

        target.indexes.push(index.clone());
        Ok(index.name())
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, AppError> {
        Ok(self.documents(collection).len() as u64)
    }

    async fn list_index_names(&self, collection: &str) -> Result<Vec<String>, AppError> {
        let mut names = vec!["_id_".to_string()];
        names.extend(self.indexes(collection).iter().map(IndexSpec::name));
        Ok(names)
    }
}
