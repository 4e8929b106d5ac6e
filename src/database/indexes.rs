use mongodb::bson::{Bson, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use crate::seeds::{ORDERS, PRODUCTS, USERS};

/// Definição de um índice a ser criado pelo seeder
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSpec {
    pub collection: &'static str,
    pub keys: Document,
    pub unique: bool,
    pub text: bool,
}

impl IndexSpec {
    pub fn ascending(collection: &'static str, field: &str) -> Self {
        let mut keys = Document::new();
        keys.insert(field, 1);
        Self {
            collection,
            keys,
            unique: false,
            text: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn text(collection: &'static str, fields: &[&str]) -> Self {
        let mut keys = Document::new();
        for field in fields {
            keys.insert(*field, "text");
        }
        Self {
            collection,
            keys,
            unique: false,
            text: true,
        }
    }

    /// Nome no formato padrão do servidor: `email_1`, `name_text_description_text`.
    pub fn name(&self) -> String {
        self.keys
            .iter()
            .map(|(field, direction)| match direction {
                Bson::String(kind) => format!("{}_{}", field, kind),
                Bson::Int32(n) => format!("{}_{}", field, n),
                Bson::Int64(n) => format!("{}_{}", field, n),
                other => format!("{}_{}", field, other),
            })
            .collect::<Vec<_>>()
            .join("_")
    }

    pub fn fields(&self) -> Vec<&str> {
        self.keys.keys().map(String::as_str).collect()
    }

    pub fn to_model(&self) -> IndexModel {
        let options = IndexOptions::builder()
            .name(self.name())
            .unique(self.unique.then_some(true))
            .build();

        IndexModel::builder()
            .keys(self.keys.clone())
            .options(options)
            .build()
    }
}

/// Os seis índices declarados após a carga inicial
pub fn default_indexes() -> Vec<IndexSpec> {
    vec![
        // users: email único
        IndexSpec::ascending(USERS, "email").unique(),
        IndexSpec::ascending(USERS, "role"),
        IndexSpec::ascending(PRODUCTS, "category"),
        // products: busca textual em nome + descrição
        IndexSpec::text(PRODUCTS, &["name", "description"]),
        IndexSpec::ascending(ORDERS, "userId"),
        IndexSpec::ascending(ORDERS, "status"),
    ]
}
