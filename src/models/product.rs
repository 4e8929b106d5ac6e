use mongodb::bson::{oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

/// Produto de exemplo (collection `products`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub in_stock: bool,
    pub quantity: i32,
    /// Formato livre: chaves variam por produto e valores podem ser listas
    pub specifications: Document,
    pub tags: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
