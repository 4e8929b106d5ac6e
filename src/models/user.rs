use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Endereço residencial do usuário
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
}

/// Usuário de exemplo (collection `users`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    /// Único via índice `email_1`
    pub email: String,
    pub age: i32,
    pub role: String,
    pub skills: Vec<String>,
    pub address: Address,
    pub created_at: DateTime,
    pub is_active: bool,
}
