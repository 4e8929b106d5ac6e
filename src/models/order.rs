use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub country: String,
    pub zip_code: String,
}

/// Pedido de exemplo (collection `orders`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub order_id: String,
    /// Email do usuário (cópia desnormalizada, não é chave estrangeira)
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String, // completed, pending
    pub shipping_address: ShippingAddress,
    pub order_date: DateTime,
    /// Gravado como `null` enquanto o pedido não foi entregue
    pub delivery_date: Option<DateTime>,
}

impl Order {
    /// Soma dos subtotais dos itens (divergência de `total_amount` só gera aviso no log)
    pub fn items_subtotal(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * item.quantity as f64)
            .sum()
    }

    /// Tolerância de meio centavo para arredondamento de `f64`
    pub fn total_matches_items(&self) -> bool {
        (self.items_subtotal() - self.total_amount).abs() < 0.005
    }
}
