use mongodb::bson::{doc, oid::ObjectId, DateTime};

use crate::models::Product;

/// Constrói os 3 produtos de exemplo
pub fn seed_products(now: DateTime) -> Vec<Product> {
    vec![
        Product {
            id: ObjectId::new(),
            name: "Laptop Pro".into(),
            description: "High-performance laptop for professionals".into(),
            price: 1299.99,
            category: "Electronics".into(),
            brand: "TechCorp".into(),
            in_stock: true,
            quantity: 25,
            specifications: doc! {
                "processor": "Intel i7",
                "ram": "16GB",
                "storage": "512GB SSD",
                "screen": "15.6 inch",
            },
            tags: vec!["laptop".into(), "professional".into(), "high-performance".into()],
            created_at: now,
            updated_at: now,
        },
        Product {
            id: ObjectId::new(),
            name: "Wireless Mouse".into(),
            description: "Ergonomic wireless mouse with precision tracking".into(),
            price: 29.99,
            category: "Electronics".into(),
            brand: "MouseTech".into(),
            in_stock: true,
            quantity: 150,
            specifications: doc! {
                "connectivity": "Bluetooth 5.0",
                "battery": "Rechargeable Li-ion",
                "dpi": "1600",
                "color": "Black",
            },
            tags: vec!["mouse".into(), "wireless".into(), "ergonomic".into()],
            created_at: now,
            updated_at: now,
        },
        // Fora de estoque
        Product {
            id: ObjectId::new(),
            name: "Coffee Maker".into(),
            description: "Automatic drip coffee maker with programmable timer".into(),
            price: 89.99,
            category: "Home & Kitchen".into(),
            brand: "BrewMaster".into(),
            in_stock: false,
            quantity: 0,
            specifications: doc! {
                "capacity": "12 cups",
                "features": ["Programmable", "Auto-shutoff", "Keep warm"],
                "material": "Stainless steel",
                "color": "Silver",
            },
            tags: vec!["coffee".into(), "kitchen".into(), "appliance".into()],
            created_at: now,
            updated_at: now,
        },
    ]
}
