use mongodb::bson::{oid::ObjectId, DateTime};

use crate::models::{Address, User};

/// Constrói os 3 usuários de exemplo
pub fn seed_users(now: DateTime) -> Vec<User> {
    vec![
        User {
            id: ObjectId::new(),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            age: 30,
            role: "developer".into(),
            skills: vec!["JavaScript".into(), "Python".into(), "MongoDB".into()],
            address: Address {
                street: "123 Main St".into(),
                city: "New York".into(),
                country: "USA".into(),
            },
            created_at: now,
            is_active: true,
        },
        User {
            id: ObjectId::new(),
            name: "Jane Smith".into(),
            email: "jane.smith@example.com".into(),
            age: 28,
            role: "designer".into(),
            skills: vec!["UI/UX".into(), "Figma".into(), "Adobe Creative Suite".into()],
            address: Address {
                street: "456 Oak Ave".into(),
                city: "San Francisco".into(),
                country: "USA".into(),
            },
            created_at: now,
            is_active: true,
        },
        User {
            id: ObjectId::new(),
            name: "Bob Johnson".into(),
            email: "bob.johnson@example.com".into(),
            age: 35,
            role: "manager".into(),
            skills: vec!["Leadership".into(), "Project Management".into(), "Strategy".into()],
            address: Address {
                street: "789 Pine Rd".into(),
                city: "Seattle".into(),
                country: "USA".into(),
            },
            created_at: now,
            is_active: false,
        },
    ]
}
