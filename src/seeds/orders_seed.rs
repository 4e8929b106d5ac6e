use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::models::{Order, OrderItem, ShippingAddress};
use crate::utils::AppError;

/// Data fixa à meia-noite UTC
fn utc_date(year: i32, month: u32, day: u32) -> Result<DateTime, AppError> {
    let midnight = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| AppError::InvalidConfig(format!("invalid date {}-{}-{}", year, month, day)))?;
    Ok(DateTime::from_millis(midnight.and_utc().timestamp_millis()))
}

/// Constrói os 2 pedidos de exemplo.
/// `user_id` repete o email do comprador; totais não são conferidos.
pub fn seed_orders() -> Result<Vec<Order>, AppError> {
    Ok(vec![
        Order {
            id: ObjectId::new(),
            order_id: "ORD-001".into(),
            user_id: "john.doe@example.com".into(),
            items: vec![
                OrderItem {
                    product_name: "Laptop Pro".into(),
                    quantity: 1,
                    price: 1299.99,
                },
                OrderItem {
                    product_name: "Wireless Mouse".into(),
                    quantity: 2,
                    price: 29.99,
                },
            ],
            total_amount: 1359.97,
            status: "completed".into(),
            shipping_address: ShippingAddress {
                street: "123 Main St".into(),
                city: "New York".into(),
                country: "USA".into(),
                zip_code: "10001".into(),
            },
            order_date: utc_date(2024, 9, 1)?,
            delivery_date: Some(utc_date(2024, 9, 5)?),
        },
        Order {
            id: ObjectId::new(),
            order_id: "ORD-002".into(),
            user_id: "jane.smith@example.com".into(),
            items: vec![OrderItem {
                product_name: "Coffee Maker".into(),
                quantity: 1,
                price: 89.99,
            }],
            total_amount: 89.99,
            status: "pending".into(),
            shipping_address: ShippingAddress {
                street: "456 Oak Ave".into(),
                city: "San Francisco".into(),
                country: "USA".into(),
                zip_code: "94102".into(),
            },
            order_date: utc_date(2024, 9, 3)?,
            delivery_date: None,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeds::seed_users;
    use mongodb::bson::Bson;

    fn find<'a>(orders: &'a [Order], order_id: &str) -> &'a Order {
        orders.iter().find(|o| o.order_id == order_id).unwrap()
    }

    #[test]
    fn test_completed_order_was_delivered() {
        let orders = seed_orders().unwrap();
        let order = find(&orders, "ORD-001");

        assert_eq!(order.status, "completed");
        assert_eq!(order.delivery_date, Some(utc_date(2024, 9, 5).unwrap()));
        assert_eq!(order.order_date.timestamp_millis(), 1_725_148_800_000);
    }

    #[test]
    fn test_pending_order_stores_explicit_null() {
        let orders = seed_orders().unwrap();
        let order = find(&orders, "ORD-002");
        assert_eq!(order.status, "pending");
        assert!(order.delivery_date.is_none());

        let doc = mongodb::bson::to_document(order).unwrap();
        assert_eq!(doc.get("deliveryDate"), Some(&Bson::Null));
        assert_eq!(doc.get_document("shippingAddress").unwrap().get_str("zipCode").unwrap(), "94102");
    }

    #[test]
    fn test_totals_match_items() {
        for order in seed_orders().unwrap() {
            assert!((order.items_subtotal() - order.total_amount).abs() < 0.005, "{}", order.order_id);
        }
    }

    #[test]
    fn test_user_ids_point_at_seeded_emails() {
        let users = seed_users(DateTime::now());
        for order in seed_orders().unwrap() {
            assert!(users.iter().any(|u| u.email == order.user_id), "{}", order.user_id);
        }
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        assert!(matches!(utc_date(2024, 2, 30), Err(AppError::InvalidConfig(_))));
    }
}
