use chrono::Utc;
use hdmobil_api::modules::cart::model::{CartItem, CartLine};
use hdmobil_api::modules::cart::service::cart_subtotal;
use hdmobil_api::modules::discounts::service::discount_amount;
use hdmobil_api::modules::orders::service::format_order_number;
use hdmobil_api::modules::payments::model::PaymentMethod;
use hdmobil_api::modules::payments::service::payment_fee;
use hdmobil_api::modules::products::model::Product;
use hdmobil_api::modules::reviews::service::average_rating;
use uuid::Uuid;

fn product(price_with_vat: f64) -> Product {
    Product {
        id: Uuid::new_v4(),
        sku: "SKU-1".to_string(),
        slug: "iphone-13".to_string(),
        name_sk: "iPhone 13".to_string(),
        description_sk: None,
        category_id: None,
        price_without_vat: price_with_vat / 1.2,
        price_with_vat,
        vat_rate: 20.0,
        vat_mode: "standard".to_string(),
        stock_quantity: 10,
        main_image_url: None,
        is_active: true,
        is_featured: false,
        is_new: false,
        is_bazaar: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn line(price_with_vat: f64, quantity: i32) -> CartLine {
    let product = product(price_with_vat);
    CartLine {
        item: CartItem {
            id: Uuid::new_v4(),
            cart_id: Uuid::new_v4(),
            product_id: product.id,
            quantity,
            created_at: Utc::now(),
        },
        product,
    }
}

#[test]
fn test_cart_subtotal_sums_gross_line_totals() {
    let lines = vec![line(100.0, 2), line(49.9, 1)];
    assert!((cart_subtotal(&lines) - 249.9).abs() < 1e-9);
}

#[test]
fn test_cart_subtotal_empty_cart_is_zero() {
    assert_eq!(cart_subtotal(&[]), 0.0);
}

#[test]
fn test_percentage_discount_scales_with_total() {
    assert_eq!(discount_amount("percentage", 10.0, 200.0), 20.0);
    assert_eq!(discount_amount("percentage", 10.0, 0.0), 0.0);
}

#[test]
fn test_fixed_discount_ignores_total() {
    assert_eq!(discount_amount("fixed", 5.0, 200.0), 5.0);
    assert_eq!(discount_amount("fixed", 5.0, 3.0), 5.0);
}

#[test]
fn test_payment_fee_by_type() {
    let mut method = PaymentMethod {
        id: Uuid::new_v4(),
        code: "cod".to_string(),
        name_sk: "Dobierka".to_string(),
        fee_type: "fixed".to_string(),
        fee_fixed: 1.5,
        fee_percentage: 2.0,
        is_active: true,
        sort_order: 0,
    };
    assert_eq!(payment_fee(&method, 100.0), 1.5);

    method.fee_type = "percentage".to_string();
    assert_eq!(payment_fee(&method, 100.0), 2.0);
}

#[test]
fn test_order_number_format() {
    assert_eq!(format_order_number(7), "OBJ000007");
    assert_eq!(format_order_number(999_999), "OBJ999999");
}

#[test]
fn test_average_rating_rounding() {
    assert_eq!(average_rating(&[]), None);
    assert_eq!(average_rating(&[4, 5, 5]), Some(4.7));
}
