// src/seed.rs
use chrono::{Duration, Utc};
use rust_decimal_macros::dec;

use crate::models::product::Product;

// Demo catalog loaded at startup. The store is in-memory, so every boot
// starts from these eight records; ids continue from 9.
pub fn demo_catalog() -> Vec<Product> {
    let now = Utc::now();

    vec![
        Product {
            id: 1,
            name: "Divine Luxury Watch".to_string(),
            description: "Elegant luxury watch with diamond embellishments and a gold-plated finish."
                .to_string(),
            price: dec!(599.99),
            discount_price: Some(dec!(499.99)),
            image_url: "/images/luxury-watch.jpg".to_string(),
            category: "Watches".to_string(),
            brand: "Divine Luxury".to_string(),
            stock_quantity: 10,
            rating: dec!(4.8),
            is_featured: true,
            is_on_sale: true,
            date_added: now - Duration::days(30),
        },
        Product {
            id: 2,
            name: "Divine Premium Headphones".to_string(),
            description: "Noise-cancelling wireless headphones with premium sound quality and comfort."
                .to_string(),
            price: dec!(349.99),
            discount_price: Some(dec!(299.99)),
            image_url: "/images/headphones.jpg".to_string(),
            category: "Electronics".to_string(),
            brand: "Divine Audio".to_string(),
            stock_quantity: 25,
            rating: dec!(4.6),
            is_featured: true,
            is_on_sale: true,
            date_added: now - Duration::days(15),
        },
        Product {
            id: 3,
            name: "Divine Leather Handbag".to_string(),
            description: "Handcrafted luxury leather handbag with gold accents.".to_string(),
            price: dec!(899.99),
            discount_price: None,
            image_url: "/images/leather-handbag.jpg".to_string(),
            category: "Fashion".to_string(),
            brand: "Divine Fashion".to_string(),
            stock_quantity: 5,
            rating: dec!(4.9),
            is_featured: true,
            is_on_sale: false,
            date_added: now - Duration::days(7),
        },
        Product {
            id: 4,
            name: "Divine Smart Watch".to_string(),
            description: "Smart watch with health monitoring features and premium design.".to_string(),
            price: dec!(299.99),
            discount_price: Some(dec!(249.99)),
            image_url: "/images/smart-watch.jpg".to_string(),
            category: "Electronics".to_string(),
            brand: "Divine Tech".to_string(),
            stock_quantity: 50,
            rating: dec!(4.5),
            is_featured: false,
            is_on_sale: true,
            date_added: now - Duration::days(10),
        },
        Product {
            id: 5,
            name: "Divine Perfume".to_string(),
            description: "Luxury fragrance with notes of jasmine, sandalwood, and vanilla.".to_string(),
            price: dec!(199.99),
            discount_price: None,
            image_url: "/images/perfume.jpg".to_string(),
            category: "Beauty".to_string(),
            brand: "Divine Scents".to_string(),
            stock_quantity: 30,
            rating: dec!(4.7),
            is_featured: false,
            is_on_sale: false,
            date_added: now - Duration::days(20),
        },
        Product {
            id: 6,
            name: "Divine Designer Sunglasses".to_string(),
            description: "Polarized designer sunglasses with UV protection.".to_string(),
            price: dec!(249.99),
            discount_price: Some(dec!(199.99)),
            image_url: "/images/sunglasses.jpg".to_string(),
            category: "Fashion".to_string(),
            brand: "Divine Eyewear".to_string(),
            stock_quantity: 15,
            rating: dec!(4.4),
            is_featured: false,
            is_on_sale: true,
            date_added: now - Duration::days(25),
        },
        Product {
            id: 7,
            name: "Divine Smartphone".to_string(),
            description: "Flagship smartphone with high-resolution camera and fast processor."
                .to_string(),
            price: dec!(999.99),
            discount_price: Some(dec!(899.99)),
            image_url: "/images/smartphone.jpg".to_string(),
            category: "Electronics".to_string(),
            brand: "Divine Tech".to_string(),
            stock_quantity: 40,
            rating: dec!(4.7),
            is_featured: true,
            is_on_sale: true,
            date_added: now - Duration::days(5),
        },
        Product {
            id: 8,
            name: "Divine Skincare Set".to_string(),
            description: "Premium skincare set with anti-aging formula.".to_string(),
            price: dec!(149.99),
            discount_price: None,
            image_url: "/images/skincare-set.jpg".to_string(),
            category: "Beauty".to_string(),
            brand: "Divine Skincare".to_string(),
            stock_quantity: 20,
            rating: dec!(4.6),
            is_featured: false,
            is_on_sale: false,
            date_added: now - Duration::days(12),
        },
    ]
}
