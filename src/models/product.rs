use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub image_url: String,
    pub category: String,
    pub brand: String,
    pub stock_quantity: i32,
    pub rating: Decimal,
    pub is_featured: bool,
    pub is_on_sale: bool,
    pub date_added: DateTime<Utc>,
}

impl Product {
    // Price filtering and price sorting both work on this, never on `price` alone.
    pub fn effective_price(&self) -> Decimal {
        self.discount_price.unwrap_or(self.price)
    }
}
