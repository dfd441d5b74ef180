// src/dtos/product.rs
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{AppError, FieldError};
use crate::models::product::Product;

// Body for POST and PUT. Everything is defaulted so a sparse body still
// deserializes and validate() can report all missing fields at once.
// `id` is ignored on create; on update it must match the path id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub rating: Decimal,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub date_added: Option<DateTime<Utc>>,
}

impl ProductPayload {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        } else if self.name.chars().count() > 100 {
            errors.push(FieldError::new("name", "name must be 100 characters or fewer"));
        }

        if self.description.trim().is_empty() {
            errors.push(FieldError::new("description", "description is required"));
        } else if self.description.chars().count() > 1000 {
            errors.push(FieldError::new(
                "description",
                "description must be 1000 characters or fewer",
            ));
        }

        if self.price < dec!(0.01) || self.price > dec!(10000) {
            errors.push(FieldError::new("price", "price must be between 0.01 and 10000"));
        }

        if self.image_url.chars().count() > 500 {
            errors.push(FieldError::new(
                "imageUrl",
                "imageUrl must be 500 characters or fewer",
            ));
        }

        if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "category is required"));
        } else if self.category.chars().count() > 50 {
            errors.push(FieldError::new(
                "category",
                "category must be 50 characters or fewer",
            ));
        }

        if self.brand.chars().count() > 50 {
            errors.push(FieldError::new("brand", "brand must be 50 characters or fewer"));
        }

        if self.stock_quantity < 0 || self.stock_quantity > 10_000 {
            errors.push(FieldError::new(
                "stockQuantity",
                "stockQuantity must be between 0 and 10000",
            ));
        }

        if self.rating < Decimal::ZERO || self.rating > dec!(5) {
            errors.push(FieldError::new("rating", "rating must be between 0 and 5"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }

    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            discount_price: self.discount_price,
            image_url: self.image_url,
            category: self.category,
            brand: self.brand,
            stock_quantity: self.stock_quantity,
            rating: self.rating,
            is_featured: self.is_featured,
            is_on_sale: self.is_on_sale,
            date_added: self.date_added.unwrap_or_else(Utc::now),
        }
    }
}

// Listing parameters. The browser client sends PascalCase names, so each
// field carries an alias alongside its camelCase form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    #[serde(default, alias = "Category")]
    pub category: Option<String>,
    #[serde(default, alias = "MinPrice")]
    pub min_price: Option<Decimal>,
    #[serde(default, alias = "MaxPrice")]
    pub max_price: Option<Decimal>,
    #[serde(default, alias = "OnSale")]
    pub on_sale: Option<bool>,
    #[serde(default, alias = "Featured")]
    pub featured: Option<bool>,
    #[serde(default, alias = "SortBy")]
    pub sort_by: Option<String>,
    #[serde(default, alias = "SortDesc")]
    pub sort_desc: bool,
    #[serde(default = "default_page_number", alias = "PageNumber", alias = "Page", alias = "page")]
    pub page_number: u32,
    #[serde(default = "default_page_size", alias = "PageSize")]
    pub page_size: u32,
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

impl ProductQueryParams {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if let Some(min) = self.min_price {
            if min < Decimal::ZERO || min > dec!(10000) {
                errors.push(FieldError::new(
                    "minPrice",
                    "minPrice must be between 0 and 10000",
                ));
            }
        }

        if let Some(max) = self.max_price {
            if max < Decimal::ZERO || max > dec!(10000) {
                errors.push(FieldError::new(
                    "maxPrice",
                    "maxPrice must be between 0 and 10000",
                ));
            }
        }

        if self.page_number < 1 {
            errors.push(FieldError::new("pageNumber", "pageNumber must be at least 1"));
        }

        if self.page_size < 1 || self.page_size > 50 {
            errors.push(FieldError::new("pageSize", "pageSize must be between 1 and 50"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation(errors))
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total_items: usize, page_number: u32, page_size: u32) -> Self {
        let total_pages = total_items.div_ceil(page_size as usize) as u32;
        Self {
            items,
            total_items,
            page_number,
            page_size,
            total_pages,
            has_previous_page: page_number > 1,
            has_next_page: page_number < total_pages,
        }
    }
}
