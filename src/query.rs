// src/query.rs
//
// In-memory query engine for the catalog: filter, stable sort, paginate.
// Takes an id-ordered snapshot from the store and returns the requested
// page plus the filtered-but-unpaginated match count.
use std::cmp::Ordering;

use crate::dtos::product::ProductQueryParams;
use crate::models::product::Product;

pub fn select(catalog: Vec<Product>, params: &ProductQueryParams) -> (Vec<Product>, usize) {
    let mut matches: Vec<Product> = catalog
        .into_iter()
        .filter(|p| matches_filters(p, params))
        .collect();
    let total = matches.len();

    apply_sorting(&mut matches, params.sort_by.as_deref(), params.sort_desc);

    (paginate(matches, params.page_number, params.page_size), total)
}

// All predicates are ANDed. A blank category filter is treated as absent.
fn matches_filters(product: &Product, params: &ProductQueryParams) -> bool {
    if let Some(category) = &params.category {
        if !category.trim().is_empty() && product.category != *category {
            return false;
        }
    }

    if let Some(min) = params.min_price {
        if product.effective_price() < min {
            return false;
        }
    }

    if let Some(max) = params.max_price {
        if product.effective_price() > max {
            return false;
        }
    }

    if let Some(on_sale) = params.on_sale {
        if product.is_on_sale != on_sale {
            return false;
        }
    }

    if let Some(featured) = params.featured {
        if product.is_featured != featured {
            return false;
        }
    }

    true
}

fn apply_sorting(products: &mut [Product], sort_by: Option<&str>, sort_desc: bool) {
    match sort_by.map(str::to_lowercase).as_deref() {
        Some("price") => sort_by_key(products, sort_desc, |p| p.effective_price()),
        Some("name") => sort_by_key(products, sort_desc, |p| p.name.clone()),
        Some("rating") => sort_by_key(products, sort_desc, |p| p.rating),
        Some("date") => sort_by_key(products, sort_desc, |p| p.date_added),
        // Unknown or absent key: stable default ordering by id
        _ => sort_by_key(products, sort_desc, |p| p.id),
    }
}

// Equal keys always fall back to ascending id, in both directions, so
// repeated listings page through ties deterministically.
fn sort_by_key<K: Ord>(products: &mut [Product], desc: bool, key: impl Fn(&Product) -> K) {
    products.sort_by(|a, b| {
        let by_key = key(a).cmp(&key(b));
        let by_key = if desc { by_key.reverse() } else { by_key };
        by_key.then_with(|| a.id.cmp(&b.id))
    });
}

// 1-based pages; anything past the last page is an empty slice, not an error.
fn paginate(products: Vec<Product>, page_number: u32, page_size: u32) -> Vec<Product> {
    products
        .into_iter()
        .skip(page_number.saturating_sub(1) as usize * page_size as usize)
        .take(page_size as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn product(
        id: i64,
        name: &str,
        category: &str,
        price: Decimal,
        discount: Option<Decimal>,
    ) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            discount_price: discount,
            image_url: String::new(),
            category: category.to_string(),
            brand: "Acme".to_string(),
            stock_quantity: 10,
            rating: dec!(3.0),
            is_featured: false,
            is_on_sale: discount.is_some(),
            date_added: Utc::now() - Duration::days(id),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Walnut Desk", "Furniture", dec!(800.00), None),
            product(2, "Desk Lamp", "Lighting", dec!(60.00), Some(dec!(45.00))),
            product(3, "Monitor", "Electronics", dec!(350.00), Some(dec!(299.99))),
            product(4, "Keyboard", "Electronics", dec!(120.00), None),
            product(5, "Office Chair", "Furniture", dec!(450.00), Some(dec!(400.00))),
        ]
    }

    fn params(value: serde_json::Value) -> ProductQueryParams {
        serde_json::from_value(value).unwrap()
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn no_filters_returns_everything_in_id_order() {
        let (page, total) = select(catalog(), &params(json!({})));
        assert_eq!(total, 5);
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn category_filter_is_exact() {
        let (page, total) = select(catalog(), &params(json!({ "category": "Electronics" })));
        assert_eq!(total, 2);
        assert_eq!(ids(&page), vec![3, 4]);

        let (page, total) = select(catalog(), &params(json!({ "category": "electronics" })));
        assert_eq!(total, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn blank_category_filter_is_ignored() {
        let (_, total) = select(catalog(), &params(json!({ "category": "  " })));
        assert_eq!(total, 5);
    }

    #[test]
    fn filters_combine_with_and() {
        let (page, total) = select(
            catalog(),
            &params(json!({ "category": "Electronics", "onSale": true })),
        );
        assert_eq!(total, 1);
        assert_eq!(ids(&page), vec![3]);
    }

    #[test]
    fn price_bounds_use_effective_price_inclusive() {
        // Monitor's effective price is its 299.99 discount, so minPrice=300
        // excludes it even though its list price is 350.
        let (page, _) = select(
            catalog(),
            &params(json!({ "minPrice": 300.0, "maxPrice": 900.0 })),
        );
        assert_eq!(ids(&page), vec![1, 5]);

        // Inclusive on both ends.
        let (page, _) = select(
            catalog(),
            &params(json!({ "minPrice": 299.99, "maxPrice": 400.0 })),
        );
        assert_eq!(ids(&page), vec![3, 5]);
    }

    #[test]
    fn featured_filter_matches_exactly() {
        let mut products = catalog();
        products[0].is_featured = true;
        products[3].is_featured = true;

        let (page, _) = select(products.clone(), &params(json!({ "featured": true })));
        assert_eq!(ids(&page), vec![1, 4]);

        let (page, _) = select(products, &params(json!({ "featured": false })));
        assert_eq!(ids(&page), vec![2, 3, 5]);
    }

    #[test]
    fn sort_by_price_uses_effective_price() {
        let (page, _) = select(catalog(), &params(json!({ "sortBy": "price" })));
        assert_eq!(ids(&page), vec![2, 4, 3, 5, 1]);
    }

    #[test]
    fn sort_desc_reverses_a_fixed_set() {
        let (asc, _) = select(catalog(), &params(json!({ "sortBy": "price" })));
        let (desc, _) = select(catalog(), &params(json!({ "sortBy": "price", "sortDesc": true })));
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn sort_by_name_is_lexicographic() {
        let (page, _) = select(catalog(), &params(json!({ "sortBy": "name" })));
        let names: Vec<&str> = page.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Desk Lamp", "Keyboard", "Monitor", "Office Chair", "Walnut Desk"]
        );
    }

    #[test]
    fn sort_key_is_case_insensitive() {
        let (page, _) = select(catalog(), &params(json!({ "sortBy": "PRICE" })));
        assert_eq!(ids(&page), vec![2, 4, 3, 5, 1]);
    }

    #[test]
    fn sort_by_date_orders_by_date_added() {
        // date_added is staggered one day per id, newest first is id 1.
        let (page, _) = select(catalog(), &params(json!({ "sortBy": "date", "sortDesc": true })));
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn unknown_sort_key_falls_back_to_id() {
        let (page, _) = select(catalog(), &params(json!({ "sortBy": "popularity" })));
        assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);

        let (page, _) = select(
            catalog(),
            &params(json!({ "sortBy": "popularity", "sortDesc": true })),
        );
        assert_eq!(ids(&page), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn equal_sort_keys_tie_break_by_id_both_directions() {
        let mut products = catalog();
        for p in &mut products {
            p.rating = dec!(4.0);
        }
        products[2].rating = dec!(5.0);

        let (asc, _) = select(products.clone(), &params(json!({ "sortBy": "rating" })));
        assert_eq!(ids(&asc), vec![1, 2, 4, 5, 3]);

        // Descending flips the rating order but equal ratings stay in id order.
        let (desc, _) = select(
            products,
            &params(json!({ "sortBy": "rating", "sortDesc": true })),
        );
        assert_eq!(ids(&desc), vec![3, 1, 2, 4, 5]);
    }

    #[test]
    fn pages_concatenate_to_the_full_result_exactly_once() {
        let (_, total) = select(catalog(), &params(json!({ "pageSize": 2 })));
        let total_pages = total.div_ceil(2);
        assert_eq!(total_pages, 3);

        let mut seen = Vec::new();
        for page_number in 1..=total_pages {
            let (page, _) = select(
                catalog(),
                &params(json!({ "sortBy": "price", "pageSize": 2, "pageNumber": page_number })),
            );
            seen.extend(ids(&page));
        }
        assert_eq!(seen, vec![2, 4, 3, 5, 1]);
    }

    #[test]
    fn total_counts_matches_before_pagination() {
        let (page, total) = select(
            catalog(),
            &params(json!({ "pageSize": 2, "pageNumber": 3 })),
        );
        assert_eq!(total, 5);
        assert_eq!(ids(&page), vec![5]);
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let (page, total) = select(catalog(), &params(json!({ "pageNumber": 99 })));
        assert_eq!(total, 5);
        assert!(page.is_empty());
    }
}
