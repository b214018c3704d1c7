//! Product Models
//!
//! Wire shapes of the product store. JSON fields are camelCase.

use std::fmt;

use reorder_core::Entity;
use serde::{Deserialize, Serialize};

/// Product identifier as assigned by the store.
///
/// Numeric and string ids are distinct: `Int(1)` never equals `Str("1")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Int(id) => write!(f, "{}", id),
            ProductId::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Int(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Str(id.to_string())
    }
}

/// Editable product fields, sent on create and update
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub image: String,
    pub brand: String,
    pub product_name: String,
    /// Store prices are plain JSON numbers and may carry a fraction
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

/// Product record as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub draft: ProductDraft,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

/// Put products in catalog order.
///
/// Products carrying `sortOrder` come first, ascending; the rest keep the
/// order the store returned them in.
pub fn sort_catalog(products: &mut [Product]) {
    products.sort_by_key(|p| (p.draft.sort_order.is_none(), p.draft.sort_order));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_stay_distinct() {
        let ids: Vec<ProductId> = serde_json::from_str(r#"[1, "1", "abc"]"#).unwrap();
        assert_eq!(ids, vec![ProductId::Int(1), ProductId::from("1"), ProductId::from("abc")]);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(ids[0].to_string(), ids[1].to_string());
    }

    #[test]
    fn test_product_wire_format() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 7,
                "image": "https://placehold.co/300",
                "brand": "Porter",
                "productName": "FORCE SHOULDER BAG",
                "price": 388000,
                "freeShipping": true,
                "reviewCount": 137,
                "rating": 5
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, ProductId::Int(7));
        assert_eq!(product.draft.product_name, "FORCE SHOULDER BAG");
        assert_eq!(product.draft.free_shipping, Some(true));
        assert_eq!(product.draft.original_price, None);
        assert_eq!(product.draft.price, 388000.0);

        let json = serde_json::to_value(&product.draft).unwrap();
        assert_eq!(json["productName"], "FORCE SHOULDER BAG");
        assert!(json.get("originalPrice").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_fractional_prices_decode() {
        let product: Product = serde_json::from_str(
            r#"{"id": "b", "image": "", "brand": "", "productName": "", "price": 12.5, "originalPrice": 20}"#,
        )
        .unwrap();

        assert_eq!(product.draft.price, 12.5);
        assert_eq!(product.draft.original_price, Some(20.0));
    }

    #[test]
    fn test_sort_catalog_prefers_sort_order() {
        let product = |id: i64, sort_order: Option<i64>| Product {
            id: ProductId::Int(id),
            draft: ProductDraft { sort_order, ..Default::default() },
        };
        let mut products = vec![
            product(1, None),
            product(2, Some(2)),
            product(3, None),
            product(4, Some(0)),
        ];

        sort_catalog(&mut products);
        let ids: Vec<String> = products.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["4", "2", "1", "3"]);
    }
}
