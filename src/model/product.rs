//! Product record and its write-side shapes.
//!
//! The remote service is authoritative for every field: ids are assigned by
//! the server on create, and replace/patch responses carry the resulting
//! full record.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for products.
///
/// Server-assigned, immutable once set, unique within the catalog.
/// Serializes transparently as its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sellable catalog entry, as returned by the remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

/// Body for `create` and `replace`: a full product minus the id.
///
/// The id never travels in a request body; on create the server assigns
/// one, on replace it is part of the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

/// Body for `patch`: only the fields being changed.
///
/// `None` fields are omitted from the serialized body so the server merges
/// rather than overwrites.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductPatch {
    /// True when no field is set; such a patch would be a no-op round trip.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.price.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.category.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_collection_shape() {
        let body = serde_json::json!({
            "id": 1,
            "title": "A",
            "price": 10.0,
            "description": "d",
            "image": "u",
            "category": "c"
        });
        let product: Product = serde_json::from_value(body).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.title, "A");
        assert_eq!(product.price, 10.0);
        assert_eq!(product.category, "c");
    }

    #[test]
    fn draft_body_carries_no_id() {
        let draft = ProductDraft {
            title: "Produit Test".to_string(),
            price: 19.99,
            description: "desc".to_string(),
            image: "img".to_string(),
            category: "test".to_string(),
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert!(body.get("id").is_none());
        assert_eq!(body["title"], "Produit Test");
        assert_eq!(body["price"], 19.99);
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = ProductPatch {
            price: Some(5.0),
            ..Default::default()
        };
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body["price"], 5.0);
        assert!(body.get("title").is_none());
        assert!(body.get("description").is_none());
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[test]
    fn empty_patch_is_detectable() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            title: Some("t".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn product_id_displays_raw_value() {
        assert_eq!(ProductId(21).to_string(), "21");
    }
}
