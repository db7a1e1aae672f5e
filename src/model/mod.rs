//! # Catalog Domain Model
//!
//! Pure data structures for the product catalog: the [`Product`] record as
//! the server returns it, plus the write-side shapes ([`ProductDraft`] for
//! create/replace and [`ProductPatch`] for partial updates).

pub mod product;

pub use product::{Product, ProductDraft, ProductId, ProductPatch};
