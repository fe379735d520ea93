use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry.
///
/// Both fields default, so request bodies may omit either one. An omitted
/// field is indistinguishable from its zero value; [`Product::apply_update`]
/// leans on exactly that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Product name; duplicates are allowed
    #[serde(default)]
    pub name: String,
    /// Unit price; non-negative by convention, unenforced
    #[serde(default)]
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Merge an update into this product.
    ///
    /// An empty `name` and a `price` of exactly 0.0 mean "leave unchanged".
    /// That makes it impossible to set a price to literal zero through an
    /// update; the ambiguity is a documented wart kept for compatibility.
    pub fn apply_update(&mut self, update: Product) {
        if !update.name.is_empty() {
            self.name = update.name;
        }
        if update.price != 0.0 {
            self.price = update.price;
        }
    }
}

/// The five-entry catalog every process starts with.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new("Shoes", 25.00),
        Product::new("Short", 10.00),
        Product::new("Cam", 40.00),
        Product::new("Mouse", 30.00),
        Product::new("WebCam", 20.00),
    ]
}
