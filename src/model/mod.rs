use std::fmt;

use serde::Deserialize;

use crate::error::{Result, ToolError};

/// Handle to a product owned by a [`ProductStore`]. Handles are only
/// meaningful for the store that issued them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(usize);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Parses a price typed by a user. Negative values are accepted; text that is
/// not a finite number is rejected.
pub fn parse_price(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(ToolError::InvalidPrice(input.trim().to_string())),
    }
}

/// A catalog entry with an append-only review history.
///
/// The price is expected to be non-negative but is deliberately not
/// validated; callers may store any value.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    description: String,
    price: f64,
    reviews: Vec<String>,
}

impl Product {
    /// Creates a product with an empty review sequence.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            reviews: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Reviews in the order they were added.
    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    /// Replaces the price unconditionally.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Appends `review` verbatim. Author prefixes are the caller's concern.
    pub fn add_review(&mut self, review: impl Into<String>) {
        self.reviews.push(review.into());
    }
}

/// Sole owner of every product in a session. Role holders keep
/// [`ProductId`]s into the store instead of references to products.
#[derive(Debug, Default, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `product` and returns its handle.
    pub fn insert(&mut self, product: Product) -> ProductId {
        let id = ProductId(self.products.len());
        self.products.push(product);
        id
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.0)
    }

    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(id.0)
    }

    /// Resolves `id`, failing with [`ToolError::UnknownProduct`] for foreign
    /// handles.
    pub fn require(&self, id: ProductId) -> Result<&Product> {
        self.get(id).ok_or(ToolError::UnknownProduct(id))
    }

    pub fn require_mut(&mut self, id: ProductId) -> Result<&mut Product> {
        self.get_mut(id).ok_or(ToolError::UnknownProduct(id))
    }

    /// Number of products created in this store.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products
            .iter()
            .enumerate()
            .map(|(index, product)| (ProductId(index), product))
    }
}

/// Initial product definition, as found in JSON seed files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductSeed {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub reviews: Vec<String>,
}

impl ProductSeed {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            reviews: Vec::new(),
        }
    }

    /// Materialises the seed, replaying its reviews in order.
    pub fn into_product(self) -> Product {
        let mut product = Product::new(self.name, self.description, self.price);
        for review in self.reviews {
            product.add_review(review);
        }
        product
    }
}

/// The two products every session starts with when no seed file is given.
pub fn default_seeds() -> Vec<ProductSeed> {
    vec![
        ProductSeed::new("Product 1", "Description 1", 9.99),
        ProductSeed::new("Product 2", "Description 2", 14.99),
    ]
}
