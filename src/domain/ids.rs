//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Line-item identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(String);

impl LineItemId {
    /// Create a new LineItemId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the line-item ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LineItemId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for LineItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Product identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ProductId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Discount identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountId(String);

impl DiscountId {
    /// Create a new DiscountId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the discount ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiscountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DiscountId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for DiscountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_item_id_new_and_as_str() {
        let id = LineItemId::new("item-1");
        assert_eq!(id.as_str(), "item-1");
    }

    #[test]
    fn line_item_id_from_string() {
        let id = LineItemId::from("hello".to_string());
        assert_eq!(id.as_str(), "hello");
    }

    #[test]
    fn line_item_id_from_str() {
        let id = LineItemId::from("world");
        assert_eq!(id.as_str(), "world");
    }

    #[test]
    fn line_item_id_display() {
        let id = LineItemId::new("display-test");
        assert_eq!(format!("{}", id), "display-test");
    }

    #[test]
    fn product_id_new_and_as_str() {
        let id = ProductId::new("product-9");
        assert_eq!(id.as_str(), "product-9");
    }

    #[test]
    fn product_id_display() {
        let id = ProductId::new("display-test");
        assert_eq!(format!("{}", id), "display-test");
    }

    #[test]
    fn discount_id_new_and_as_str() {
        let id = DiscountId::new("discount-5");
        assert_eq!(id.as_str(), "discount-5");
    }

    #[test]
    fn discount_id_serializes_transparently() {
        let id = DiscountId::new("flat10");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"flat10\"");
    }
}
