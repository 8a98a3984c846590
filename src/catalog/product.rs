use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// Immutable snapshot of one catalog entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Product {
    /// `brand - category`, or just the category.
    pub fn label(&self) -> String {
        self.brand.as_deref().map_or_else(
            || self.category.clone(),
            |brand| format!("{brand} - {}", self.category),
        )
    }

    pub fn price_text(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Badge text for a non-zero discount.
    pub fn discount_badge(&self) -> Option<String> {
        self.discount
            .filter(|d| *d > 0.0)
            .map(|d| format!("-{d}%"))
    }
}

impl Rating {
    /// Five stars, `★` per whole point and `☆` for the rest.
    #[allow(clippy::cast_sign_loss)]
    pub fn stars(&self) -> String {
        let rate = self.rate.clamp(0.0, 5.0);
        let full = rate.floor() as usize;
        let mut stars = "★".repeat(full);
        stars.push_str(&"☆".repeat(5 - full));
        stars
    }
}

/// Decode a catalog response body.
///
/// Accepts a bare array of products or an object carrying the array under
/// `products`; anything else is a format error.
pub fn parse_catalog(body: &str) -> Result<Vec<Product>, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Format(format!("invalid JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("products") {
            Some(Value::Array(items)) => items,
            _ => return Err(FetchError::Format("no `products` array in object".to_string())),
        },
        other => return Err(FetchError::Format(format!("unexpected JSON value: {other}"))),
    };

    serde_json::from_value(Value::Array(items))
        .map_err(|e| FetchError::Format(format!("invalid product: {e}")))
}
