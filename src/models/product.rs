use std::borrow::Cow;

use tracing::debug;
use validator::{Validate, ValidationError, ValidationErrors};

// custom error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// request dto, raw text as typed at the prompt
#[derive(Debug, Clone, Validate)]
pub struct NewProductRequest {
    #[validate(custom = "validate_name")]
    pub name: String,

    pub price: String,

    pub quantity: String,
}

impl NewProductRequest {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut error = ValidationError::new("name_required");
        error.message = Some(Cow::from("Product name cannot be empty"));
        return Err(error);
    }
    Ok(())
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

/// Key used for name lookups: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Parses a unit price. Must be a finite, non-negative number.
pub fn parse_price(raw: &str) -> Result<f64, ProductError> {
    let price: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ProductError::ValidationError("Price must be a valid number".to_string()))?;

    if !price.is_finite() {
        return Err(ProductError::ValidationError(
            "Price must be a valid number".to_string(),
        ));
    }
    if price < 0.0 {
        return Err(ProductError::ValidationError(
            "Price cannot be negative".to_string(),
        ));
    }

    // "-0" parses to negative zero
    Ok(price.abs())
}

/// Parses a stock quantity. Must be a whole number, zero or more.
pub fn parse_quantity(raw: &str) -> Result<u32, ProductError> {
    let quantity: i64 = raw.trim().parse().map_err(|_| {
        ProductError::ValidationError("Quantity must be a valid whole number".to_string())
    })?;

    if quantity < 0 {
        return Err(ProductError::ValidationError(
            "Quantity cannot be negative".to_string(),
        ));
    }

    u32::try_from(quantity)
        .map_err(|_| ProductError::ValidationError("Quantity is too large".to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: f64,
    quantity: u32,
}

impl Product {
    pub fn new(request: NewProductRequest) -> Result<Self, ProductError> {
        request
            .validate()
            .map_err(|e| ProductError::ValidationError(first_message(&e)))?;

        let price = parse_price(&request.price)?;
        let quantity = parse_quantity(&request.quantity)?;

        Ok(Self {
            name: request.name.trim().to_string(),
            price,
            quantity,
        })
    }

    pub fn parse(name: &str, price: &str, quantity: &str) -> Result<Self, ProductError> {
        Self::new(NewProductRequest::new(name, price, quantity))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replaces the price after validating `raw`, returning a confirmation notice.
    /// On error the current price is kept.
    pub fn set_price(&mut self, raw: &str) -> Result<String, ProductError> {
        self.price = parse_price(raw)?;
        debug!("Product '{}': price set to {:.2}", self.name, self.price);
        Ok(format!("Price updated to {:.2}", self.price))
    }

    /// Replaces the quantity after validating `raw`, returning a confirmation notice.
    /// On error the current quantity is kept.
    pub fn set_quantity(&mut self, raw: &str) -> Result<String, ProductError> {
        self.quantity = parse_quantity(raw)?;
        debug!("Product '{}': quantity set to {}", self.name, self.quantity);
        Ok(format!("Quantity updated to {} units", self.quantity))
    }

    pub fn total_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn matches_name(&self, query: &str) -> bool {
        normalize_name(&self.name) == normalize_name(query)
    }
}
