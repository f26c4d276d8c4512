use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ProductResult;
use crate::validation::{parse_expiration, validate_expiration};

/// Product entity as stored in the repository and echoed in responses.
///
/// The id is assigned by the repository; clients never supply it. The
/// expiration date serializes with the `YYYY-MM-DD` wire layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, repository-assigned and immutable
    pub id: i64,
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: i64,
    /// Business identifier, unique across all stored products
    pub code_value: String,
    /// Whether the product is publicly listed
    pub is_published: bool,
    /// Expiration date
    pub expiration: NaiveDate,
    /// Unit price
    pub price: f64,
}

/// Request body for creating a product or replacing one wholesale
/// (POST and PUT). Every field is required.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity: i64,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub code_value: String,
    pub is_published: bool,
    /// Expiration date in `YYYY-MM-DD` form
    #[validate(custom(function = validate_expiration))]
    pub expiration: String,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: f64,
}

/// Request body for partial updates (PATCH). Only the fields present are
/// validated and applied; absent fields leave the stored record untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub quantity: Option<i64>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    /// Expiration date in `YYYY-MM-DD` form
    #[validate(custom(function = validate_expiration))]
    pub expiration: Option<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: Option<f64>,
}

/// Fully-typed candidate record handed to the repository by save and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductData {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: NaiveDate,
    pub price: f64,
}

/// Typed patch handed to the repository by partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    pub expiration: Option<NaiveDate>,
    pub price: Option<f64>,
}

impl Product {
    /// Materialize a record under a repository-assigned id.
    pub fn from_data(id: i64, data: ProductData) -> Self {
        Self {
            id,
            name: data.name,
            quantity: data.quantity,
            code_value: data.code_value,
            is_published: data.is_published,
            expiration: data.expiration,
            price: data.price,
        }
    }

    /// Merge the present fields of `patch` onto this record. The id never
    /// changes.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(code_value) = patch.code_value {
            self.code_value = code_value;
        }
        if let Some(is_published) = patch.is_published {
            self.is_published = is_published;
        }
        if let Some(expiration) = patch.expiration {
            self.expiration = expiration;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}

impl CreateProduct {
    /// Convert into the typed candidate, parsing the expiration date.
    pub fn into_data(self) -> ProductResult<ProductData> {
        let expiration = parse_expiration(&self.expiration)?;
        Ok(ProductData {
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration,
            price: self.price,
        })
    }
}

impl UpdateProduct {
    /// Convert into the typed patch, parsing the expiration date when
    /// present.
    pub fn into_patch(self) -> ProductResult<ProductPatch> {
        let expiration = self
            .expiration
            .as_deref()
            .map(parse_expiration)
            .transpose()?;
        Ok(ProductPatch {
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration,
            price: self.price,
        })
    }
}
