use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

/// Item as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned on create
    pub id: Uuid,
    pub name: String,
    /// Never negative
    #[schema(example = 12.5)]
    pub price: f64,
}

/// Create payload as received over HTTP.
///
/// Fields stay untyped so that a wrong JSON type is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateItem {
    #[schema(value_type = Option<String>, example = "Laptop Pro")]
    pub name: Option<Value>,
    #[schema(value_type = Option<f64>, example = 1200.0)]
    pub price: Option<Value>,
}

/// Partial update payload as received over HTTP.
///
/// An absent field is `None`; a field sent as `null` is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateItem {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, example = "Laptop Pro X")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, example = 1350.0)]
    pub price: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Validated create input handed to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub price: f64,
}

/// Validated changes; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

impl Item {
    pub fn new(id: Uuid, input: NewItem) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
        }
    }

    pub fn apply_changes(&mut self, changes: ItemChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
    }
}
