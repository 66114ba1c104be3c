//! Turns loosely typed request payloads into validated repository inputs.
//!
//! Create checks run in a fixed order and the first failure wins:
//! price is a number, name is non-blank, price is non-negative.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, ItemChanges, NewItem, UpdateItem};

pub const INVALID_PRICE: &str = "Price must be a valid number.";
pub const EMPTY_NAME: &str = "Item name cannot be empty.";
pub const NEGATIVE_PRICE: &str = "Item price cannot be negative.";
pub const INVALID_ID: &str = "The provided ID is not a valid UUID.";

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID regex should compile")
});

/// Accepts only the hyphenated 8-4-4-4-12 hex form.
pub fn parse_id(raw: &str) -> ItemResult<Uuid> {
    if !UUID_REGEX.is_match(raw) {
        return Err(ItemError::validation(INVALID_ID));
    }
    Uuid::parse_str(raw).map_err(|_| ItemError::validation(INVALID_ID))
}

fn price_number(value: Option<&Value>) -> ItemResult<f64> {
    value
        .and_then(Value::as_f64)
        .filter(|p| p.is_finite())
        .ok_or_else(|| ItemError::validation(INVALID_PRICE))
}

fn non_blank_name(value: Option<&Value>) -> ItemResult<String> {
    match value {
        Some(Value::String(name)) if !name.trim().is_empty() => Ok(name.clone()),
        _ => Err(ItemError::validation(EMPTY_NAME)),
    }
}

fn non_negative(price: f64) -> ItemResult<f64> {
    if price < 0.0 {
        return Err(ItemError::validation(NEGATIVE_PRICE));
    }
    // -0.0 passes the check above; adding +0.0 folds it to 0.0
    Ok(price + 0.0)
}

pub fn validate_new_item(input: &CreateItem) -> ItemResult<NewItem> {
    let price = price_number(input.price.as_ref())?;
    let name = non_blank_name(input.name.as_ref())?;
    let price = non_negative(price)?;

    Ok(NewItem { name, price })
}

/// Only present fields are checked; an explicit `null` counts as present.
pub fn validate_changes(input: &UpdateItem) -> ItemResult<ItemChanges> {
    let name = match &input.name {
        Some(value) => Some(non_blank_name(Some(value))?),
        None => None,
    };

    let price = match &input.price {
        Some(value) => Some(non_negative(price_number(Some(value))?)?),
        None => None,
    };

    Ok(ItemChanges { name, price })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create(body: Value) -> CreateItem {
        serde_json::from_value(body).unwrap()
    }

    fn update(body: Value) -> UpdateItem {
        serde_json::from_value(body).unwrap()
    }

    fn message(result: ItemResult<impl std::fmt::Debug>) -> String {
        match result.unwrap_err() {
            ItemError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_id_accepts_canonical_uuid() {
        let id = parse_id("00000000-0000-0000-0000-000000000000").unwrap();
        assert_eq!(id, Uuid::nil());

        assert!(parse_id("0190A1B2-C3D4-7E5F-8A9B-0C1D2E3F4A5B").is_ok());
    }

    #[test]
    fn test_parse_id_rejects_other_shapes() {
        for raw in [
            "123-abc-invalid-id",
            "",
            "00000000000000000000000000000000",
            "{00000000-0000-0000-0000-000000000000}",
            "urn:uuid:00000000-0000-0000-0000-000000000000",
            "0000000g-0000-0000-0000-000000000000",
        ] {
            assert_eq!(message(parse_id(raw)), INVALID_ID, "input: {raw:?}");
        }
    }

    #[test]
    fn test_valid_create() {
        let input = validate_new_item(&create(json!({ "name": "Laptop Pro", "price": 1200 })))
            .unwrap();
        assert_eq!(
            input,
            NewItem {
                name: "Laptop Pro".to_string(),
                price: 1200.0
            }
        );
    }

    #[test]
    fn test_create_keeps_name_untrimmed() {
        let input = validate_new_item(&create(json!({ "name": "  Mouse ", "price": 0 }))).unwrap();
        assert_eq!(input.name, "  Mouse ");
        assert_eq!(input.price, 0.0);
    }

    #[test]
    fn test_create_rejects_bad_price() {
        for body in [
            json!({ "name": "X" }),
            json!({ "name": "X", "price": null }),
            json!({ "name": "X", "price": "fifty" }),
            json!({ "name": "X", "price": "50" }),
            json!({ "name": "X", "price": true }),
            json!({ "name": "X", "price": [1] }),
        ] {
            assert_eq!(message(validate_new_item(&create(body))), INVALID_PRICE);
        }
    }

    #[test]
    fn test_create_rejects_blank_name() {
        for body in [
            json!({ "price": 100 }),
            json!({ "name": null, "price": 100 }),
            json!({ "name": "", "price": 100 }),
            json!({ "name": "   ", "price": 100 }),
            json!({ "name": 7, "price": 100 }),
        ] {
            assert_eq!(message(validate_new_item(&create(body))), EMPTY_NAME);
        }
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let result = validate_new_item(&create(json!({ "name": "X", "price": -50 })));
        assert_eq!(message(result), NEGATIVE_PRICE);
    }

    #[test]
    fn test_negative_zero_price_is_stored_as_zero() {
        let input = validate_new_item(&create(json!({ "name": "Free", "price": -0.0 }))).unwrap();
        assert_eq!(input.price, 0.0);
        assert!(input.price.is_sign_positive());

        let changes = validate_changes(&update(json!({ "price": -0.0 }))).unwrap();
        assert!(changes.price.unwrap().is_sign_positive());
    }

    #[test]
    fn test_create_price_type_checked_before_name() {
        let result = validate_new_item(&create(json!({ "name": "", "price": "fifty" })));
        assert_eq!(message(result), INVALID_PRICE);

        let result = validate_new_item(&create(json!({ "name": "", "price": -1 })));
        assert_eq!(message(result), EMPTY_NAME);
    }

    #[test]
    fn test_changes_only_check_present_fields() {
        let changes = validate_changes(&update(json!({}))).unwrap();
        assert!(changes.is_empty());

        let changes = validate_changes(&update(json!({ "price": 1350 }))).unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.price, Some(1350.0));
    }

    #[test]
    fn test_changes_reject_explicit_null() {
        assert_eq!(
            message(validate_changes(&update(json!({ "price": null })))),
            INVALID_PRICE
        );
        assert_eq!(
            message(validate_changes(&update(json!({ "name": null })))),
            EMPTY_NAME
        );
    }

    #[test]
    fn test_changes_reject_invalid_values() {
        assert_eq!(
            message(validate_changes(&update(json!({ "name": "  " })))),
            EMPTY_NAME
        );
        assert_eq!(
            message(validate_changes(&update(json!({ "price": "cheap" })))),
            INVALID_PRICE
        );
        assert_eq!(
            message(validate_changes(&update(json!({ "price": -0.01 })))),
            NEGATIVE_PRICE
        );
    }
}
