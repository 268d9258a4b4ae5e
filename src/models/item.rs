//! The item entity and the item lookup record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{FieldKind, FieldSpec, Location, Schema};

/// An item submitted by a client and echoed back once validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    #[schema(min_length = 1, example = "Widget")]
    pub name: String,
    #[schema(example = "A useful widget")]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: f64,
    #[schema(example = 0.99)]
    pub tax: Option<f64>,
}

impl Schema for Item {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", Location::Body, FieldKind::String).min_length(1),
        FieldSpec::optional("description", Location::Body, FieldKind::String),
        FieldSpec::required("price", Location::Body, FieldKind::Number),
        FieldSpec::optional("tax", Location::Body, FieldKind::Number),
    ];
}

/// Parameters of `GET /items/{item_id}`, returned unchanged as its body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemQuery {
    pub item_id: i64,
    pub q: Option<String>,
}

impl Schema for ItemQuery {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("item_id", Location::Path, FieldKind::Integer),
        FieldSpec::optional("q", Location::Query, FieldKind::String),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, Inputs};
    use serde_json::{json, Value};

    fn body(value: Value) -> Inputs {
        match value {
            Value::Object(map) => Inputs::body(map),
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_item_serializes_in_declaration_order_with_nulls() {
        let item: Item = validate(&body(json!({"price": 19.99, "name": "Gadget"}))).unwrap();
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"name":"Gadget","description":null,"price":19.99,"tax":null}"#
        );
    }

    #[test]
    fn test_item_accepts_numeric_string_price() {
        let item: Item = validate(&body(json!({"name": "Widget", "price": "9.5"}))).unwrap();
        assert_eq!(item.price, 9.5);
    }

    #[test]
    fn test_item_rejects_empty_name() {
        let err = validate::<Item>(&body(json!({"name": "", "price": 1}))).unwrap_err();
        assert_eq!(err.errors()[0].kind, "string_too_short");
    }

    #[test]
    fn test_item_query_from_path_and_query() {
        let mut inputs = Inputs::default();
        inputs.path.insert("item_id".into(), json!("42"));
        inputs.query.insert("q".into(), json!("search_term"));

        let query: ItemQuery = validate(&inputs).unwrap();
        assert_eq!(
            query,
            ItemQuery {
                item_id: 42,
                q: Some("search_term".into())
            }
        );
    }
}
