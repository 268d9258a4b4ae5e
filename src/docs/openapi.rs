//! OpenAPI document generation.

use utoipa::OpenApi;

use crate::config::DocsConfig;
use crate::models::{HealthStatus, Item, ItemQuery, Message};
use crate::routing::handlers;
use crate::validation::{ErrorContext, ErrorDetail, LocSegment, ValidationError};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::health_check,
        handlers::read_item,
        handlers::create_item
    ),
    components(schemas(
        Item,
        ItemQuery,
        Message,
        HealthStatus,
        ValidationError,
        ErrorDetail,
        ErrorContext,
        LocSegment
    )),
    tags(
        (name = "service", description = "Service liveness"),
        (name = "items", description = "Item lookup and creation")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document with `info` taken from configuration.
pub fn build_openapi(config: &DocsConfig) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = config.title.clone();
    doc.info.version = config.version.clone();
    doc.info.description = if config.description.is_empty() {
        None
    } else {
        Some(config.description.clone())
    };
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn document() -> Value {
        serde_json::to_value(build_openapi(&DocsConfig::default())).unwrap()
    }

    #[test]
    fn test_document_lists_every_route() {
        let doc = document();
        assert!(doc["openapi"].as_str().unwrap().starts_with("3."));

        let paths = doc["paths"].as_object().unwrap();
        assert!(paths["/"].get("get").is_some());
        assert!(paths["/health"].get("get").is_some());
        assert!(paths["/items/{item_id}"].get("get").is_some());
        assert!(paths["/items/"].get("post").is_some());
    }

    #[test]
    fn test_item_schema_requires_name_and_price() {
        let doc = document();
        let required = &doc["components"]["schemas"]["Item"]["required"];
        assert_eq!(required, &json!(["name", "price"]));
    }

    #[test]
    fn test_info_comes_from_config() {
        let config = DocsConfig {
            title: "Inventory".into(),
            version: "2.0.0".into(),
            description: String::new(),
            ..DocsConfig::default()
        };
        let doc = serde_json::to_value(build_openapi(&config)).unwrap();
        assert_eq!(doc["info"]["title"], "Inventory");
        assert_eq!(doc["info"]["version"], "2.0.0");
        assert!(doc["info"].get("description").is_none());
    }
}
