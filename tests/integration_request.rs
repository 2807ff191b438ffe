//! 请求级解析和 schema / 配置文件加载的集成测试

use query_filter::config::{Config, ParserConfig};
use query_filter::core::error::{ErrorCode, ToPublicError};
use query_filter::core::schema::SchemaRegistry;
use query_filter::core::types::Predicate;
use query_filter::core::ValidationErrorType;
use query_filter::query::{parse_query, QueryParams};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

const SCHEMA: &str = r#"
[[entity]]
name = "Product"
fields = ["id", "title", "price", "category"]
"#;

fn registry() -> SchemaRegistry {
    let mut file = NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(SCHEMA.as_bytes())
        .expect("Failed to write schema file");
    SchemaRegistry::load(file.path()).expect("Failed to load schema file")
}

#[test]
fn test_query_string_to_json_spec() {
    let registry = registry();
    let product = registry.get("Product").expect("Product should exist");
    let params = QueryParams::parse(
        "filter=price%3E10%26category%3Din('books','games')&orderBy=price+desc+nulls+last&limit=20&offset=40",
    );

    let spec = parse_query(product, &params, &ParserConfig::default())
        .expect("query should parse");
    assert_eq!(
        serde_json::to_value(&spec).expect("serialize"),
        json!({
            "where": {
                "category": ["books", "games"],
                "price": {"gt": "10"}
            },
            "order": "\"price\" desc nulls last",
            "limit": 20,
            "offset": 40
        })
    );
}

#[test]
fn test_repeated_parameter_is_rejected() {
    let registry = registry();
    let product = registry.get("Product").expect("Product should exist");
    let params = QueryParams::parse("orderBy=price&orderBy=title");

    let err = parse_query(product, &params, &ParserConfig::default()).unwrap_err();
    assert_eq!(err.error_type, ValidationErrorType::DuplicateParameter);
    assert_eq!(
        err.message,
        "Multiple orderBy parameters are provided, only one orderBy is supported"
    );
}

#[test]
fn test_validation_error_maps_to_client_error() {
    let registry = registry();
    let product = registry.get("Product").expect("Product should exist");
    let params = QueryParams::parse("filter=colour%3Dred");

    let err = parse_query(product, &params, &ParserConfig::default()).unwrap_err();
    let public = err.to_public_error();
    assert_eq!(public.code, ErrorCode::ValidationError);
    assert_eq!(public.http_status(), 400);
    assert_eq!(public.message, "The colour is not a valid field in the Product");
}

#[test]
fn test_strict_bounds_from_config_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(b"[parser]\nstrict_bounds = true\n")
        .expect("Failed to write config file");
    let config = Config::load(file.path()).expect("Failed to load config");

    let registry = registry();
    let product = registry.get("Product").expect("Product should exist");

    let err = parse_query(product, &QueryParams::parse("limit=-1"), &config.parser).unwrap_err();
    assert_eq!(err.error_type, ValidationErrorType::OutOfRange);

    let spec = parse_query(product, &QueryParams::parse("limit=-1"), &ParserConfig::default())
        .expect("lenient parsing accepts negative limit");
    assert_eq!(spec.limit.and_then(|n| n.as_i64()), Some(-1));
}

#[test]
fn test_filter_only_request() {
    let registry = registry();
    let product = registry.get("Product").expect("Product should exist");
    let spec = parse_query(
        product,
        &QueryParams::parse("filter=title%3D'Dune'"),
        &ParserConfig::default(),
    )
    .expect("query should parse");
    assert_eq!(
        spec.where_clause.get("title"),
        Some(&Predicate::Equals("Dune".into()))
    );
    assert!(spec.order.is_none());
    assert!(spec.limit.is_none());
}
