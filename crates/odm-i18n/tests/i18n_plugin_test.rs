//! Integration tests for the odm-i18n plugin
//!
//! These cover the full flow: schema definition, plugin attachment, document
//! creation, validation, and translated snapshots with resolved references.

use odm_core::{FieldConfig, FieldPath, FieldType, Schema, SchemaRegistry};
use odm_document::Document;
use odm_i18n::{attach, I18nOptions, TranslateOptions, TranslatedSnapshots};
use serde_json::json;
use std::sync::Arc;

const LANGUAGES: [&str; 3] = ["en_US", "es_ES", "fr_FR"];

fn path(raw: &str) -> FieldPath {
    FieldPath::parse(raw).unwrap()
}

/// `{ index: Number, value: String i18n, value2: String i18n }`
fn translatable_schema() -> Schema {
    let mut schema = Schema::new();
    schema.add(path("index"), FieldConfig::new(FieldType::Number));
    schema.add(path("value"), FieldConfig::string().localized());
    schema.add(path("value2"), FieldConfig::string().localized());
    schema
}

fn attached(options: I18nOptions) -> Arc<Schema> {
    let mut schema = translatable_schema();
    attach(&mut schema, &options).unwrap();
    Arc::new(schema)
}

#[test]
fn attach_without_languages_fails() {
    let mut schema = translatable_schema();
    let err = attach(&mut schema, &I18nOptions::default()).unwrap_err();
    assert!(err
        .to_string()
        .to_lowercase()
        .contains("must pass an array of languages"));
}

#[test]
fn required_with_default_language_requires_default_only() {
    let mut schema = Schema::new();
    schema.add(path("index"), FieldConfig::new(FieldType::Number));
    schema.add(path("value"), FieldConfig::string().localized().required());
    attach(
        &mut schema,
        &I18nOptions::new(LANGUAGES).with_default("en_US"),
    )
    .unwrap();
    let schema = Arc::new(schema);

    let doc = Document::new(Arc::clone(&schema), &json!({"value": {"en_US": "Hello"}}));
    assert!(doc.validate().is_valid);

    // every language except the default is present, still rejected
    let doc = Document::new(
        Arc::clone(&schema),
        &json!({"value": {"es_ES": "Hola", "fr_FR": "Bonjour", "zh_HK": "你好"}}),
    );
    let result = doc.validate();
    assert!(!result.is_valid);
    assert!(result.cites("en_US"));
    assert!(result.cites("required"));
}

#[test]
fn required_without_default_language_requires_every_language() {
    let mut schema = Schema::new();
    schema.add(path("index"), FieldConfig::new(FieldType::Number));
    schema.add(path("value"), FieldConfig::string().localized().required());
    attach(&mut schema, &I18nOptions::new(LANGUAGES)).unwrap();
    let schema = Arc::new(schema);

    let doc = Document::new(Arc::clone(&schema), &json!({"value": {"en_US": "Hello"}}));
    let result = doc.validate();
    assert!(!result.is_valid);
    assert!(result.cites("required"));
    assert!(result.cites("es_ES"));
    assert!(result.cites("fr_FR"));

    let doc = Document::new(
        Arc::clone(&schema),
        &json!({"value": {
            "en_US": "Hello", "es_ES": "Hola", "fr_FR": "Bonjour", "zh_HK": "你好",
        }}),
    );
    assert!(doc.validate().is_valid);
}

#[test]
fn stores_localized_fields_in_registered_languages_only() {
    let schema = attached(I18nOptions::new(LANGUAGES).with_default("en_US"));
    let doc = Document::new(
        schema,
        &json!({
            "index": 0,
            "value": {"en_US": "Hello", "es_ES": "Hola", "fr_FR": "Bonjour", "zh_HK": "你好"},
            "value2": {"en_US": "Bye", "es_ES": "Adiós", "fr_FR": "Au revoir", "zh_HK": "再見"},
        }),
    );

    assert_eq!(doc.get(&path("value.en_US")), Some(json!("Hello")));
    assert_eq!(doc.get(&path("value.es_ES")), Some(json!("Hola")));
    assert_eq!(doc.get(&path("value.fr_FR")), Some(json!("Bonjour")));
    assert_eq!(doc.get(&path("value.zh_HK")), None);
    assert_eq!(doc.get(&path("value2.en_US")), Some(json!("Bye")));
    assert_eq!(doc.get(&path("value2.zh_HK")), None);
}

#[test]
fn default_language_accessor_reads_and_writes() {
    let schema = attached(I18nOptions::new(LANGUAGES).with_default("en_US"));
    let mut doc = Document::new(
        schema,
        &json!({
            "value": {"en_US": "Hello"},
            "value2": {"en_US": "Bye"},
        }),
    );

    assert_eq!(doc.get(&path("value.i18n")), Some(json!("Hello")));
    assert_eq!(doc.get(&path("value2.i18n")), Some(json!("Bye")));

    doc.set(&path("value.i18n"), json!("Hi"));
    doc.set(&path("value2.i18n"), json!("Farewell"));
    assert_eq!(doc.get(&path("value.en_US")), Some(json!("Hi")));
    assert_eq!(doc.get(&path("value2.en_US")), Some(json!("Farewell")));
    // the accessor is an alias, not storage
    assert_eq!(doc.get(&path("value.i18n")), doc.get(&path("value.en_US")));
}

#[test]
fn without_language_and_without_default_acts_like_plain_snapshot() {
    let schema = attached(I18nOptions::new(LANGUAGES));
    let doc = Document::new(
        schema,
        &json!({
            "index": 1,
            "value": {"en_US": "Hello", "es_ES": "Hola", "fr_FR": "Bonjour"},
            "value2": {"en_US": "Bye", "es_ES": "Adiós", "fr_FR": "Au revoir"},
        }),
    );

    let object = doc.to_object_translated(None).unwrap();
    assert_eq!(object, doc.to_object(None).unwrap());
    assert_eq!(object["value"]["en_US"], json!("Hello"));

    let json_view = doc.to_json_translated(None).unwrap();
    assert_eq!(json_view, doc.to_json(None).unwrap());
}

#[test]
fn explicit_language_flattens_every_localized_field() {
    let schema = attached(I18nOptions::new(LANGUAGES));
    let doc = Document::new(
        schema,
        &json!({
            "index": 1,
            "value": {"en_US": "Hello", "es_ES": "Hola", "fr_FR": "Bonjour"},
            "value2": {"en_US": "Bye", "es_ES": "Adiós", "fr_FR": "Au revoir"},
        }),
    );

    let object = doc
        .to_object_translated(Some(TranslateOptions::new().language("es_ES")))
        .unwrap();
    assert_eq!(object["value"], json!("Hola"));
    assert_eq!(object["value2"], json!("Adiós"));

    let json_view = doc
        .to_json_translated(Some(TranslateOptions::new().language("fr_FR")))
        .unwrap();
    assert_eq!(json_view["value"], json!("Bonjour"));
    assert_eq!(json_view["value2"], json!("Au revoir"));
}

#[test]
fn configured_default_is_used_when_no_language_is_passed() {
    let schema = attached(I18nOptions::new(LANGUAGES).with_default("en_US"));
    let doc = Document::new(
        schema,
        &json!({"value": {"en_US": "Hello", "es_ES": "Hola"}, "value2": {}}),
    );

    let object = doc.to_object_translated(None).unwrap();
    assert_eq!(object["value"], json!("Hello"));
    assert_eq!(object["value2"], json!(""));
}

#[test]
fn absent_language_falls_back_to_default_then_empty_string() {
    let schema = attached(I18nOptions::new(LANGUAGES).with_default("en_US"));
    let doc = Document::new(
        schema,
        &json!({"value": {"en_US": "Hello"}, "value2": {"es_ES": "Adiós"}}),
    );

    let object = doc
        .to_object_translated(Some(TranslateOptions::new().language("fr_FR")))
        .unwrap();
    // fr_FR missing, default present
    assert_eq!(object["value"], json!("Hello"));
    // neither fr_FR nor en_US present
    assert_eq!(object["value2"], json!(""));
}

#[test]
fn flattens_a_single_resolved_reference_with_its_own_schema() {
    let registry = SchemaRegistry::new();
    let child_schema = attached(I18nOptions::new(LANGUAGES));
    registry.register("Translatable", Arc::clone(&child_schema));

    let mut parent_schema = translatable_schema();
    parent_schema.add(path("child"), FieldConfig::reference("Translatable"));
    attach(&mut parent_schema, &I18nOptions::new(LANGUAGES)).unwrap();

    let child = Document::new(
        registry.get("Translatable").unwrap(),
        &json!({"index": 0, "value": {"en_US": "Morning", "es_ES": "Mañana", "fr_FR": "Matin"}}),
    );
    let mut parent = Document::new(
        Arc::new(parent_schema),
        &json!({
            "index": 1,
            "value": {"en_US": "Hello", "es_ES": "Hola", "fr_FR": "Bonjour"},
            "value2": {"en_US": "Bye", "es_ES": "Adiós", "fr_FR": "Au revoir"},
        }),
    );
    parent.attach_reference("child", &child).unwrap();

    let object = parent
        .to_object_translated(Some(TranslateOptions::new().language("es_ES")))
        .unwrap();
    assert_eq!(object["value"], json!("Hola"));
    assert_eq!(object["value2"], json!("Adiós"));
    assert_eq!(object["child"]["value"], json!("Mañana"));

    let json_view = parent
        .to_json_translated(Some(TranslateOptions::new().language("fr_FR")))
        .unwrap();
    assert_eq!(json_view["value"], json!("Bonjour"));
    assert_eq!(json_view["child"]["value"], json!("Matin"));
}

#[test]
fn flattens_an_array_of_resolved_references() {
    let child_schema = attached(I18nOptions::new(LANGUAGES).with_default("en_US"));

    let mut parent_schema = translatable_schema();
    parent_schema.add(path("children"), FieldConfig::reference("Translatable"));
    attach(
        &mut parent_schema,
        &I18nOptions::new(LANGUAGES).with_default("en_US"),
    )
    .unwrap();

    let first = Document::new(
        Arc::clone(&child_schema),
        &json!({"index": 0, "value": {"en_US": "Morning", "es_ES": "Mañana", "fr_FR": "Matin"}}),
    );
    let second = Document::new(
        Arc::clone(&child_schema),
        &json!({"index": 1, "value": {
            "en_US": "Good night", "es_ES": "Buenas noches", "fr_FR": "Bonne nuit",
        }}),
    );
    let mut parent = Document::new(
        Arc::new(parent_schema),
        &json!({
            "index": 2,
            "value": {"en_US": "Hello", "es_ES": "Hola", "fr_FR": "Bonjour"},
            "value2": {"en_US": "Bye", "es_ES": "Adiós", "fr_FR": "Au revoir"},
        }),
    );
    parent.attach_references("children", &[first, second]).unwrap();

    let object = parent
        .to_object_translated(Some(TranslateOptions::new().language("es_ES")))
        .unwrap();
    assert_eq!(object["value"], json!("Hola"));
    assert_eq!(object["children"].as_array().unwrap().len(), 2);
    assert_eq!(object["children"][0]["value"], json!("Mañana"));
    assert_eq!(object["children"][1]["value"], json!("Buenas noches"));

    let json_view = parent
        .to_json_translated(Some(TranslateOptions::new().language("fr_FR")))
        .unwrap();
    assert_eq!(json_view["children"][0]["value"], json!("Matin"));
    assert_eq!(json_view["children"][1]["value"], json!("Bonne nuit"));
}

#[test]
fn reference_without_schema_is_skipped_silently() {
    let mut parent_schema = translatable_schema();
    parent_schema.add(path("child"), FieldConfig::reference("Unknown"));
    attach(&mut parent_schema, &I18nOptions::new(LANGUAGES)).unwrap();

    let mut parent = Document::new(
        Arc::new(parent_schema),
        &json!({"value": {"es_ES": "Hola"}, "value2": {}}),
    );
    parent.set(
        &path("child"),
        json!({"value": {"es_ES": "Mañana"}}),
    );
    parent.mark_populated("child", None);

    let object = parent
        .to_object_translated(Some(TranslateOptions::new().language("es_ES")))
        .unwrap();
    assert_eq!(object["value"], json!("Hola"));
    // left exactly as embedded
    assert_eq!(object["child"]["value"]["es_ES"], json!("Mañana"));
}

#[test]
fn end_to_end_example() {
    let mut schema = Schema::new();
    schema.add(path("value"), FieldConfig::string().localized());
    attach(
        &mut schema,
        &I18nOptions::new(LANGUAGES).with_default("en_US"),
    )
    .unwrap();
    let doc = Document::new(
        Arc::new(schema),
        &json!({"value": {
            "en_US": "Morning", "es_ES": "Mañana", "fr_FR": "Matin", "zh_HK": "你好",
        }}),
    );

    assert_eq!(doc.get(&path("value.en_US")), Some(json!("Morning")));
    assert_eq!(doc.get(&path("value.es_ES")), Some(json!("Mañana")));
    assert_eq!(doc.get(&path("value.fr_FR")), Some(json!("Matin")));
    assert_eq!(doc.get(&path("value.zh_HK")), None);

    let object = doc
        .to_object_translated(Some(TranslateOptions::new().language("es_ES")))
        .unwrap();
    assert_eq!(object["value"], json!("Mañana"));
}
