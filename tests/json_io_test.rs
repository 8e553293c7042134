//! File Layer Integration Tests
//!
//! Tests for files, readers, writers and the text helpers including:
//! - Missing and blank file initialization
//! - Typed reads of whole files and single members
//! - Cached writes and output profiles
//! - JsonBuilder and JsonResponse

mod common;

use common::{TestFixture, UiSettings};
use jfig::{
    CodecProfile, ErrorKind, JsonAccess, JsonBuilder, JsonFile, JsonReader, JsonResponse,
    JsonWriter, Lockable, Refreshable, utils,
};
use serde_json::json;

// =============================================================================
// Files
// =============================================================================

#[test]
fn test_reader_on_new_file_sees_empty_object() {
    let fixture = TestFixture::new();

    let file = JsonFile::new(fixture.path("deep/new/file.json")).unwrap();
    let reader = JsonReader::new(file);

    assert!(reader.parse_as_object().unwrap().is_empty());
}

#[test]
fn test_blank_file_then_writer() {
    let fixture = TestFixture::with_files(&[("blank.json", "")]);

    let mut writer = JsonWriter::new(JsonFile::new(fixture.path("blank.json")).unwrap()).unwrap();
    writer
        .upsert("ready", &true, CodecProfile::Compact, true)
        .unwrap();

    assert_eq!(fixture.read("blank.json"), r#"{"ready":true}"#);
}

// =============================================================================
// Reading
// =============================================================================

#[test]
fn test_deserialize_whole_file_and_field() {
    let fixture = TestFixture::with_files(&[(
        "ui.json",
        r#"{"theme":"dark","font_size":14.5,"tags":["a","b"]}"#,
    )]);
    let reader = JsonReader::new(JsonFile::new(fixture.path("ui.json")).unwrap());

    let ui: UiSettings = reader.deserialize_as().unwrap();
    assert_eq!(ui.theme, "dark");
    assert_eq!(ui.tags, vec!["a", "b"]);

    let size: f64 = reader.deserialize_field("font_size").unwrap();
    assert_eq!(size, 14.5);
    assert!(
        reader
            .deserialize_field::<String>("missing")
            .unwrap_err()
            .is_not_found()
    );
}

#[test]
fn test_null_root_is_parse_error() {
    let fixture = TestFixture::with_files(&[("null.json", "null")]);
    let reader = JsonReader::new(JsonFile::new(fixture.path("null.json")).unwrap());

    let err = reader.deserialize_as::<UiSettings>().unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_invalid_content_is_parse_error() {
    let fixture = TestFixture::with_files(&[("bad.json", "{ nope")]);
    let reader = JsonReader::new(JsonFile::new(fixture.path("bad.json")).unwrap());

    assert_eq!(reader.parse_as_value().unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn test_reader_follows_set_file_unless_locked() {
    let fixture = TestFixture::with_files(&[("a.json", r#"{"n":1}"#), ("b.json", r#"{"n":2}"#)]);
    let a = JsonFile::new(fixture.path("a.json")).unwrap();
    let b = JsonFile::new(fixture.path("b.json")).unwrap();

    let mut reader = JsonReader::new(a.clone());
    reader.set_file(b.clone()).unwrap();
    assert_eq!(reader.deserialize_field::<u8>("n").unwrap(), 2);

    let mut locked = JsonReader::locked(a);
    assert!(locked.set_file(b).unwrap_err().is_locked());
    assert_eq!(locked.deserialize_field::<u8>("n").unwrap(), 1);
}

// =============================================================================
// Writing
// =============================================================================

#[test]
fn test_writer_profiles_control_output() {
    let fixture = TestFixture::new();
    let mut writer = JsonWriter::new(JsonFile::new(fixture.path("out.json")).unwrap()).unwrap();

    writer
        .upsert("token", &None::<String>, CodecProfile::Compact, true)
        .unwrap();
    assert_eq!(fixture.read("out.json"), "{}");

    writer
        .upsert("token", &None::<String>, CodecProfile::SerializeNulls, true)
        .unwrap();
    assert_eq!(fixture.read("out.json"), r#"{"token":null}"#);

    writer
        .upsert("name", "x", CodecProfile::PrettySerializeNulls, true)
        .unwrap();
    assert!(fixture.read("out.json").contains('\n'));
    assert_eq!(fixture.read_json("out.json"), json!({"token": null, "name": "x"}));
}

#[test]
fn test_writer_refresh_picks_up_external_changes() {
    let fixture = TestFixture::new();
    let mut writer = JsonWriter::new(JsonFile::new(fixture.path("c.json")).unwrap()).unwrap();

    fixture.write("c.json", r#"{"external":true}"#);
    assert!(!writer.member_exists("external"));

    writer.refresh().unwrap();
    assert!(writer.member_exists("external"));
}

// =============================================================================
// Builder & Responses
// =============================================================================

#[test]
fn test_builder_output_parses_back() {
    let text = JsonBuilder::new()
        .map("name", "gdrive")
        .map("port", 443)
        .map_if_absent("name", "ignored")
        .map_if_not_null("endpoint", Some("https://example.com"))
        .build_pretty();

    let parsed = utils::parse_object(&text).unwrap();

    assert_eq!(parsed.get_string("name").unwrap(), "gdrive");
    assert_eq!(parsed.get_i32("port").unwrap(), 443);
    assert!(parsed.contains("endpoint"));
}

#[test]
fn test_response_typed_access() {
    let response: JsonResponse = r#"{"ok":"true","count":"3","items":[1,2]}"#.parse().unwrap();

    assert!(response.get_bool("ok").unwrap());
    assert_eq!(response.get_i64("count").unwrap(), 3);
    assert_eq!(response.get_list("items").unwrap().len(), 2);
    assert_eq!(
        response.get_i32("items").unwrap_err().kind(),
        ErrorKind::Type
    );
}

#[test]
fn test_response_requires_object_root() {
    assert!(JsonResponse::parse("[1, 2, 3]").is_err());
}
