use flat_toml::{from_path, from_str, to_csv_string, write_csv_file, Document, Section};
use std::collections::BTreeMap;
use std::fs;

fn section_map(section: &Section) -> BTreeMap<String, String> {
    section
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[test]
fn test_section_holds_exactly_its_keys() {
    let doc = from_str("[A]\nk1 = v1\nk2 = v2\n[B]\nk3 = v3\n");
    let a = doc.section("A").unwrap();

    let expected: BTreeMap<String, String> = [("k1", "v1"), ("k2", "v2")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(section_map(a), expected);
}

#[test]
fn test_quoted_value_loses_quotes() {
    let doc = from_str("name = \"localhost\"");
    assert_eq!(doc.get("", "name"), Some("localhost"));
}

#[test]
fn test_unquoted_value_is_trimmed_verbatim() {
    let doc = from_str("port =    8080   ");
    assert_eq!(doc.get("", "port"), Some("8080"));
}

#[test]
fn test_trailing_comment_removed() {
    let doc = from_str("port = 8080 # default port");
    assert_eq!(doc.get("", "port"), Some("8080"));
}

#[test]
fn test_lines_before_header_use_default_section() {
    let doc = from_str("a = 1\nb = 2\n[named]\nc = 3\n");
    let default = doc.section("").unwrap();
    assert_eq!(default.len(), 2);
    assert_eq!(default.get("a"), Some("1"));
    assert!(!default.contains_key("c"));
}

#[test]
fn test_redeclared_section_merges() {
    let input = "[server]\nhost = \"localhost\"\n[server]\ntimeout = 30\n";
    let doc = from_str(input);

    assert_eq!(doc.sections().count(), 1);
    let server = doc.section("server").unwrap();
    assert_eq!(server.get("host"), Some("localhost"));
    assert_eq!(server.get("timeout"), Some("30"));
}

#[test]
fn test_serializing_twice_is_byte_identical() {
    let doc = from_str("[z]\nq = 1\n[a]\nm = 2\nb = 3\nnone = 4\n");
    let first = to_csv_string(&doc);
    let second = to_csv_string(&doc);
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_text_line_is_dropped_silently() {
    let doc = from_str("just some text\n");
    assert!(doc.is_empty());
    assert_eq!(to_csv_string(&doc), "section,key,value\n");
}

#[test]
fn test_end_to_end_row_order() {
    let csv = to_csv_string(&from_str("[a]\nx=1\n[b]\ny=2\n"));
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("section,key,value"));
    assert_eq!(lines.next(), Some("a,x,1"));
    assert_eq!(lines.next(), Some("b,y,2"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_source_order_does_not_matter() {
    let forward = from_str("[a]\nx = 1\ny = 2\n[b]\nz = 3\n");
    let backward = from_str("[b]\nz = 3\n[a]\ny = 2\nx = 1\n");
    assert_eq!(forward, backward);
    assert_eq!(to_csv_string(&forward), to_csv_string(&backward));
}

#[test]
fn test_empty_section_has_no_row() {
    let csv = to_csv_string(&from_str("[empty]\n[full]\nk = v\n"));
    assert_eq!(csv, "section,key,value\nfull,k,v\n");
}

#[test]
fn test_file_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("config.toml");
    let output = dir.path().join("config.csv");

    fs::write(
        &input,
        "# Global settings\ntitle = \"Example\"\n\n[server]\nhost = \"localhost\"\nport = 8080\n",
    )
    .unwrap();

    let doc = from_path(&input).unwrap();
    write_csv_file(&output, &doc).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "section,key,value\n,title,Example\nserver,host,localhost\nserver,port,8080\n"
    );
}

#[test]
fn test_document_to_json() {
    let doc = from_str("top = 1\n[db]\nuser = admin\nport = 5432\n");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "": { "top": "1" },
            "db": { "port": "5432", "user": "admin" }
        })
    );

    let back: Document = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_display_dump() {
    let doc = from_str("title = x\n[b]\nk = 2\n[a]\nk = 1\n");
    assert_eq!(
        doc.to_string(),
        "title = x\n\n[a]\nk = 1\n\n[b]\nk = 2\n\n"
    );
}
