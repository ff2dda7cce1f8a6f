//! Parse a flat TOML document and export it as CSV.
//!
//! Run with: cargo run --example simple

use flat_toml::{from_str, to_csv_string};

const CONFIG: &str = r#"
# Global settings
title = "Example"

[server]
host = "localhost"
port = 8080 # default port

[database]
user = admin
password = "s3cret"

[server]
timeout = 30
"#;

fn main() {
    let doc = from_str(CONFIG);

    println!("Parsed document:\n{}", doc);
    println!("CSV export:\n{}", to_csv_string(&doc));

    // [server] was declared twice; both halves end up in one section.
    assert_eq!(doc.get("server", "host"), Some("localhost"));
    assert_eq!(doc.get("server", "timeout"), Some("30"));
    println!("✓ {} entries in {} sections", doc.len(), doc.sections().count());
}
