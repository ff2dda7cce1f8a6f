//! Customizing CSV output: delimiters, quoting and the header row.
//!
//! Run with: cargo run --example custom_options

use flat_toml::{from_str, to_csv_string_with_options, CsvOptions, Delimiter, Quoting};

fn main() {
    let doc = from_str(
        r#"
[greeting]
text = "hello, world"
quote = she said "hi"
"#,
    );

    let raw = CsvOptions::new();
    println!("Raw (default):\n{}", to_csv_string_with_options(&doc, &raw));

    let quoted = CsvOptions::new().with_quoting(Quoting::Rfc4180);
    println!("RFC 4180:\n{}", to_csv_string_with_options(&doc, &quoted));

    let tsv = CsvOptions::new()
        .with_delimiter(Delimiter::Tab)
        .with_header(false);
    println!("Tab separated, no header:\n{}", to_csv_string_with_options(&doc, &tsv));
}
