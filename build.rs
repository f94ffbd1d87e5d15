//! Build script to generate the embedded vocabulary
//!
//! Reads the word table and generates Rust source code with a const array of rows.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_rows(
        "data/words.tsv",
        &Path::new(&out_dir).join("words.rs"),
        "WORD_ROWS",
        "Built-in German vocabulary, one tab-separated row per line",
    );

    // Rebuild if the word table changes
    println!("cargo:rerun-if-changed=data/words.tsv");
}

fn generate_word_rows(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<&str> = content.lines().collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated vocabulary table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for row in rows {
        // Debug formatting yields a valid, escaped string literal
        writeln!(output, "    {:?},", row.trim_end_matches('\r')).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in {const_name}, header and comments included").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
