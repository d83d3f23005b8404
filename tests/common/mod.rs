#![allow(dead_code)]

pub mod snapshot_utils;

use nmconv::Segments;

/// Builds a word list from string literals
pub fn words(items: &[&str]) -> Segments {
    items.iter().map(|s| s.to_string()).collect()
}

/// Converts every name and renders one `name => result` line each
pub fn conversion_table(conv: &nmconv::Conversion, names: &[&str]) -> String {
    let mut table = String::new();
    for name in names {
        table.push_str(&format!("{} => {}\n", name, conv.convert(name)));
    }
    table
}
