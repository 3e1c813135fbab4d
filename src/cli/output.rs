//! Output formatting for CLI reports

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::to_writer_pretty;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// `None` depth means the search ran to terminal states
pub fn format_depth(depth: Option<u32>) -> String {
    depth.map_or_else(|| "auto".to_string(), |d| d.to_string())
}

/// Write `value` as pretty-printed JSON
pub fn export_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    println!("\nResults written to {}", path.display());
    Ok(())
}
