use crate::models::Product;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load the product catalog from the local JSON resource, optionally
/// filtered to one category (exact, case-sensitive match).
///
/// Returns the filtered list together with the full catalog; cart lookups
/// by id always run against the full list.
pub fn load_catalog(path: &Path, category: Option<&str>) -> Result<(Vec<Product>, Vec<Product>)> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog resource {}", path.display()))?;
    let all: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog resource {}", path.display()))?;

    let visible = match category {
        Some(category) => all
            .iter()
            .filter(|product| product.category == category)
            .cloned()
            .collect(),
        None => all.clone(),
    };

    Ok((visible, all))
}

/// Derive the active category from a page path: the last path segment with
/// the ".html" extension stripped. "index.html", "index" and the bare root
/// all mean "no category, show everything".
pub fn page_category(page: &str) -> Option<String> {
    let last = page.rsplit('/').next().unwrap_or("");
    let name = last.strip_suffix(".html").unwrap_or(last);
    if name.is_empty() || name == "index" {
        None
    } else {
        Some(name.to_string())
    }
}

/// Heading label for a category page, e.g. "Productos de Ropa".
pub fn category_title(category: &str) -> String {
    let mut chars = category.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("Productos de {}", capitalized)
}
