//! TOML catalog files
//!
//! A catalog file mirrors [`Catalog`] field by field:
//!
//! ```toml
//! categories = [{ id = "blog", name = "Blog" }]
//! subcategories = [{ id = "tech", category = "blog", name = "Tech" }]
//!
//! [palettes]
//! tech = ["#112233", "#445566"]
//!
//! [slots]
//! blog = ["navbar", "hero", "footer"]
//!
//! [slot_weights]
//! hero = 4
//! ```

use crate::catalog::Catalog;
use crate::io::error::{LayoutError, Result};
use std::path::Path;

/// Parse and validate a catalog from TOML text
///
/// `origin` names the source in error messages.
///
/// # Errors
///
/// Returns an error if the text is not a valid catalog document or the catalog
/// breaks its contract
pub fn parse_catalog(text: &str, origin: &Path) -> Result<Catalog> {
    let catalog: Catalog = toml::from_str(text).map_err(|source| LayoutError::CatalogParse {
        path: origin.to_path_buf(),
        source,
    })?;
    catalog.validate()?;
    Ok(catalog)
}

/// Load and validate a catalog from a TOML file
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).map_err(|source| LayoutError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source,
    })?;
    let catalog = parse_catalog(&text, path)?;
    tracing::debug!(
        path = %path.display(),
        categories = catalog.categories.len(),
        subcategories = catalog.subcategories.len(),
        "loaded catalog"
    );
    Ok(catalog)
}
