//! Read-only content catalog: categories, subcategories, palettes and slot lists
//!
//! The catalog is a plain value handed to the generator. Lookups never mutate it,
//! so one catalog can serve any number of concurrent generations.

use crate::algorithm::palette::{Palette, parse_hex_color};
use crate::catalog::weights::SlotWeights;
use crate::io::error::{LayoutError, Result, invalid_catalog};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Top-level content category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
}

/// Content subcategory, owner of a palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Stable identifier
    pub id: String,
    /// Identifier of the parent category
    pub category: String,
    /// Display name
    pub name: String,
}

/// Complete catalog consumed by layout generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Categories in lookup order
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Subcategories in lookup order
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    /// Subcategory id to ordered hex colors
    #[serde(default)]
    pub palettes: HashMap<String, Vec<String>>,
    /// Category id to ordered slot identifiers
    #[serde(default)]
    pub slots: HashMap<String, Vec<String>>,
    /// Slot identifier to relative weight
    #[serde(default)]
    pub slot_weights: SlotWeights,
}

/// Catalog entries resolved for one generation request
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    /// Resolved category
    pub category: &'a Category,
    /// Resolved subcategory
    pub subcategory: &'a Subcategory,
    /// Slots of the category, in catalog order
    pub slots: &'a [String],
    /// Palette of the subcategory, or the fallback palette
    pub palette: Palette,
}

impl Catalog {
    /// First category whose id or display name equals `reference`
    pub fn find_category(&self, reference: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.name == reference || category.id == reference)
    }

    /// First subcategory whose id or display name equals `reference`
    pub fn find_subcategory(&self, reference: &str) -> Option<&Subcategory> {
        self.subcategories
            .iter()
            .find(|subcategory| subcategory.name == reference || subcategory.id == reference)
    }

    /// Subcategories belonging to a category, in catalog order
    pub fn subcategories_of<'a>(
        &'a self,
        category_id: &'a str,
    ) -> impl Iterator<Item = &'a Subcategory> + 'a {
        self.subcategories
            .iter()
            .filter(move |subcategory| subcategory.category == category_id)
    }

    /// Slot list of a category, if configured
    pub fn slots_for(&self, category_id: &str) -> Option<&[String]> {
        self.slots.get(category_id).map(Vec::as_slice)
    }

    /// Weight of a slot, default 1 when unlisted
    pub fn slot_weight(&self, slot: &str) -> f64 {
        self.slot_weights.weight_of(slot)
    }

    /// Palette of a subcategory, or the fallback palette when none is configured
    ///
    /// # Errors
    ///
    /// Returns an error if the configured palette is empty or holds an invalid color
    pub fn palette_for(&self, subcategory_id: &str) -> Result<Palette> {
        self.palettes
            .get(subcategory_id)
            .map_or_else(|| Ok(Palette::fallback()), |colors| Palette::new(colors.clone()))
    }

    /// Resolve category, subcategory, slot list and palette for a request
    ///
    /// A subcategory filed under a different category is accepted; the palette
    /// comes from the subcategory and the slots from the category.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No category or subcategory matches the references
    /// - The category has no slots
    /// - The subcategory palette is malformed
    pub fn resolve(&self, category_ref: &str, subcategory_ref: &str) -> Result<Selection<'_>> {
        let category =
            self.find_category(category_ref)
                .ok_or_else(|| LayoutError::CategoryNotFound {
                    reference: category_ref.to_string(),
                })?;

        let subcategory = self.find_subcategory(subcategory_ref).ok_or_else(|| {
            LayoutError::SubcategoryNotFound {
                reference: subcategory_ref.to_string(),
            }
        })?;

        let slots = self
            .slots_for(&category.id)
            .filter(|slots| !slots.is_empty())
            .ok_or_else(|| LayoutError::EmptySlotList {
                category: category.id.clone(),
            })?;

        if subcategory.category != category.id {
            tracing::warn!(
                category = %category.id,
                subcategory = %subcategory.id,
                parent = %subcategory.category,
                "subcategory belongs to a different category"
            );
        }

        Ok(Selection {
            category,
            subcategory,
            slots,
            palette: self.palette_for(&subcategory.id)?,
        })
    }

    /// Check the catalog against its contract
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A category or subcategory id is empty or duplicated
    /// - A subcategory names an unknown parent category
    /// - A palette is empty or holds an invalid hex color
    /// - A slot list is keyed by an unknown category or contains an empty id
    /// - A slot weight is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id.is_empty() || !category_ids.insert(category.id.as_str()) {
                return Err(invalid_catalog(&format!(
                    "category id '{}' is empty or duplicated",
                    category.id
                )));
            }
        }

        let mut subcategory_ids = HashSet::new();
        for subcategory in &self.subcategories {
            if subcategory.id.is_empty() || !subcategory_ids.insert(subcategory.id.as_str()) {
                return Err(invalid_catalog(&format!(
                    "subcategory id '{}' is empty or duplicated",
                    subcategory.id
                )));
            }
            if !category_ids.contains(subcategory.category.as_str()) {
                return Err(invalid_catalog(&format!(
                    "subcategory '{}' references unknown category '{}'",
                    subcategory.id, subcategory.category
                )));
            }
        }

        for (subcategory_id, colors) in &self.palettes {
            if colors.is_empty() {
                return Err(invalid_catalog(&format!(
                    "palette of '{subcategory_id}' is empty"
                )));
            }
            for color in colors {
                parse_hex_color(color)?;
            }
        }

        for (category_id, slots) in &self.slots {
            if !category_ids.contains(category_id.as_str()) {
                return Err(invalid_catalog(&format!(
                    "slot list keyed by unknown category '{category_id}'"
                )));
            }
            if slots.iter().any(String::is_empty) {
                return Err(invalid_catalog(&format!(
                    "slot list of '{category_id}' contains an empty slot id"
                )));
            }
        }

        for (slot, weight) in self.slot_weights.iter() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(invalid_catalog(&format!(
                    "weight of slot '{slot}' must be positive, got {weight}"
                )));
            }
        }

        Ok(())
    }
}
