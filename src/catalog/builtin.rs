//! Catalog shipped with the crate
//!
//! Six categories with three subcategories each, one palette per subcategory
//! and one slot template per category.

use crate::catalog::model::{Catalog, Category, Subcategory};
use crate::catalog::weights::SlotWeights;

const CATEGORIES: [(&str, &str); 6] = [
    ("gastronomia", "Gastronomía"),
    ("gaming", "Gaming"),
    ("arte", "Arte"),
    ("historia", "Historia"),
    ("ciencia", "Ciencia"),
    ("musica", "Música"),
];

// (id, parent category, display name, palette)
const SUBCATEGORIES: [(&str, &str, &str, [&str; 3]); 18] = [
    ("c_asia", "gastronomia", "Cocina Asiática", ["#FF6B6B", "#FFE66D", "#2EC4B6"]),
    ("c_mex", "gastronomia", "Cocina Mexicana", ["#8D0801", "#FFC857", "#2E294E"]),
    ("c_postres", "gastronomia", "Postres & Repostería", ["#F7C6C7", "#FFF3B0", "#A3E4DB"]),
    ("minecraft", "gaming", "Minecraft", ["#8CC84B", "#6B8E23", "#2F4F4F"]),
    ("fortnite", "gaming", "Fortnite", ["#7B61FF", "#FF5C8A", "#0B0F2A"]),
    ("retro", "gaming", "Retro (8-bit)", ["#FFDD57", "#FF6B6B", "#2A2D34"]),
    ("vangogh", "arte", "Van Gogh", ["#2B4C6F", "#F2C94C", "#E7A0B2"]),
    ("cubismo", "arte", "Cubismo", ["#2D3142", "#F45B69", "#F6D55C"]),
    ("arte_moderno", "arte", "Arte Moderno", ["#FF7A59", "#3DA5D9", "#F4E04D"]),
    ("egipto", "historia", "Egipto Antiguo", ["#8B5E3C", "#EED6C4", "#3A2F2F"]),
    ("renacimiento", "historia", "Renacimiento", ["#6A4C93", "#F6E7D7", "#A7C4BC"]),
    ("guerras", "historia", "Guerras & Conflictos", ["#333333", "#B22222", "#D9D9D9"]),
    ("astronomia", "ciencia", "Astronomía", ["#0B1226", "#1F3A93", "#A3D2CA"]),
    ("biologia", "ciencia", "Biología Marina", ["#083D77", "#16A085", "#F6F7EB"]),
    ("fisica", "ciencia", "Física Teórica", ["#0F172A", "#00B4D8", "#9BF6FF"]),
    ("jazz", "musica", "Jazz", ["#2E1F27", "#E06283", "#F0D9FF"]),
    ("rock", "musica", "Rock Clásico", ["#111827", "#9CA3AF", "#EF4444"]),
    ("electro", "musica", "Electrónica", ["#0F172A", "#8E44AD", "#00E5FF"]),
];

const SLOTS: [(&str, &[&str]); 6] = [
    (
        "gastronomia",
        &["navbar", "hero", "recipe_card", "ingredients", "steps", "gallery", "footer"],
    ),
    (
        "gaming",
        &["navbar", "hero", "highlight", "screenshots", "guide_list", "cta", "footer"],
    ),
    (
        "arte",
        &["navbar", "hero", "artwork_showcase", "bio", "timeline", "footer"],
    ),
    (
        "historia",
        &["navbar", "hero", "timeline", "article_list", "quotes", "footer"],
    ),
    (
        "ciencia",
        &["navbar", "hero", "concept_card", "figure", "references", "footer"],
    ),
    (
        "musica",
        &["navbar", "hero", "player", "album_grid", "tour_dates", "footer"],
    ),
];

const SLOT_WEIGHTS: [(&str, f64); 22] = [
    ("navbar", 1.0),
    ("hero", 4.0),
    ("recipe_card", 3.0),
    ("ingredients", 2.0),
    ("steps", 3.0),
    ("gallery", 3.0),
    ("highlight", 3.0),
    ("screenshots", 3.0),
    ("guide_list", 4.0),
    ("artwork_showcase", 5.0),
    ("bio", 2.0),
    ("timeline", 3.0),
    ("article_list", 4.0),
    ("quotes", 1.0),
    ("concept_card", 3.0),
    ("figure", 2.0),
    ("references", 1.0),
    ("player", 3.0),
    ("album_grid", 4.0),
    ("tour_dates", 2.0),
    ("cta", 2.0),
    ("footer", 1.0),
];

impl Catalog {
    /// Catalog bundled with the crate
    pub fn builtin() -> Self {
        let categories = CATEGORIES
            .iter()
            .map(|&(id, name)| Category {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect();

        let subcategories = SUBCATEGORIES
            .iter()
            .map(|&(id, category, name, _)| Subcategory {
                id: id.to_string(),
                category: category.to_string(),
                name: name.to_string(),
            })
            .collect();

        let palettes = SUBCATEGORIES
            .iter()
            .map(|(id, _, _, colors)| {
                (
                    (*id).to_string(),
                    colors.iter().map(ToString::to_string).collect(),
                )
            })
            .collect();

        let slots = SLOTS
            .iter()
            .map(|(category, slots)| {
                (
                    (*category).to_string(),
                    slots.iter().map(ToString::to_string).collect(),
                )
            })
            .collect();

        Self {
            categories,
            subcategories,
            palettes,
            slots,
            slot_weights: SLOT_WEIGHTS.iter().copied().collect::<SlotWeights>(),
        }
    }
}
