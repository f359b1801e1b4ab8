//! Display metadata for the compared database variants

use crate::error::{Error, Result};
use plotters::style::RGBColor;

/// Color and legend label for one database variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantMeta {
    /// Identifier as it appears in the `Variant` column
    pub id: &'static str,
    /// Line and marker color
    pub color: RGBColor,
    /// Legend and summary label
    pub label: &'static str,
}

static VARIANTS: [VariantMeta; 3] = [
    VariantMeta {
        id: "Variant1_HashMap",
        color: RGBColor(0x2e, 0xcc, 0x71),
        label: "Variant 1: HashMap (unordered_map)",
    },
    VariantMeta {
        id: "Variant2_Mixed",
        color: RGBColor(0xe7, 0x4c, 0x3c),
        label: "Variant 2: Mixed (vector + hash)",
    },
    VariantMeta {
        id: "Variant3_Map_BST",
        color: RGBColor(0x34, 0x98, 0xdb),
        label: "Variant 3: Map/BST (std::map)",
    },
];

impl VariantMeta {
    /// All known variants in display order
    pub fn all() -> &'static [VariantMeta] {
        &VARIANTS
    }

    /// Find the metadata for a variant identifier
    pub fn lookup(id: &str) -> Result<&'static VariantMeta> {
        VARIANTS
            .iter()
            .find(|meta| meta.id == id)
            .ok_or_else(|| Error::UnknownVariant(id.to_string()))
    }
}
