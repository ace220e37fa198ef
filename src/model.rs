use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    pub text: String,
    pub bounding_box: BoundingBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl TextFragment {
    pub fn new(text: &str, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.to_string(),
            bounding_box: BoundingBox {
                x,
                y,
                width,
                height,
            },
            confidence: None,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub y_position: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTimer {
    pub step: String,
    pub minutes: u32,
    pub y_position: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrParseResult {
    pub ingredients: Vec<ParsedIngredient>,
    pub timers: Vec<ParsedTimer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_position: Option<f64>,
    #[serde(default)]
    pub is_base: bool,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub is_checked: bool,
}

#[cfg(test)]
impl Ingredient {
    pub fn new(id: &str, name: &str, amount: f64, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            amount,
            unit: unit.to_string(),
            ..Self::default()
        }
    }

    pub fn base(mut self) -> Self {
        self.is_base = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients_json: Vec<Ingredient>,
    pub original_ingredients_json: Option<Vec<Ingredient>>,
    pub baking_percentages: Option<BTreeMap<String, f64>>,
    pub notes: Option<String>,
    pub is_favorite: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_path: Option<String>,
    pub source_sha256: Option<String>,
    pub fragment_count: usize,
    pub line_count: usize,
    pub ingredients: Vec<Ingredient>,
    pub timers: Vec<ParsedTimer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_recipe_id: Option<String>,
}
