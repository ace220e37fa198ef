use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, info};

use crate::model::TextFragment;


pub const VISION_FRAGMENT_CONFIDENCE: f64 = 0.9;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateResponseBatch {
    #[serde(default)]
    pub responses: Vec<AnnotateResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateResponse {
    #[serde(default)]
    pub text_annotations: Vec<TextAnnotation>,
    pub error: Option<AnnotateError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotateError {
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bounding_poly: BoundingPoly,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Vertex {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl BoundingPoly {
    fn to_fragment(&self, text: &str) -> TextFragment {
        if self.vertices.is_empty() {
            return TextFragment::new(text, 0.0, 0.0, 0.0, 0.0)
                .with_confidence(VISION_FRAGMENT_CONFIDENCE);
        }

        let xs = self.vertices.iter().map(|vertex| vertex.x.unwrap_or(0.0));
        let ys = self.vertices.iter().map(|vertex| vertex.y.unwrap_or(0.0));
        let (min_x, max_x) = bounds(xs);
        let (min_y, max_y) = bounds(ys);

        TextFragment::new(text, min_x, min_y, max_x - min_x, max_y - min_y)
            .with_confidence(VISION_FRAGMENT_CONFIDENCE)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}

pub fn fragments_from_response(batch: &AnnotateResponseBatch) -> Result<Vec<TextFragment>> {
    let Some(response) = batch.responses.first() else {
        debug!("vision response batch is empty");
        return Ok(Vec::new());
    };

    if let Some(error) = &response.error {
        bail!(
            "vision response reported an error (code {}): {}",
            error.code.unwrap_or_default(),
            error.message
        );
    }

    let fragments = response
        .text_annotations
        .iter()
        .skip(1)
        .map(|annotation| annotation.bounding_poly.to_fragment(&annotation.description))
        .collect::<Vec<_>>();

    info!(
        annotations = response.text_annotations.len(),
        fragments = fragments.len(),
        "decoded vision response"
    );
    Ok(fragments)
}

pub fn fragments_from_json(raw: &[u8]) -> Result<Vec<TextFragment>> {
    let batch: AnnotateResponseBatch =
        serde_json::from_slice(raw).context("failed to decode vision response json")?;
    fragments_from_response(&batch)
}
