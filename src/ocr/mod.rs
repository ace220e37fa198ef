use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, trace};
use uuid::Uuid;

use crate::model::{OcrParseResult, ParsedIngredient, ParsedTimer, TextFragment};

mod assemble;
mod classify;
mod ingredient;
mod keywords;
mod lines;
mod mock;
mod quantity;
#[cfg(test)]
mod tests;
mod units;

pub use assemble::{ParserConfig, parse_ocr_result, parse_ocr_result_with};
pub use ingredient::BaseMarker;
pub use lines::group_lines;
pub use mock::mock_fragments;

use classify::*;
use ingredient::*;
use keywords::*;
use lines::*;
use quantity::*;
use units::*;
