use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::cli::RoundingMode;
use crate::model::{Ingredient, Recipe};

mod bakers;
mod convert;
mod engine;
mod rounding;
mod session;

pub use bakers::*;
pub use convert::convert_unit;
pub use rounding::RoundingSettings;
pub use session::{IngredientUpdate, ScalingSession, SessionView};

use engine::*;
use rounding::*;
