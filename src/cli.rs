use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "recipecard",
    version,
    about = "Recipe card OCR parsing and proportional scaling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Mock(MockArgs),
    Scan(ScanArgs),
    Scale(ScaleArgs),
    Convert(ConvertArgs),
    #[command(subcommand)]
    Recipes(RecipesCommand),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    #[arg(long, default_value = ".cache/recipecard")]
    pub cache_root: PathBuf,

    #[arg(long)]
    pub db_path: Option<PathBuf>,
}

impl StoreArgs {
    pub fn resolved_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| self.cache_root.join("recipes.sqlite"))
    }
}

#[derive(Args, Debug, Clone)]
pub struct MockArgs {
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[arg(long, conflicts_with_all = ["vision_response", "mock"])]
    pub fragments: Option<PathBuf>,

    #[arg(long, conflicts_with = "mock")]
    pub vision_response: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub mock: bool,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = 15.0)]
    pub line_tolerance: f64,

    #[arg(long, default_value_t = 40)]
    pub threshold: u32,

    #[arg(long, default_value_t = 30)]
    pub section_threshold: u32,

    #[arg(long = "base-marker", default_values_t = vec!["粉".to_string()])]
    pub base_markers: Vec<String>,

    #[arg(long, default_value_t = false)]
    pub save: bool,

    #[arg(long, default_value = "Scanned recipe")]
    pub title: String,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    Integer,
    #[default]
    Decimal,
}

impl RoundingMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ScaleArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[arg(long, conflicts_with = "recipe", required_unless_present = "recipe")]
    pub ingredients: Option<PathBuf>,

    #[arg(long)]
    pub recipe: Option<String>,

    #[arg(long)]
    pub base: Option<String>,

    #[arg(long, default_value_t = 1.0)]
    pub ratio: f64,

    #[arg(long = "lock")]
    pub locks: Vec<String>,

    #[arg(long, value_enum, default_value_t = RoundingMode::Decimal)]
    pub rounding: RoundingMode,

    #[arg(long, default_value_t = 1)]
    pub decimal_places: u32,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    pub amount: f64,

    pub from: String,

    pub to: String,

    #[arg(long)]
    pub specific_gravity: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum RecipesCommand {
    List(RecipeListArgs),
    Show(RecipeIdArgs),
    Favorite(RecipeIdArgs),
    Delete(RecipeIdArgs),
    Reset(RecipeIdArgs),
    Check(IngredientIdArgs),
    SetAmount(SetAmountArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RecipeListArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    #[arg(long, default_value_t = false)]
    pub favorites: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RecipeIdArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct IngredientIdArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    pub id: String,

    pub ingredient_id: String,
}

#[derive(Args, Debug, Clone)]
pub struct SetAmountArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    pub id: String,

    pub ingredient_id: String,

    pub amount: f64,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}
