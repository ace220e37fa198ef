use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::cli::ScanArgs;
use crate::model::{Ingredient, ParsedTimer, ScanManifest, TextFragment};
use crate::ocr::{
    BaseMarker, ParserConfig, group_lines, mock_fragments, parse_ocr_result, parse_ocr_result_with,
};
use crate::store::{create_recipe, open_store};
use crate::util::{now_utc_string, print_json_pretty, read_json, sha256_file, write_json_pretty};
use crate::vision;

const SCAN_MANIFEST_VERSION: u32 = 1;

struct ScanSource {
    fragments: Vec<TextFragment>,
    path: Option<PathBuf>,
}

pub fn run(args: ScanArgs) -> Result<()> {
    let config = parser_config(&args)?;
    let source = load_source(&args)?;
    let source_sha256 = source.path.as_deref().map(sha256_file).transpose()?;

    if source.fragments.is_empty() {
        warn!("scan source contains no text fragments");
    }

    let line_count = group_lines(&source.fragments, config.line_tolerance).count();
    let result = if config == ParserConfig::default() {
        parse_ocr_result(&source.fragments)
    } else {
        parse_ocr_result_with(&source.fragments, &config)
    };

    let marker = BaseMarker::new(args.base_markers.clone());
    let ingredients = result
        .ingredients
        .iter()
        .map(|parsed| marker.promote(parsed))
        .collect::<Vec<Ingredient>>();

    let saved_recipe_id = if args.save {
        let db_path = args.store.resolved_db_path();
        let connection = open_store(&db_path)?;
        let notes = timer_notes(&result.timers);
        let recipe = create_recipe(&connection, &args.title, &ingredients, notes.as_deref())?;
        Some(recipe.id)
    } else {
        None
    };

    let manifest = ScanManifest {
        manifest_version: SCAN_MANIFEST_VERSION,
        generated_at: now_utc_string(),
        source_path: source.path.as_ref().map(|path| path.display().to_string()),
        source_sha256,
        fragment_count: source.fragments.len(),
        line_count,
        ingredients,
        timers: result.timers,
        saved_recipe_id,
    };

    info!(
        fragments = manifest.fragment_count,
        lines = manifest.line_count,
        ingredients = manifest.ingredients.len(),
        base_ingredients = manifest.ingredients.iter().filter(|item| item.is_base).count(),
        timers = manifest.timers.len(),
        saved_recipe_id = %manifest.saved_recipe_id.as_deref().unwrap_or_default(),
        "scan completed"
    );

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &manifest)?;
            info!(path = %path.display(), "wrote scan manifest");
        }
        None => print_json_pretty(&manifest)?,
    }

    Ok(())
}

fn parser_config(args: &ScanArgs) -> Result<ParserConfig> {
    if !args.line_tolerance.is_finite() || args.line_tolerance < 0.0 {
        bail!(
            "--line-tolerance must be a non-negative number, got {}",
            args.line_tolerance
        );
    }

    Ok(ParserConfig {
        line_tolerance: args.line_tolerance,
        ingredient_threshold: args.threshold,
        section_threshold: args.section_threshold,
        ..ParserConfig::default()
    })
}

fn load_source(args: &ScanArgs) -> Result<ScanSource> {
    if let Some(path) = &args.fragments {
        let fragments: Vec<TextFragment> = read_json(path)?;
        info!(path = %path.display(), fragments = fragments.len(), "loaded ocr fragments");
        return Ok(ScanSource {
            fragments,
            path: Some(path.clone()),
        });
    }

    if let Some(path) = &args.vision_response {
        return Ok(ScanSource {
            fragments: load_vision_response(path)?,
            path: Some(path.clone()),
        });
    }

    if args.mock {
        return Ok(ScanSource {
            fragments: mock_fragments(),
            path: None,
        });
    }

    bail!("scan needs one of --fragments, --vision-response or --mock")
}

fn load_vision_response(path: &Path) -> Result<Vec<TextFragment>> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    vision::fragments_from_json(&raw)
        .with_context(|| format!("failed to convert vision response {}", path.display()))
}

fn timer_notes(timers: &[ParsedTimer]) -> Option<String> {
    if timers.is_empty() {
        return None;
    }

    Some(
        timers
            .iter()
            .map(|timer| format!("{} {}分", timer.step, timer.minutes))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
