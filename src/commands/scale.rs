use std::collections::BTreeSet;
use std::io::{self, Write};

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::info;

use crate::cli::ScaleArgs;
use crate::model::Ingredient;
use crate::scaling::{RoundingSettings, ScalingSession, SessionView};
use crate::store::{open_store, require_recipe};
use crate::util::{print_json_pretty, read_json};

#[derive(Debug, Serialize)]
struct ScaleReport<'a> {
    title: &'a str,
    base_ingredient_id: Option<&'a str>,
    ratio: f64,
    rounding: RoundingSettings,
    ingredients: &'a [Ingredient],
    #[serde(flatten)]
    view: &'a SessionView,
}

pub fn run(args: ScaleArgs) -> Result<()> {
    let (mut session, title) = load_session(&args)?;

    if let Some(base) = &args.base {
        if !session.ingredients().iter().any(|ingredient| &ingredient.id == base) {
            bail!("unknown base ingredient id: {base}");
        }
        session.set_base_ingredient(Some(base.clone()));
    }

    session.set_scaling_ratio(args.ratio);
    for ingredient_id in args.locks.iter().collect::<BTreeSet<_>>() {
        session.toggle_lock(ingredient_id);
    }
    session.set_rounding(args.rounding, args.decimal_places);

    let view = session.compute();
    let state = session.scaling_state();

    info!(
        title = %title,
        ingredients = session.ingredients().len(),
        base = %state.base_ingredient_id.as_deref().unwrap_or_default(),
        requested_ratio = args.ratio,
        ratio = state.ratio(),
        locked = state.locked_ingredients.len(),
        rounding = %session.rounding().mode.as_str(),
        "scaled recipe"
    );

    if args.json {
        return print_json_pretty(&ScaleReport {
            title: &title,
            base_ingredient_id: state.base_ingredient_id.as_deref(),
            ratio: state.ratio(),
            rounding: session.rounding(),
            ingredients: session.ingredients(),
            view: &view,
        });
    }

    write_text_report(&title, &session, &view)
}

fn load_session(args: &ScaleArgs) -> Result<(ScalingSession, String)> {
    if let Some(path) = &args.ingredients {
        let ingredients: Vec<Ingredient> = read_json(path)?;
        return Ok((
            ScalingSession::new(ingredients),
            path.display().to_string(),
        ));
    }

    if let Some(recipe_id) = &args.recipe {
        let connection = open_store(&args.store.resolved_db_path())?;
        let recipe = require_recipe(&connection, recipe_id)?;
        return Ok((ScalingSession::from_recipe(&recipe), recipe.title));
    }

    bail!("scale needs --ingredients or --recipe")
}

fn write_text_report(title: &str, session: &ScalingSession, view: &SessionView) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    let state = session.scaling_state();

    writeln!(output, "Recipe: {title}")?;
    writeln!(
        output,
        "Scaling: base={} ratio={} base_amount={} target_amount={}",
        state.base_ingredient_id.as_deref().unwrap_or("-"),
        state.ratio(),
        view.base_amount,
        view.target_amount,
    )?;

    for ingredient in session.ingredients() {
        let amount = view
            .calculated_amounts
            .get(&ingredient.id)
            .copied()
            .unwrap_or(ingredient.amount);
        let mut flags = Vec::new();
        if ingredient.is_base {
            flags.push("base");
        }
        if state.is_locked(&ingredient.id) {
            flags.push("locked");
        }
        if ingredient.is_checked {
            flags.push("checked");
        }

        write!(
            output,
            "{}\t{}\t{} {}",
            ingredient.id, ingredient.name, amount, ingredient.unit
        )?;
        if let Some(percentage) = view.bakers_percentages.get(&ingredient.id) {
            write!(output, "\t{percentage}%")?;
        }
        if !flags.is_empty() {
            write!(output, "\t[{}]", flags.join(","))?;
        }
        writeln!(output)?;
    }

    output.flush()?;
    Ok(())
}
