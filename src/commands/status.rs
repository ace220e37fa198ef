use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::store::recipe_counts;

pub fn run(args: StatusArgs) -> Result<()> {
    let db_path = args.store.resolved_db_path();

    info!(cache_root = %args.store.cache_root.display(), "status requested");

    if db_path.exists() {
        let conn = Connection::open(&db_path)
            .with_context(|| format!("failed to open {}", db_path.display()))?;
        let counts = recipe_counts(&conn).unwrap_or_default();

        info!(
            path = %db_path.display(),
            recipes = counts.total,
            favorites = counts.favorites,
            "recipe store status"
        );
    } else {
        warn!(path = %db_path.display(), "recipe store missing");
    }

    Ok(())
}
