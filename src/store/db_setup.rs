use super::*;

pub fn open_store(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        ensure_directory(parent)?;
    }

    let connection = Connection::open(db_path)
        .with_context(|| format!("failed to open {}", db_path.display()))?;
    configure_connection(&connection)?;
    prepare_connection(&connection)?;

    debug!(path = %db_path.display(), "recipe store ready");
    Ok(connection)
}

fn configure_connection(connection: &Connection) -> Result<()> {
    connection
        .pragma_update(None, "journal_mode", "WAL")
        .context("failed to set journal_mode=WAL")?;
    connection
        .pragma_update(None, "synchronous", "NORMAL")
        .context("failed to set synchronous=NORMAL")?;
    Ok(())
}

pub fn prepare_connection(connection: &Connection) -> Result<()> {
    connection
        .execute_batch(
            "
            CREATE TABLE IF NOT EXISTS metadata (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS recipes (
              id TEXT PRIMARY KEY,
              title TEXT NOT NULL,
              ingredients_json TEXT NOT NULL,
              original_ingredients_json TEXT,
              baking_percentages TEXT,
              notes TEXT,
              is_favorite INTEGER NOT NULL DEFAULT 0,
              created_at TEXT NOT NULL,
              updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_recipes_created ON recipes(created_at);
            CREATE INDEX IF NOT EXISTS idx_recipes_favorite ON recipes(is_favorite, created_at);
            ",
        )
        .context("failed to create recipe schema")?;

    connection.execute(
        "INSERT INTO metadata(key, value) VALUES('store_schema_version', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        [STORE_SCHEMA_VERSION],
    )?;

    Ok(())
}
