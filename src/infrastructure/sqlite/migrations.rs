use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS campaigns (
            id TEXT PRIMARY KEY,
            sku TEXT NOT NULL,
            channel TEXT NOT NULL,
            name TEXT NOT NULL,
            budget REAL NOT NULL,
            expected_roi REAL NOT NULL,
            source_opportunity TEXT,
            status TEXT NOT NULL DEFAULT 'active',
            launched_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_campaigns_sku ON campaigns(sku);
        CREATE INDEX IF NOT EXISTS idx_campaigns_launched ON campaigns(launched_at);
        ",
    )
    .map_err(|e| format!("Migration failed: {e}"))
}
