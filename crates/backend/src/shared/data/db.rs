use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_inquiry::aggregate::Inquiry;
use contracts::domain::common::AggregateRoot;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

use crate::shared::config::{self, Config};

pub const OUTBOX_TABLE: &str = "notification_outbox";

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Open the configured database file and make sure the schema exists
pub async fn initialize_database(cfg: &Config) -> anyhow::Result<DatabaseConnection> {
    let db_path = config::get_database_path(cfg)?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::info!("Opening database: {}", db_path.display());

    let mut opts = ConnectOptions::new(build_sqlite_url(&db_path));
    opts.sqlx_logging(false);
    let conn = Database::connect(opts).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

/// Private in-memory database, used by tests.
///
/// A single pooled connection keeps every query on the same memory database.
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opts).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

async fn execute(conn: &DatabaseConnection, sql: String) -> anyhow::Result<()> {
    conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .await?;
    Ok(())
}

/// Minimal schema bootstrap, idempotent
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    execute(
        conn,
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                image_url TEXT,
                category TEXT
            );
            "#,
            Product::full_name()
        ),
    )
    .await?;

    let inquiry_table = Inquiry::full_name();
    execute(
        conn,
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {inquiry_table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                reference_code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                message TEXT NOT NULL,
                product_ids TEXT,
                product_names TEXT,
                created_at TEXT NOT NULL,
                is_read INTEGER NOT NULL DEFAULT 0,
                status TEXT NOT NULL DEFAULT 'PENDING'
            );
            "#
        ),
    )
    .await?;
    execute(
        conn,
        format!(
            "CREATE INDEX IF NOT EXISTS idx_{inquiry_table}_created_at ON {inquiry_table} (created_at);"
        ),
    )
    .await?;

    execute(
        conn,
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {OUTBOX_TABLE} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                recipient TEXT NOT NULL,
                subject TEXT NOT NULL,
                body TEXT NOT NULL,
                reference_code TEXT,
                created_at TEXT NOT NULL,
                sent_at TEXT
            );
            "#
        ),
    )
    .await?;

    tracing::debug!("Database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_url_for_unix_and_windows_paths() {
        assert_eq!(
            build_sqlite_url(Path::new("/var/db/app.db")),
            "sqlite:///var/db/app.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\app.db")),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn bootstrap_is_idempotent() {
        let conn = connect_in_memory().await.unwrap();
        bootstrap_schema(&conn).await.unwrap();
    }
}
