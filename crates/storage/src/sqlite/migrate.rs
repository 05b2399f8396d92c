use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

/// Runs a single, consolidated migration for the current schema.
///
/// Creates the four curriculum tables (units, chapters, concepts, topics)
/// with their parent references and per-level order indexes. Nothing is ever
/// deleted by the application, so there are no cascade rules.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
            .bind(version)
            .fetch_optional(pool)
            .await?;
        Ok(row.is_some())
    }

    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
            ",
    )
    .execute(pool)
    .await?;

    // Version 1: full schema.
    if !is_applied(pool, 1).await? {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS units (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    position INTEGER NOT NULL CHECK (position > 0),
                    color TEXT,
                    symbol TEXT
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS chapters (
                    id INTEGER PRIMARY KEY,
                    unit_id INTEGER NOT NULL,
                    title TEXT NOT NULL,
                    position INTEGER NOT NULL CHECK (position > 0),
                    FOREIGN KEY (unit_id) REFERENCES units(id)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS concepts (
                    id INTEGER PRIMARY KEY,
                    chapter_id INTEGER NOT NULL,
                    title TEXT NOT NULL,
                    position INTEGER NOT NULL CHECK (position > 0),
                    summary TEXT,
                    FOREIGN KEY (chapter_id) REFERENCES chapters(id)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE TABLE IF NOT EXISTS topics (
                    id INTEGER PRIMARY KEY,
                    concept_id INTEGER NOT NULL,
                    title TEXT NOT NULL,
                    position INTEGER NOT NULL CHECK (position > 0),
                    completed INTEGER NOT NULL DEFAULT 0 CHECK (completed IN (0, 1)),
                    FOREIGN KEY (concept_id) REFERENCES concepts(id)
                );
            ",
        )
        .execute(&mut *tx)
        .await?;

        // Order fields are unique among siblings and define render sequence.
        sqlx::query(
            r"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_units_position
                    ON units(position);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_chapters_unit_position
                    ON chapters(unit_id, position);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_concepts_chapter_position
                    ON concepts(chapter_id, position);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_topics_concept_position
                    ON topics(concept_id, position);
            ",
        )
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(1_i64)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
    }

    Ok(())
}
