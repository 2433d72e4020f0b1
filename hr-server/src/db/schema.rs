//! Schema bootstrap
//!
//! Every statement is `IF NOT EXISTS`, so running it against an existing
//! database is a no-op.

use sqlx::SqlitePool;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS FVA_employees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    last_name   TEXT NOT NULL,
    name        TEXT NOT NULL,
    patronymic  TEXT NOT NULL,
    address     TEXT NOT NULL DEFAULT '',
    birth_date  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS FVA_positions (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    title  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS FVA_divisions (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    title  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS FVA_jobs (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id         INTEGER NOT NULL REFERENCES FVA_employees(id),
    position_id         INTEGER NOT NULL REFERENCES FVA_positions(id),
    division_id         INTEGER NOT NULL REFERENCES FVA_divisions(id),
    date_of_employment  TEXT NOT NULL,
    date_of_dismissal   TEXT,
    CHECK (date_of_dismissal IS NULL OR date_of_dismissal >= date_of_employment)
);

CREATE INDEX IF NOT EXISTS idx_fva_jobs_employee ON FVA_jobs(employee_id);
CREATE INDEX IF NOT EXISTS idx_fva_jobs_division ON FVA_jobs(division_id);
CREATE INDEX IF NOT EXISTS idx_fva_jobs_employment ON FVA_jobs(date_of_employment);
"#;

pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
