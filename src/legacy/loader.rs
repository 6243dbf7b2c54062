// Legacy dump loading - statement splitting and execution
use std::path::Path;

use sqlx::SqlitePool;
use tracing::warn;

use crate::error::MigrationError;

/// Read the dump file and replay it into the scratch store.
pub async fn run_dump_file(pool: &SqlitePool, path: &Path) -> Result<(), MigrationError> {
    let script = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MigrationError::DumpRead {
            path: path.display().to_string(),
            source,
        })?;

    run_dump(pool, &script).await;
    Ok(())
}

/// Execute a dump script one statement at a time.
///
/// Statements are split on the literal `;` character; the legacy dump format
/// carries no semicolons inside literals. A statement the scratch store
/// rejects is logged and skipped, and everything after it still runs. This
/// is the only non-fatal failure mode in the program.
pub async fn run_dump(pool: &SqlitePool, script: &str) {
    for statement in script.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }

        if let Err(err) = sqlx::query(statement).execute(pool).await {
            warn!("Skipping legacy statement: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::connection::open_scratch;

    #[tokio::test]
    async fn broken_statement_does_not_stop_the_dump() {
        let pool = open_scratch().await.expect("scratch store");

        run_dump(
            &pool,
            "CREATE TABLE role (role_id INTEGER, name TEXT);
             INSERT INTO role VALUES (1, 'recruit');
             INSERT INTO nonexistent VALUES (1);
             INSERT INTO role VALUES (2, 'applicant');",
        )
        .await;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM role")
            .fetch_one(&pool)
            .await
            .expect("role count");
        assert_eq!(count, 2, "statements after the broken one should run");

        pool.close().await;
    }

    #[tokio::test]
    async fn empty_fragments_are_skipped() {
        let pool = open_scratch().await.expect("scratch store");

        run_dump(&pool, "CREATE TABLE t (x INTEGER);\n\n;;INSERT INTO t VALUES (7);\n").await;

        let x: i64 = sqlx::query_scalar("SELECT x FROM t")
            .fetch_one(&pool)
            .await
            .expect("row");
        assert_eq!(x, 7);

        pool.close().await;
    }
}
