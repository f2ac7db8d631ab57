//! Ranked fuzzy lookup over the synchronized full-text index.
//!
//! Exact `get` never comes through here; this module only serves the fuzzy
//! path. Terms are folded to lowercase and compiled into an FTS5 prefix
//! query, results are ranked with bm25 (best match first) and deduplicated
//! to distinct keys.

use crate::error::AcroError;
use sqlx::{Row, SqliteConnection};

/// Compiles a raw user term into an FTS5 match expression.
///
/// Each whitespace-separated token becomes a quoted prefix query
/// (`"tok"*`), with embedded double quotes doubled so user input can never
/// escape the string syntax. Tokens are joined by FTS5's implicit AND.
///
/// Returns `None` when the term contains no tokens; searching for nothing
/// matches nothing.
pub(crate) fn match_expr(term: &str) -> Option<String> {
    let tokens: Vec<String> = term
        .split_whitespace()
        .map(|tok| format!("\"{}\"*", tok.to_lowercase().replace('"', "\"\"")))
        .collect();

    if tokens.is_empty() {
        return None;
    }

    Some(tokens.join(" "))
}

/// Runs the match expression against the index and returns distinct keys,
/// best match first.
///
/// A key matched through several of its values appears once, ranked by its
/// best-scoring pair.
pub(crate) async fn ranked_keys(
    conn: &mut SqliteConnection,
    expr: &str,
    limit: i64,
) -> Result<Vec<String>, AcroError> {
    let rows = sqlx::query(
        r#"
        SELECT e.key, min(bm25(entry_fts)) AS rank
        FROM entry_fts
        JOIN entries e ON e.id = entry_fts.rowid
        WHERE entry_fts MATCH ?
        GROUP BY e.key
        ORDER BY rank
        LIMIT ?
        "#,
    )
    .bind(expr)
    .bind(limit)
    .fetch_all(conn)
    .await?;

    let mut keys = Vec::new();
    for row in rows {
        let key: String = row.get(0);
        keys.push(key);
    }

    Ok(keys)
}
