//! Deletes that follow the ownership edges of `utalii_core::relations`.

use sqlx::SqlitePool;
use utalii_core::relations::{EntityKind, Link};
use utalii_core::types::DbId;

/// Outcome of [`delete_owned`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Removed {
    pub existed: bool,
    /// Child rows removed across every cascading edge.
    pub owned: u64,
}

/// Delete a row of `kind` together with everything it owns.
///
/// Pairing rows go first, then the children of every cascading edge, then the
/// row itself, all in one transaction.
pub(crate) async fn delete_owned(
    pool: &SqlitePool,
    kind: EntityKind,
    id: DbId,
) -> Result<Removed, sqlx::Error> {
    let mut tx = pool.begin().await?;

    for rel in kind.associations() {
        if let Link::Association { table, column } = rel.link {
            sqlx::query(&format!("DELETE FROM {table} WHERE {column} = $1"))
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }
    }

    let mut owned = 0;
    for rel in kind.cascades() {
        let Link::ForeignKey(column) = rel.link else {
            continue;
        };
        owned += sqlx::query(&format!("DELETE FROM {} WHERE {column} = $1", rel.to.table()))
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }

    let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.table()))
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Removed {
        existed: result.rows_affected() > 0,
        owned,
    })
}
