use crate::error::Result;
use sqlx::PgPool;
use uuid::Uuid;

use super::notification_dto::Selection;
use super::notification_models::Notification;

#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

/// Escapes ILIKE metacharacters so the search term matches as a literal
/// substring ("50%" matches the text "50%", not any prefix).
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

impl NotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: i64,
        title: &str,
        content: &str,
        metadata: Option<serde_json::Value>,
    ) -> Result<Notification> {
        let notification = sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, user_id, title, content, metadata)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *"
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(metadata)
        .fetch_one(&self.pool)
        .await?;

        Ok(notification)
    }

    /// Count and fetch one page under the identical predicate, inside a single
    /// REPEATABLE READ transaction so a concurrent insert or delete cannot land
    /// between the two reads.
    pub async fn find_page(
        &self,
        user_id: Option<i64>,
        search_text: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<(i64, Vec<Notification>)> {
        let mut conditions = vec!["deleted_at IS NULL".to_string()];
        let mut params_count = 0;

        if user_id.is_some() {
            params_count += 1;
            conditions.push(format!("user_id = ${}", params_count));
        }

        if search_text.is_some() {
            params_count += 1;
            conditions.push(format!(
                "(title ILIKE ${p} OR content ILIKE ${p})",
                p = params_count
            ));
        }

        let where_clause = conditions.join(" AND ");
        let count_sql = format!("SELECT COUNT(*) FROM notifications WHERE {}", where_clause);
        let page_sql = format!(
            "SELECT * FROM notifications WHERE {} ORDER BY created_at DESC, id LIMIT ${} OFFSET ${}",
            where_clause,
            params_count + 1,
            params_count + 2
        );
        let pattern = search_text.map(like_pattern);

        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(user_id) = user_id {
            count_query = count_query.bind(user_id);
        }
        if let Some(ref pattern) = pattern {
            count_query = count_query.bind(pattern.as_str());
        }
        let total_count = count_query.fetch_one(&mut *tx).await?;

        let mut page_query = sqlx::query_as::<_, Notification>(&page_sql);
        if let Some(user_id) = user_id {
            page_query = page_query.bind(user_id);
        }
        if let Some(ref pattern) = pattern {
            page_query = page_query.bind(pattern.as_str());
        }
        let notifications = page_query
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok((total_count, notifications))
    }

    /// Batch read-state update as one atomic UPDATE. Soft-deleted rows and rows
    /// owned by other users are outside the selectable set, never "not found".
    /// rows_affected counts every matched row, so repeating the same call
    /// returns the same count.
    pub async fn set_read_state(
        &self,
        user_id: i64,
        selection: Selection,
        read: bool,
    ) -> Result<u64> {
        let read_at = if read { "NOW()" } else { "NULL" };

        let result = match selection {
            Selection::All => {
                sqlx::query(&format!(
                    "UPDATE notifications SET read_at = {}
                     WHERE user_id = $1 AND deleted_at IS NULL",
                    read_at
                ))
                .bind(user_id)
                .execute(&self.pool)
                .await?
            }
            Selection::Ids(ids) => {
                sqlx::query(&format!(
                    "UPDATE notifications SET read_at = {}
                     WHERE user_id = $1 AND deleted_at IS NULL AND id = ANY($2)",
                    read_at
                ))
                .bind(user_id)
                .bind(ids)
                .execute(&self.pool)
                .await?
            }
        };

        Ok(result.rows_affected())
    }

    /// Soft delete: the `deleted_at IS NULL` predicate makes a repeat call a
    /// zero-row update, which the service reports as not found.
    pub async fn soft_delete(&self, id: Uuid, user_id: i64) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET deleted_at = NOW()
             WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL"
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn count_unread(&self, user_id: i64) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications
             WHERE user_id = $1 AND read_at IS NULL AND deleted_at IS NULL"
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
