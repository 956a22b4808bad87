// ==========================================
// Skill Assessment Suite - SQLite store implementations
// ==========================================
// Responsibility: persistent Record Store / Attachment Store backed by
// the local database (tables created in db::init_schema)
// Red line: repositories do data CRUD only, no backup business rules
// ==========================================

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::{AttachmentRecord, Hospital};
use crate::repository::attachment_repo::AttachmentStore;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::record_repo::RecordStore;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock_conn(conn: &Arc<Mutex<Connection>>) -> RepositoryResult<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|e| RepositoryError::LockError(e.to_string()))
}

// ==========================================
// SqliteRecordStore
// ==========================================
// The whole hospital tree lives in one row (slot 0) as JSON; read and
// replace therefore stay whole-tree operations by construction.
pub struct SqliteRecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRecordStore {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Share an already-open connection (both stores on one database).
    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn read_all(&self) -> RepositoryResult<Vec<Hospital>> {
        let conn = lock_conn(&self.conn)?;
        let json: Option<String> = conn
            .query_row("SELECT data FROM hospital_tree WHERE slot = 0", [], |row| {
                row.get(0)
            })
            .optional()?;

        match json {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    async fn replace_all(&self, hospitals: &[Hospital]) -> RepositoryResult<()> {
        let json = serde_json::to_string(hospitals)?;
        let conn = lock_conn(&self.conn)?;
        conn.execute(
            "INSERT OR REPLACE INTO hospital_tree (slot, data, updated_at) \
             VALUES (0, ?1, datetime('now'))",
            params![json],
        )?;
        Ok(())
    }
}

// ==========================================
// SqliteAttachmentStore
// ==========================================
pub struct SqliteAttachmentStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteAttachmentStore {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl AttachmentStore for SqliteAttachmentStore {
    async fn put(&self, record: &AttachmentRecord) -> RepositoryResult<()> {
        let conn = lock_conn(&self.conn)?;
        conn.execute(
            "INSERT OR REPLACE INTO attachment (id, data) VALUES (?1, ?2)",
            params![record.id, record.data],
        )?;
        Ok(())
    }

    async fn get(&self, id: &str) -> RepositoryResult<Option<AttachmentRecord>> {
        let conn = lock_conn(&self.conn)?;
        let record = conn
            .query_row(
                "SELECT id, data FROM attachment WHERE id = ?1",
                params![id],
                |row| {
                    Ok(AttachmentRecord {
                        id: row.get(0)?,
                        data: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    async fn get_where_id_in(
        &self,
        ids: &HashSet<String>,
    ) -> RepositoryResult<Vec<AttachmentRecord>> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt = conn.prepare("SELECT id, data FROM attachment WHERE id = ?1")?;

        let mut records = Vec::new();
        for id in ids {
            let record = stmt
                .query_row(params![id], |row| {
                    Ok(AttachmentRecord {
                        id: row.get(0)?,
                        data: row.get(1)?,
                    })
                })
                .optional()?;
            if let Some(record) = record {
                records.push(record);
            }
        }
        Ok(records)
    }

    async fn get_all(&self) -> RepositoryResult<Vec<AttachmentRecord>> {
        let conn = lock_conn(&self.conn)?;
        let mut stmt = conn.prepare("SELECT id, data FROM attachment")?;
        let rows = stmt.query_map([], |row| {
            Ok(AttachmentRecord {
                id: row.get(0)?,
                data: row.get(1)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = lock_conn(&self.conn)?;
        conn.execute("DELETE FROM attachment WHERE id = ?1", params![id])?;
        Ok(())
    }

    async fn clear(&self) -> RepositoryResult<()> {
        let conn = lock_conn(&self.conn)?;
        conn.execute("DELETE FROM attachment", [])?;
        Ok(())
    }
}

/// Open both stores on a single shared connection.
pub fn open_stores(
    db_path: &str,
) -> RepositoryResult<(SqliteRecordStore, SqliteAttachmentStore)> {
    let conn = open_sqlite_connection(db_path)
        .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
    init_schema(&conn)?;
    let conn = Arc::new(Mutex::new(conn));
    Ok((
        SqliteRecordStore::with_connection(conn.clone()),
        SqliteAttachmentStore::with_connection(conn),
    ))
}
