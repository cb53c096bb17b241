// src/db/cms.rs
use crate::content::{ContentBlock, ContentError, ContentSource};
use crate::db::Database;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub const HOMEPAGE: &str = "homepage";

/// Looks up the editable copy for `page`, if an editor has saved any.
pub fn find_page_content(conn: &Connection, page: &str) -> Result<Option<ContentBlock>, ServerError> {
    conn.query_row(
        "select title, description from cms_content where page = ?",
        params![page],
        |r| {
            Ok(ContentBlock {
                title: r.get(0)?,
                description: r.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("cms lookup failed: {e}")))
}

/// Reads the homepage block from the local store on the calling worker.
/// No saved row yields the built-in default, same as `/api/cms/homepage`.
pub struct StoreContentSource {
    db: Database,
}

impl StoreContentSource {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ContentSource for StoreContentSource {
    fn fetch(&self) -> Result<ContentBlock, ContentError> {
        self.db
            .with_conn(|conn| find_page_content(conn, HOMEPAGE))
            .map(|row| row.unwrap_or_else(ContentBlock::homepage_default))
            .map_err(|e| ContentError::Store(e.to_string()))
    }
}
