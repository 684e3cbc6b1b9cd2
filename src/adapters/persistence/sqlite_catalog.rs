//! SQLite-backed catalog via libsql. Implements CatalogPort.
//!
//! One database file holds courses, lecturers, sections and reviews. Sections
//! and reviews are returned in insertion (rowid) order. Ratings are validated
//! on read, so a bad row fails the lookup instead of skewing an average.

use super::seed::SeedCatalog;
use crate::domain::{Course, DomainError, Lecturer, Rating, Review, Section};
use crate::ports::CatalogPort;
use libsql::{Connection, Database, params};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SCHEMA: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS courses (
    id TEXT PRIMARY KEY,
    course_number TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL
)"#,
    r#"
CREATE TABLE IF NOT EXISTS lecturers (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL
)"#,
    r#"
CREATE TABLE IF NOT EXISTS sections (
    id TEXT PRIMARY KEY,
    course_id TEXT NOT NULL REFERENCES courses (id),
    lecturer_id TEXT NOT NULL
)"#,
    "CREATE INDEX IF NOT EXISTS idx_sections_course ON sections (course_id)",
    r#"
CREATE TABLE IF NOT EXISTS reviews (
    id TEXT PRIMARY KEY,
    section_id TEXT NOT NULL REFERENCES sections (id),
    body TEXT NOT NULL DEFAULT '',
    rating INTEGER NOT NULL
)"#,
    "CREATE INDEX IF NOT EXISTS idx_reviews_section ON reviews (section_id)",
];

fn lookup_err(e: libsql::Error) -> DomainError {
    DomainError::Lookup(e.to_string())
}

/// SQLite catalog. Safe to share via Arc; each call opens its own connection.
pub struct SqliteCatalog {
    db: Database,
    db_path: PathBuf,
}

impl SqliteCatalog {
    /// Open (or create) the database file and ensure the schema exists.
    pub async fn connect(db_path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| DomainError::Lookup(e.to_string()))?;
        }
        let path_str = db_path.to_string_lossy();
        let db = libsql::Builder::new_local(path_str.as_ref())
            .build()
            .await
            .map_err(lookup_err)?;
        let conn = db.connect().map_err(lookup_err)?;

        // PRAGMA returns a row; drain it (execute fails when rows are returned).
        let mut wal_rows = conn
            .query("PRAGMA journal_mode=WAL", ())
            .await
            .map_err(|e| DomainError::Lookup(format!("WAL pragma failed: {}", e)))?;
        while wal_rows.next().await.map_err(lookup_err)?.is_some() {}

        for stmt in SCHEMA {
            conn.execute(stmt, ()).await.map_err(lookup_err)?;
        }

        info!(path = %db_path.display(), "SQLite catalog connected");

        Ok(Self { db, db_path })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn conn(&self) -> Result<Connection, DomainError> {
        self.db.connect().map_err(lookup_err)
    }

    /// Import a validated seed catalog in one transaction. Existing ids are kept.
    pub async fn import(&self, catalog: &SeedCatalog) -> Result<(), DomainError> {
        let conn = self.conn()?;
        let tx = conn.transaction().await.map_err(lookup_err)?;
        for c in &catalog.courses {
            tx.execute(
                "INSERT INTO courses (id, course_number, name) VALUES (?1, ?2, ?3) ON CONFLICT (id) DO NOTHING",
                params![c.id.as_str(), c.course_number.as_str(), c.name.as_str()],
            )
            .await
            .map_err(lookup_err)?;
        }
        for l in &catalog.lecturers {
            tx.execute(
                "INSERT INTO lecturers (id, name) VALUES (?1, ?2) ON CONFLICT (id) DO NOTHING",
                params![l.id.as_str(), l.name.as_str()],
            )
            .await
            .map_err(lookup_err)?;
        }
        for s in &catalog.sections {
            tx.execute(
                "INSERT INTO sections (id, course_id, lecturer_id) VALUES (?1, ?2, ?3) ON CONFLICT (id) DO NOTHING",
                params![s.id.as_str(), s.course_id.as_str(), s.lecturer_id.as_str()],
            )
            .await
            .map_err(lookup_err)?;
        }
        for r in &catalog.reviews {
            tx.execute(
                "INSERT INTO reviews (id, section_id, body, rating) VALUES (?1, ?2, ?3, ?4) ON CONFLICT (id) DO NOTHING",
                params![
                    r.id.as_str(),
                    r.section_id.as_str(),
                    r.body.as_str(),
                    i64::from(r.rating)
                ],
            )
            .await
            .map_err(lookup_err)?;
        }
        tx.commit().await.map_err(lookup_err)?;

        info!(
            path = %self.db_path.display(),
            courses = catalog.courses.len(),
            sections = catalog.sections.len(),
            reviews = catalog.reviews.len(),
            "seed imported"
        );
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogPort for SqliteCatalog {
    async fn find_course_by_number(
        &self,
        course_number: &str,
    ) -> Result<Option<Course>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, course_number, name FROM courses WHERE course_number = ?1 LIMIT 1",
                params![course_number],
            )
            .await
            .map_err(lookup_err)?;

        match rows.next().await.map_err(lookup_err)? {
            Some(row) => Ok(Some(Course {
                id: row.get::<String>(0).map_err(lookup_err)?,
                course_number: row.get::<String>(1).map_err(lookup_err)?,
                name: row.get::<String>(2).map_err(lookup_err)?,
            })),
            None => Ok(None),
        }
    }

    async fn find_sections_by_course_id(
        &self,
        course_id: &str,
    ) -> Result<Vec<Section>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, course_id, lecturer_id FROM sections WHERE course_id = ?1 ORDER BY rowid",
                params![course_id],
            )
            .await
            .map_err(lookup_err)?;

        let mut sections = Vec::new();
        while let Some(row) = rows.next().await.map_err(lookup_err)? {
            sections.push(Section {
                id: row.get::<String>(0).map_err(lookup_err)?,
                course_id: row.get::<String>(1).map_err(lookup_err)?,
                lecturer_id: row.get::<String>(2).map_err(lookup_err)?,
            });
        }
        debug!(course_id, count = sections.len(), "sections found");
        Ok(sections)
    }

    async fn find_lecturer_by_id(
        &self,
        lecturer_id: &str,
    ) -> Result<Option<Lecturer>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, name FROM lecturers WHERE id = ?1",
                params![lecturer_id],
            )
            .await
            .map_err(lookup_err)?;

        match rows.next().await.map_err(lookup_err)? {
            Some(row) => Ok(Some(Lecturer {
                id: row.get::<String>(0).map_err(lookup_err)?,
                name: row.get::<String>(1).map_err(lookup_err)?,
            })),
            None => Ok(None),
        }
    }

    async fn find_reviews_by_section_id(
        &self,
        section_id: &str,
    ) -> Result<Vec<Review>, DomainError> {
        let conn = self.conn()?;
        let mut rows = conn
            .query(
                "SELECT id, section_id, body, rating FROM reviews WHERE section_id = ?1 ORDER BY rowid",
                params![section_id],
            )
            .await
            .map_err(lookup_err)?;

        let mut reviews = Vec::new();
        while let Some(row) = rows.next().await.map_err(lookup_err)? {
            let rating: i64 = row.get(3).map_err(lookup_err)?;
            reviews.push(Review {
                id: row.get::<String>(0).map_err(lookup_err)?,
                section_id: row.get::<String>(1).map_err(lookup_err)?,
                body: row.get::<String>(2).map_err(lookup_err)?,
                rating: Rating::new(rating)?,
            });
        }
        Ok(reviews)
    }
}
