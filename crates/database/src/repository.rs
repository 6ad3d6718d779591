use crate::store::MarksStore;
use crate::DbError;
use async_trait::async_trait;
use core_types::{MarksRecord, NewMarks};
use sqlx::postgres::PgPool;
use uuid::Uuid;

const RECORD_COLUMNS: &str =
    "id, roll_number, name, grade, section, subject, marks, created_at, updated_at";

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Saves a single marks record. The uniqueness of `roll_number` is
    /// enforced by the table's constraint, so concurrent writers race there
    /// and only the first succeeds.
    pub async fn save_marks(&self, marks: &NewMarks) -> Result<MarksRecord, DbError> {
        let query = format!(
            r#"
            INSERT INTO marks (id, roll_number, name, grade, section, subject, marks)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {RECORD_COLUMNS}
            "#
        );

        sqlx::query_as::<_, MarksRecord>(&query)
            .bind(Uuid::new_v4())
            .bind(&marks.roll_number)
            .bind(&marks.name)
            .bind(&marks.grade)
            .bind(&marks.section)
            .bind(&marks.subject)
            .bind(marks.marks)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DbError::from_insert(e, &marks.roll_number))
    }

    /// Fetches every marks record in insertion order.
    pub async fn get_all_marks(&self) -> Result<Vec<MarksRecord>, DbError> {
        let query = format!("SELECT {RECORD_COLUMNS} FROM marks ORDER BY seq ASC");
        let records = sqlx::query_as::<_, MarksRecord>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    /// Fetches the records whose roll number matches exactly.
    pub async fn get_marks_by_roll_number(
        &self,
        roll_number: &str,
    ) -> Result<Vec<MarksRecord>, DbError> {
        let query = format!(
            "SELECT {RECORD_COLUMNS} FROM marks WHERE roll_number = $1 ORDER BY seq ASC"
        );
        let records = sqlx::query_as::<_, MarksRecord>(&query)
            .bind(roll_number)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }
}

#[async_trait]
impl MarksStore for DbRepository {
    async fn insert(&self, marks: NewMarks) -> Result<MarksRecord, DbError> {
        self.save_marks(&marks).await
    }

    async fn find(&self, roll_number: Option<&str>) -> Result<Vec<MarksRecord>, DbError> {
        match roll_number {
            Some(roll_number) => self.get_marks_by_roll_number(roll_number).await,
            None => self.get_all_marks().await,
        }
    }

    async fn close(&self) {
        tracing::info!("Closing database connection pool.");
        self.pool.close().await;
    }
}
