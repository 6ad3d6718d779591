//! # Marks Service
//!
//! The thin layer between the HTTP handlers (or the CLI) and the store.
//! It holds no state of its own beyond the injected store handle and never
//! retries: a store failure is logged and handed straight back.

use core_types::{MarksRecord, NewMarks};
use database::MarksStore;
use std::sync::Arc;
use uuid::Uuid;

pub mod error;

pub use error::ServiceError;

#[derive(Clone)]
pub struct MarksService {
    store: Arc<dyn MarksStore>,
}

impl MarksService {
    pub fn new(store: Arc<dyn MarksStore>) -> Self {
        Self { store }
    }

    /// Persists a validated marks entry and returns the stored record's id.
    pub async fn add_marks(&self, marks: NewMarks) -> Result<Uuid, ServiceError> {
        let roll_number = marks.roll_number.clone();
        match self.store.insert(marks).await {
            Ok(record) => {
                tracing::info!(id = %record.id, roll_number = %record.roll_number, "Marks added.");
                Ok(record.id)
            }
            Err(e) => {
                tracing::error!(error = %e, roll_number = %roll_number, "Failed while adding marks.");
                Err(e.into())
            }
        }
    }

    /// Lists marks records in storage order.
    ///
    /// A non-empty `roll_number` restricts the result to exact matches; `None`
    /// or an empty string returns everything.
    pub async fn get_marks_data(
        &self,
        roll_number: Option<&str>,
    ) -> Result<Vec<MarksRecord>, ServiceError> {
        let filter = roll_number.filter(|r| !r.is_empty());
        self.store.find(filter).await.map_err(|e| {
            tracing::error!(error = %e, roll_number = ?filter, "Failed while fetching marks data.");
            e.into()
        })
    }

    /// Releases the underlying store.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::{DbError, InMemoryStore};

    fn service() -> MarksService {
        MarksService::new(Arc::new(InMemoryStore::new()))
    }

    fn jhon() -> NewMarks {
        NewMarks {
            roll_number: "001".to_string(),
            name: "Jhon".to_string(),
            grade: "10".to_string(),
            section: "B".to_string(),
            subject: "Science".to_string(),
            marks: 60.0,
        }
    }

    #[tokio::test]
    async fn added_marks_come_back_field_for_field() {
        let service = service();
        let id = service.add_marks(jhon()).await.unwrap();

        let found = service.get_marks_data(Some("001")).await.unwrap();
        assert_eq!(found.len(), 1);
        let record = &found[0];
        assert_eq!(record.id, id);
        assert_eq!(record.roll_number, "001");
        assert_eq!(record.name, "Jhon");
        assert_eq!(record.grade, "10");
        assert_eq!(record.section, "B");
        assert_eq!(record.subject, "Science");
        assert_eq!(record.marks, 60.0);
    }

    #[tokio::test]
    async fn duplicate_roll_number_surfaces_as_persistence_error() {
        let service = service();
        service.add_marks(jhon()).await.unwrap();

        let err = service
            .add_marks(NewMarks { subject: "Math".to_string(), ..jhon() })
            .await
            .unwrap_err();
        let ServiceError::Persistence(inner) = &err;
        assert!(matches!(inner, DbError::DuplicateRollNumber(_)));
        assert!(err.to_string().contains("001"));

        assert_eq!(service.get_marks_data(None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_filter_means_everything() {
        let service = service();
        service.add_marks(jhon()).await.unwrap();
        service
            .add_marks(NewMarks { roll_number: "002".to_string(), ..jhon() })
            .await
            .unwrap();

        assert_eq!(service.get_marks_data(None).await.unwrap().len(), 2);
        assert_eq!(service.get_marks_data(Some("")).await.unwrap().len(), 2);
        assert!(service.get_marks_data(Some("003")).await.unwrap().is_empty());
    }
}
