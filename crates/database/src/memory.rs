use crate::store::MarksStore;
use crate::DbError;
use async_trait::async_trait;
use chrono::Utc;
use core_types::{MarksRecord, NewMarks};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A process-local marks store. Records live in insertion order and vanish
/// when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<MarksRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl MarksStore for InMemoryStore {
    async fn insert(&self, marks: NewMarks) -> Result<MarksRecord, DbError> {
        // The write lock spans the check and the push.
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.roll_number == marks.roll_number) {
            return Err(DbError::DuplicateRollNumber(marks.roll_number));
        }
        let record = marks.into_record(Uuid::new_v4(), Utc::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn find(&self, roll_number: Option<&str>) -> Result<Vec<MarksRecord>, DbError> {
        let records = self.records.read().await;
        let found = match roll_number {
            Some(roll_number) => records
                .iter()
                .filter(|r| r.roll_number == roll_number)
                .cloned()
                .collect(),
            None => records.clone(),
        };
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_marks(roll_number: &str, subject: &str) -> NewMarks {
        NewMarks {
            roll_number: roll_number.to_string(),
            name: "Jhon".to_string(),
            grade: "10".to_string(),
            section: "B".to_string(),
            subject: subject.to_string(),
            marks: 60.0,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_timestamps() {
        let store = InMemoryStore::new();
        let record = store.insert(new_marks("001", "Science")).await.unwrap();
        assert_eq!(record.roll_number, "001");
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn duplicate_roll_number_is_rejected_even_for_another_subject() {
        let store = InMemoryStore::new();
        store.insert(new_marks("001", "Science")).await.unwrap();

        let err = store.insert(new_marks("001", "Math")).await.unwrap_err();
        assert!(matches!(err, DbError::DuplicateRollNumber(ref r) if r == "001"));

        let all = store.find(None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].subject, "Science");
    }

    #[tokio::test]
    async fn find_keeps_insertion_order_and_filters_exactly() {
        let store = InMemoryStore::new();
        for roll in ["300", "100", "200", "1000"] {
            store.insert(new_marks(roll, "Science")).await.unwrap();
        }

        let order: Vec<_> = store
            .find(None)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.roll_number)
            .collect();
        assert_eq!(order, ["300", "100", "200", "1000"]);

        let hits = store.find(Some("100")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].roll_number, "100");

        assert!(store.find(Some("10")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_duplicate_inserts_admit_exactly_one() {
        let store = Arc::new(InMemoryStore::new());
        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(new_marks("777777", "Science")).await })
            })
            .collect();

        let mut successes = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(store.len().await, 1);
    }
}
