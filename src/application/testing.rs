//! 测试用的内存 Repository

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{RepositoryError, UserRecord, UserRepositoryPort};

#[derive(Default)]
pub struct FakeUserRepository {
    users: Mutex<Vec<UserRecord>>,
    next_id: Mutex<i64>,
    writes: AtomicUsize,
    pages: Mutex<Vec<(i64, i64)>>,
    fail: bool,
}

impl FakeUserRepository {
    pub fn with_users(users: &[(&str, NaiveDate)]) -> Self {
        let records: Vec<UserRecord> = users
            .iter()
            .zip(1..)
            .map(|((name, dob), id)| UserRecord {
                id,
                name: name.to_string(),
                date_of_birth: *dob,
            })
            .collect();
        let next_id = records.len() as i64;

        Self {
            users: Mutex::new(records),
            next_id: Mutex::new(next_id),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn page_requests(&self) -> Vec<(i64, i64)> {
        self.pages.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail {
            return Err(RepositoryError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepositoryPort for FakeUserRepository {
    async fn create(
        &self,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<UserRecord, RepositoryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let record = UserRecord {
            id: *next_id,
            name: name.to_string(),
            date_of_birth,
        };
        self.users.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<UserRecord, RepositoryError> {
        self.check()?;
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<UserRecord>, RepositoryError> {
        self.pages.lock().unwrap().push((limit, offset));
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        date_of_birth: NaiveDate,
    ) -> Result<UserRecord, RepositoryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;

        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        user.name = name.to_string();
        user.date_of_birth = date_of_birth;
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}
