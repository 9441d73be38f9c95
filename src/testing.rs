//! In-memory registry used by unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use crate::errors::{RegistryError, RegistryResult};
use crate::models::{RecordSet, UpsertRequest, UserRecord};
use crate::services::Registry;

pub fn record(user_id: &str, status: &str) -> UserRecord {
    UserRecord {
        user_id: user_id.to_string(),
        status: status.to_string(),
        hwid: format!("hw-{}", user_id),
        expire_date: "2025-06-01".to_string(),
        footer_message: "hi".to_string(),
    }
}

/// Behaves like a well-mannered server: upserts replace or append by id,
/// deletes remove by id. Each operation can be switched to fail with a timeout.
#[derive(Default)]
pub struct FakeRegistry {
    records: Mutex<RecordSet>,
    upserts: Mutex<Vec<UpsertRequest>>,
    deletes: Mutex<Vec<String>>,
    list_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_upsert: AtomicBool,
    fail_delete: AtomicBool,
}

impl FakeRegistry {
    pub fn with_records(records: RecordSet) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_upsert(&self, fail: bool) {
        self.fail_upsert.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn upserts(&self) -> Vec<UpsertRequest> {
        self.upserts.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Registry for FakeRegistry {
    async fn list(&self) -> RegistryResult<RecordSet> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(RegistryError::Timeout(10_000));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn upsert(&self, request: &UpsertRequest) -> RegistryResult<()> {
        self.upserts.lock().unwrap().push(request.clone());
        if self.fail_upsert.load(Ordering::SeqCst) {
            return Err(RegistryError::Timeout(10_000));
        }

        let mut records = self.records.lock().unwrap();
        let updated = UserRecord {
            user_id: request.user_id.clone(),
            status: "Offline".to_string(),
            hwid: request.hwid.clone(),
            expire_date: request.expire_date.clone(),
            footer_message: request.footer_message.clone(),
        };
        match records.iter_mut().find(|r| r.user_id == request.user_id) {
            Some(existing) => {
                let status = existing.status.clone();
                *existing = UserRecord { status, ..updated };
            }
            None => records.push(updated),
        }
        Ok(())
    }

    async fn delete(&self, user_id: &str) -> RegistryResult<()> {
        self.deletes.lock().unwrap().push(user_id.to_string());
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(RegistryError::Timeout(10_000));
        }
        self.records.lock().unwrap().retain(|r| r.user_id != user_id);
        Ok(())
    }
}
