//! Memory-resident record store.
//!
//! One [`Store`] holds every collection. It is shared through a
//! [`SharedStore`] handle that repositories receive in their constructor.
//! Each repository call takes the lock for its own duration only, so a
//! sequence of calls touching several collections is never atomic.

pub mod seed;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::attendance::models::Attendance;
use crate::modules::branches::models::Branch;
use crate::modules::courses::models::Course;
use crate::modules::enrollments::models::Enrollment;
use crate::modules::payments::models::Payment;
use crate::modules::revenue::models::Revenue;
use crate::modules::schedules::models::Schedule;
use crate::modules::users::models::{Guardian, StudentPreference, User};

/// A row in one of the store's collections
pub trait Record {
    fn id(&self) -> &str;
}

/// Every collection the dashboard works with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    pub users: Vec<User>,
    pub branches: Vec<Branch>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub attendance: Vec<Attendance>,
    pub payments: Vec<Payment>,
    pub revenue: Vec<Revenue>,
    pub schedules: Vec<Schedule>,
    pub guardians: Vec<Guardian>,
    #[serde(rename = "student_preferences")]
    pub preferences: Vec<StudentPreference>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn branch(&self, id: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Display name of a branch, `None` when the id is dangling
    pub fn branch_name(&self, id: &str) -> Option<String> {
        self.branch(id).map(|b| b.name.clone())
    }

    /// "First Last" of a user, `None` when the id is dangling
    pub fn user_full_name(&self, id: &str) -> Option<String> {
        self.user(id).map(User::full_name)
    }
}

/// Cloneable handle to the process-wide store
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Store>> {
        self.inner
            .read()
            .map_err(|_| AppError::internal("record store lock poisoned"))
    }

    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Store>> {
        self.inner
            .write()
            .map_err(|_| AppError::internal("record store lock poisoned"))
    }

    /// Copy of the current contents, e.g. for dumping to JSON
    pub fn snapshot(&self) -> Result<Store> {
        Ok(self.read()?.clone())
    }
}

/// Fresh opaque identifier for a new record
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Creation/update instant for records
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn find_by_id<'a, T: Record>(rows: &'a [T], id: &str) -> Option<&'a T> {
    rows.iter().find(|r| r.id() == id)
}

pub fn find_by_id_mut<'a, T: Record>(rows: &'a mut [T], id: &str) -> Option<&'a mut T> {
    rows.iter_mut().find(|r| r.id() == id)
}

/// Remove the row with `id`, returning whether one existed
pub fn remove_by_id<T: Record>(rows: &mut Vec<T>, id: &str) -> bool {
    match rows.iter().position(|r| r.id() == id) {
        Some(index) => {
            rows.remove(index);
            true
        }
        None => false,
    }
}
