use chrono::NaiveDate;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::enrollments::models::{Enrollment, EnrollmentPatch, NewEnrollment};
use crate::store::{self, SharedStore, Store};

/// Input accepted by [`EnrollmentRepository::create`]; the date is already resolved
#[derive(Debug, Clone)]
pub struct EnrollmentRow {
    pub enrollment: NewEnrollment,
    pub enrollment_date: NaiveDate,
}

/// Repository for enrollments; caches student and course names on write
#[derive(Debug, Clone)]
pub struct EnrollmentRepository {
    store: SharedStore,
}

impl EnrollmentRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn list_by_student(&self, student_id: &str) -> Result<Vec<Enrollment>> {
        self.list_where(&|e| e.student_id == student_id)
    }

    pub fn list_by_course(&self, course_id: &str) -> Result<Vec<Enrollment>> {
        self.list_where(&|e| e.course_id == course_id)
    }

    /// Oldest active enrollment for the pair, if any
    pub fn find_active(&self, student_id: &str, course_id: &str) -> Result<Option<Enrollment>> {
        Ok(self
            .store
            .read()?
            .enrollments
            .iter()
            .find(|e| e.student_id == student_id && e.course_id == course_id && e.is_active())
            .cloned())
    }

    /// Overwrite the attended-session counter
    pub fn set_sessions_attended(&self, id: &str, sessions_attended: u32) -> Result<Enrollment> {
        let mut db = self.store.write()?;
        let enrollment = store::find_by_id_mut(&mut db.enrollments, id)
            .ok_or_else(|| AppError::not_found("Enrollment"))?;
        enrollment.sessions_attended = sessions_attended;
        enrollment.updated_at = store::now();

        Ok(enrollment.clone())
    }

    /// Add one attended session under a single lock acquisition
    pub fn increment_sessions_attended(&self, id: &str) -> Result<Enrollment> {
        let mut db = self.store.write()?;
        let enrollment = store::find_by_id_mut(&mut db.enrollments, id)
            .ok_or_else(|| AppError::not_found("Enrollment"))?;
        enrollment.sessions_attended = enrollment.sessions_attended.saturating_add(1);
        enrollment.updated_at = store::now();

        Ok(enrollment.clone())
    }
}

fn student_names(db: &Store, student_id: &str) -> (String, String) {
    db.user(student_id)
        .map(|u| (u.first_name.clone(), u.last_name.clone()))
        .unwrap_or_default()
}

fn course_name(db: &Store, course_id: &str) -> String {
    db.course(course_id).map(|c| c.name.clone()).unwrap_or_default()
}

impl Repository<Enrollment> for EnrollmentRepository {
    type Create = EnrollmentRow;
    type Patch = EnrollmentPatch;

    fn create(&self, row: EnrollmentRow) -> Result<Enrollment> {
        let mut db = self.store.write()?;
        let input = row.enrollment;
        let (student_first_name, student_last_name) = student_names(&db, &input.student_id);
        let course_name = course_name(&db, &input.course_id);
        let now = store::now();

        let enrollment = Enrollment {
            id: store::new_id(),
            student_id: input.student_id,
            course_id: input.course_id,
            enrollment_date: row.enrollment_date,
            payment_status: input.payment_status,
            status: input.status,
            sessions_attended: 0,
            student_first_name,
            student_last_name,
            course_name,
            created_at: now,
            updated_at: now,
        };

        db.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Enrollment>> {
        Ok(store::find_by_id(&self.store.read()?.enrollments, id).cloned())
    }

    fn update(&self, id: &str, patch: EnrollmentPatch) -> Result<Enrollment> {
        let mut db = self.store.write()?;
        let names = patch.student_id.as_deref().map(|sid| student_names(&db, sid));
        let new_course_name = patch.course_id.as_deref().map(|cid| course_name(&db, cid));

        let enrollment = store::find_by_id_mut(&mut db.enrollments, id)
            .ok_or_else(|| AppError::not_found("Enrollment"))?;
        patch.apply_to(enrollment);
        if let Some((first, last)) = names {
            enrollment.student_first_name = first;
            enrollment.student_last_name = last;
        }
        if let Some(name) = new_course_name {
            enrollment.course_name = name;
        }
        enrollment.updated_at = store::now();

        Ok(enrollment.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if store::remove_by_id(&mut self.store.write()?.enrollments, id) {
            Ok(())
        } else {
            Err(AppError::not_found("Enrollment"))
        }
    }

    fn list_where(&self, predicate: &dyn Fn(&Enrollment) -> bool) -> Result<Vec<Enrollment>> {
        Ok(self
            .store
            .read()?
            .enrollments
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect())
    }
}
