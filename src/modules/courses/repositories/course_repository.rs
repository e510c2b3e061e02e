use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::courses::models::{Course, CoursePatch, NewCourse};
use crate::store::{self, SharedStore};

/// Repository for courses; keeps `branch_name` and `teacher_name` in sync
/// with the ids they are cached from
#[derive(Debug, Clone)]
pub struct CourseRepository {
    store: SharedStore,
}

impl CourseRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn list_by_teacher(&self, teacher_id: &str) -> Result<Vec<Course>> {
        self.list_where(&|c| c.teacher_id.as_deref() == Some(teacher_id))
    }

    /// Clear both `teacher_id` and its cached name
    pub fn unassign_teacher(&self, id: &str) -> Result<Course> {
        let mut db = self.store.write()?;
        let course = store::find_by_id_mut(&mut db.courses, id)
            .ok_or_else(|| AppError::not_found("Course"))?;
        course.teacher_id = None;
        course.teacher_name = None;
        course.updated_at = store::now();

        Ok(course.clone())
    }
}

impl Repository<Course> for CourseRepository {
    type Create = NewCourse;
    type Patch = CoursePatch;

    fn create(&self, input: NewCourse) -> Result<Course> {
        let mut db = self.store.write()?;
        let branch_name = db.branch_name(&input.branch_id);
        let teacher_name = input
            .teacher_id
            .as_deref()
            .and_then(|id| db.user_full_name(id));
        let now = store::now();

        let course = Course {
            id: store::new_id(),
            name: input.name,
            description: input.description,
            grade_level: input.grade_level,
            total_sessions: input.total_sessions,
            price: input.price,
            branch_id: input.branch_id,
            teacher_id: input.teacher_id,
            branch_name,
            teacher_name,
            created_at: now,
            updated_at: now,
        };

        db.courses.push(course.clone());
        Ok(course)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Course>> {
        Ok(store::find_by_id(&self.store.read()?.courses, id).cloned())
    }

    fn update(&self, id: &str, patch: CoursePatch) -> Result<Course> {
        let mut db = self.store.write()?;
        let branch_name = patch.branch_id.as_deref().map(|bid| db.branch_name(bid));
        let teacher_name = patch.teacher_id.as_deref().map(|tid| db.user_full_name(tid));

        let course = store::find_by_id_mut(&mut db.courses, id)
            .ok_or_else(|| AppError::not_found("Course"))?;
        patch.apply_to(course);
        if let Some(name) = branch_name {
            course.branch_name = name;
        }
        if let Some(name) = teacher_name {
            course.teacher_name = name;
        }
        course.updated_at = store::now();

        Ok(course.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if store::remove_by_id(&mut self.store.write()?.courses, id) {
            Ok(())
        } else {
            Err(AppError::not_found("Course"))
        }
    }

    fn list_where(&self, predicate: &dyn Fn(&Course) -> bool) -> Result<Vec<Course>> {
        Ok(self
            .store
            .read()?
            .courses
            .iter()
            .filter(|c| predicate(c))
            .cloned()
            .collect())
    }
}
