use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::attendance::models::{Attendance, AttendancePatch, NewAttendance};
use crate::store::{self, SharedStore};

#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    store: SharedStore,
}

impl AttendanceRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Attendance rows filtered by course and/or student; `None` matches all
    pub fn list_filtered(
        &self,
        course_id: Option<&str>,
        student_id: Option<&str>,
    ) -> Result<Vec<Attendance>> {
        self.list_where(&|a| {
            course_id.is_none_or(|id| a.course_id == id)
                && student_id.is_none_or(|id| a.student_id == id)
        })
    }

    /// Store `input`, dropping any row already recorded for the same
    /// student, course and class date. Returns the new row and whatever
    /// it replaced.
    ///
    /// The new row is `counted` when it is attended or when a replaced row
    /// had already counted, so a class day is counted at most once however
    /// often it is re-marked.
    pub fn replace_for_day(&self, input: NewAttendance) -> Result<(Attendance, Vec<Attendance>)> {
        let mut db = self.store.write()?;

        let (replaced, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut db.attendance)
            .into_iter()
            .partition(|a| a.is_same_class(&input.student_id, &input.course_id, input.class_date));
        db.attendance = kept;

        let counted = replaced.iter().any(Attendance::has_counted);
        let attendance = build(input, counted);
        db.attendance.push(attendance.clone());

        Ok((attendance, replaced))
    }
}

fn build(input: NewAttendance, previously_counted: bool) -> Attendance {
    let now = store::now();
    Attendance {
        counted: previously_counted || input.status.counts_as_attended(),
        id: store::new_id(),
        student_id: input.student_id,
        course_id: input.course_id,
        class_date: input.class_date,
        status: input.status,
        check_in_time: input.check_in_time,
        notes: input.notes,
        created_at: now,
        updated_at: now,
    }
}

impl Repository<Attendance> for AttendanceRepository {
    type Create = NewAttendance;
    type Patch = AttendancePatch;

    fn create(&self, input: NewAttendance) -> Result<Attendance> {
        let (attendance, _) = self.replace_for_day(input)?;
        Ok(attendance)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Attendance>> {
        Ok(store::find_by_id(&self.store.read()?.attendance, id).cloned())
    }

    fn update(&self, id: &str, patch: AttendancePatch) -> Result<Attendance> {
        let mut db = self.store.write()?;
        let attendance = store::find_by_id_mut(&mut db.attendance, id)
            .ok_or_else(|| AppError::not_found("Attendance"))?;
        patch.apply_to(attendance);
        attendance.updated_at = store::now();

        Ok(attendance.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if store::remove_by_id(&mut self.store.write()?.attendance, id) {
            Ok(())
        } else {
            Err(AppError::not_found("Attendance"))
        }
    }

    fn list_where(&self, predicate: &dyn Fn(&Attendance) -> bool) -> Result<Vec<Attendance>> {
        Ok(self
            .store
            .read()?
            .attendance
            .iter()
            .filter(|a| predicate(a))
            .cloned()
            .collect())
    }
}
