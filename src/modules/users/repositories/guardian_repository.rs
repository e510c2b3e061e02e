use crate::core::Result;
use crate::modules::users::models::{
    Guardian, GuardianType, NewGuardian, NewStudentPreference, StudentPreference,
};
use crate::store::{self, SharedStore};

/// Parent contacts attached to a student
#[derive(Debug, Clone)]
pub struct GuardianRepository {
    store: SharedStore,
}

impl GuardianRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(
        &self,
        student_id: &str,
        guardian_type: GuardianType,
        input: NewGuardian,
    ) -> Result<Guardian> {
        let now = store::now();
        let guardian = Guardian {
            id: store::new_id(),
            student_id: student_id.to_string(),
            guardian_type,
            first_name: input.first_name,
            last_name: input.last_name,
            occupation: input.occupation,
            workplace: input.workplace,
            phone: input.phone,
            line_id: input.line_id,
            email: input.email,
            created_at: now,
            updated_at: now,
        };

        self.store.write()?.guardians.push(guardian.clone());
        Ok(guardian)
    }

    pub fn list_by_student(&self, student_id: &str) -> Result<Vec<Guardian>> {
        Ok(self
            .store
            .read()?
            .guardians
            .iter()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect())
    }
}

/// School preferences and consent captured at registration
#[derive(Debug, Clone)]
pub struct PreferenceRepository {
    store: SharedStore,
}

impl PreferenceRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn create(&self, input: NewStudentPreference) -> Result<StudentPreference> {
        let now = store::now();
        let preference = StudentPreference {
            id: store::new_id(),
            student_id: input.student_id,
            preferred_school_1: input.preferred_school_1,
            preferred_school_2: input.preferred_school_2,
            pdpa_consent: input.pdpa_consent,
            branch_id: input.branch_id,
            created_at: now,
            updated_at: now,
        };

        self.store.write()?.preferences.push(preference.clone());
        Ok(preference)
    }

    pub fn find_by_student(&self, student_id: &str) -> Result<Option<StudentPreference>> {
        Ok(self
            .store
            .read()?
            .preferences
            .iter()
            .find(|p| p.student_id == student_id)
            .cloned())
    }
}
