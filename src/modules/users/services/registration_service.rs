use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::Result;
use crate::modules::users::models::{
    Guardian, GuardianType, NewGuardian, NewStudentPreference, NewUser, StudentPreference, User,
};
use crate::modules::users::repositories::{GuardianRepository, PreferenceRepository};

use super::UserService;

/// Self-service sign-up form for a new student
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    /// Login phone for the student account
    pub phone: String,
    pub email: Option<String>,
    pub branch_id: Option<String>,
    pub father: NewGuardian,
    pub mother: NewGuardian,
    pub preferred_school_1: Option<String>,
    pub preferred_school_2: Option<String>,
    pub pdpa_consent: bool,
}

/// Everything written for one registration
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub student: User,
    pub guardians: Vec<Guardian>,
    pub preference: StudentPreference,
}

#[derive(Debug, Clone)]
pub struct RegistrationService {
    users: UserService,
    guardians: GuardianRepository,
    preferences: PreferenceRepository,
}

impl RegistrationService {
    pub fn new(
        users: UserService,
        guardians: GuardianRepository,
        preferences: PreferenceRepository,
    ) -> Self {
        Self {
            users,
            guardians,
            preferences,
        }
    }

    /// Register a student, then both guardians, then the preference record.
    ///
    /// Each step commits on its own. When a later step fails the records
    /// written before it stay in the store.
    pub fn register_student(&self, form: RegistrationForm) -> Result<Registration> {
        let student = self.users.create_student(NewUser {
            nickname: form.nickname,
            email: form.email,
            ..NewUser::student(form.phone, form.first_name, form.last_name, form.branch_id.clone())
        })?;

        let mut guardians = Vec::with_capacity(2);
        for (guardian_type, input) in [
            (GuardianType::Father, form.father),
            (GuardianType::Mother, form.mother),
        ] {
            if let Err(e) = input.validate() {
                warn!(
                    student_id = %student.id,
                    guardian_type = ?guardian_type,
                    "Registration stopped after the student record was written"
                );
                return Err(e);
            }
            guardians.push(self.guardians.create(&student.id, guardian_type, input)?);
        }

        let preference = self.preferences.create(NewStudentPreference {
            student_id: student.id.clone(),
            preferred_school_1: form.preferred_school_1,
            preferred_school_2: form.preferred_school_2,
            pdpa_consent: form.pdpa_consent,
            branch_id: form.branch_id,
        })?;

        info!(student_id = %student.id, "Student registered");

        Ok(Registration {
            student,
            guardians,
            preference,
        })
    }
}
