mod guardian;
mod preference;
mod user;

pub use guardian::{Guardian, GuardianType, NewGuardian};
pub use preference::{NewStudentPreference, StudentPreference};
pub use user::{is_valid_phone, NewUser, User, UserPatch};
