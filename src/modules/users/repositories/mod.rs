mod guardian_repository;
mod user_repository;

pub use guardian_repository::{GuardianRepository, PreferenceRepository};
pub use user_repository::UserRepository;
