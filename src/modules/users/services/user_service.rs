use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, Result, Role, Scope};
use crate::modules::users::models::{NewUser, User, UserPatch};
use crate::modules::users::repositories::UserRepository;

/// Scoped access to students, teachers and staff accounts
#[derive(Debug, Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    pub fn find_by_phone(&self, phone: &str) -> Result<Option<User>> {
        self.users.find_by_phone(phone)
    }

    pub fn get_user(&self, id: &str) -> Result<User> {
        self.users
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("User"))
    }

    pub fn list_users(&self, scope: &Scope) -> Result<Vec<User>> {
        self.users
            .list_where(&|u| scope.admits(u.branch_id.as_deref()))
    }

    pub fn list_by_role(&self, role: Role, scope: &Scope) -> Result<Vec<User>> {
        self.users
            .list_where(&|u| u.role == role && scope.admits(u.branch_id.as_deref()))
    }

    pub fn list_students(&self, scope: &Scope) -> Result<Vec<User>> {
        self.list_by_role(Role::Student, scope)
    }

    pub fn list_teachers(&self, scope: &Scope) -> Result<Vec<User>> {
        self.list_by_role(Role::Teacher, scope)
    }

    /// Create a user after checking names and phone format.
    /// The repository rejects a phone that is already registered.
    pub fn create_user(&self, input: NewUser) -> Result<User> {
        input.validate()?;
        let user = self.users.create(input)?;
        info!(
            user_id = %user.id,
            role = %user.role,
            branch_id = ?user.branch_id,
            "User created"
        );
        Ok(user)
    }

    pub fn create_student(&self, input: NewUser) -> Result<User> {
        self.create_user(NewUser {
            role: Role::Student,
            ..input
        })
    }

    pub fn create_teacher(&self, input: NewUser) -> Result<User> {
        self.create_user(NewUser {
            role: Role::Teacher,
            ..input
        })
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> Result<User> {
        patch.validate()?;
        self.users.update(id, patch)
    }

    pub fn delete_user(&self, id: &str) -> Result<()> {
        self.users.delete(id)?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
