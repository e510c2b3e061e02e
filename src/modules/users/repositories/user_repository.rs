use crate::core::traits::Repository;
use crate::core::{AppError, Result, Role};
use crate::modules::users::models::{NewUser, User, UserPatch};
use crate::store::{self, SharedStore};

/// Repository for users of every role
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: SharedStore,
}

impl UserRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn find_by_phone(&self, phone: &str) -> Result<Option<User>> {
        Ok(self.store.read()?.users.iter().find(|u| u.phone == phone).cloned())
    }

    pub fn list_by_role(&self, role: Role) -> Result<Vec<User>> {
        self.list_where(&|u| u.role == role)
    }
}

/// Reject `phone` if a user other than `except_id` already has it.
/// Called with the write guard held so the check and the write are atomic.
fn ensure_phone_free(users: &[User], phone: &str, except_id: Option<&str>) -> Result<()> {
    if users
        .iter()
        .any(|u| u.phone == phone && Some(u.id.as_str()) != except_id)
    {
        return Err(AppError::validation(format!(
            "Phone number {} is already registered",
            phone
        )));
    }
    Ok(())
}

impl Repository<User> for UserRepository {
    type Create = NewUser;
    type Patch = UserPatch;

    fn create(&self, input: NewUser) -> Result<User> {
        let mut db = self.store.write()?;
        ensure_phone_free(&db.users, &input.phone, None)?;
        let branch_name = input
            .branch_id
            .as_deref()
            .and_then(|id| db.branch_name(id));
        let now = store::now();

        let user = User {
            id: store::new_id(),
            phone: input.phone,
            first_name: input.first_name,
            last_name: input.last_name,
            nickname: input.nickname,
            email: input.email,
            role: input.role,
            branch_id: input.branch_id,
            guardian_name: input.guardian_name,
            guardian_surname: input.guardian_surname,
            guardian_occupation: input.guardian_occupation,
            guardian_line_id: input.guardian_line_id,
            branch_name,
            created_at: now,
            updated_at: now,
        };

        db.users.push(user.clone());
        Ok(user)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(store::find_by_id(&self.store.read()?.users, id).cloned())
    }

    fn update(&self, id: &str, patch: UserPatch) -> Result<User> {
        let mut db = self.store.write()?;
        if let Some(phone) = patch.phone.as_deref() {
            ensure_phone_free(&db.users, phone, Some(id))?;
        }
        let branch_name = patch.branch_id.as_deref().map(|bid| db.branch_name(bid));

        let user = store::find_by_id_mut(&mut db.users, id)
            .ok_or_else(|| AppError::not_found("User"))?;
        patch.apply_to(user);
        if let Some(name) = branch_name {
            user.branch_name = name;
        }
        user.updated_at = store::now();

        Ok(user.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if store::remove_by_id(&mut self.store.write()?.users, id) {
            Ok(())
        } else {
            Err(AppError::not_found("User"))
        }
    }

    fn list_where(&self, predicate: &dyn Fn(&User) -> bool) -> Result<Vec<User>> {
        Ok(self
            .store
            .read()?
            .users
            .iter()
            .filter(|u| predicate(u))
            .cloned()
            .collect())
    }
}
