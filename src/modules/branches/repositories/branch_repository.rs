use crate::core::traits::Repository;
use crate::core::{AppError, Result};
use crate::modules::branches::models::{Branch, BranchPatch, NewBranch};
use crate::store::{self, SharedStore};

/// Repository for branch records
#[derive(Debug, Clone)]
pub struct BranchRepository {
    store: SharedStore,
}

impl BranchRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

impl Repository<Branch> for BranchRepository {
    type Create = NewBranch;
    type Patch = BranchPatch;

    fn create(&self, input: NewBranch) -> Result<Branch> {
        let now = store::now();
        let branch = Branch {
            id: store::new_id(),
            name: input.name,
            address: input.address,
            phone: input.phone,
            manager_name: input.manager_name,
            commission_rate: input.commission_rate,
            created_at: now,
            updated_at: now,
        };

        self.store.write()?.branches.push(branch.clone());
        Ok(branch)
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Branch>> {
        Ok(store::find_by_id(&self.store.read()?.branches, id).cloned())
    }

    fn update(&self, id: &str, patch: BranchPatch) -> Result<Branch> {
        let mut db = self.store.write()?;
        let branch = store::find_by_id_mut(&mut db.branches, id)
            .ok_or_else(|| AppError::not_found("Branch"))?;
        patch.apply_to(branch);
        branch.updated_at = store::now();

        Ok(branch.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if store::remove_by_id(&mut self.store.write()?.branches, id) {
            Ok(())
        } else {
            Err(AppError::not_found("Branch"))
        }
    }

    fn list_where(&self, predicate: &dyn Fn(&Branch) -> bool) -> Result<Vec<Branch>> {
        Ok(self
            .store
            .read()?
            .branches
            .iter()
            .filter(|b| predicate(b))
            .cloned()
            .collect())
    }
}
