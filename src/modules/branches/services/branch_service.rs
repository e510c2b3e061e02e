use tracing::info;

use crate::core::traits::Repository;
use crate::core::{AppError, Result, Scope};
use crate::modules::branches::models::{Branch, BranchPatch, NewBranch};
use crate::modules::branches::repositories::BranchRepository;

#[derive(Debug, Clone)]
pub struct BranchService {
    branches: BranchRepository,
}

impl BranchService {
    pub fn new(branches: BranchRepository) -> Self {
        Self { branches }
    }

    /// Branches visible under `scope`: all of them, or the single scoped one
    pub fn list_branches(&self, scope: &Scope) -> Result<Vec<Branch>> {
        self.branches.list_where(&|b| scope.admits(Some(b.id.as_str())))
    }

    pub fn get_branch(&self, id: &str) -> Result<Branch> {
        self.branches
            .find_by_id(id)?
            .ok_or_else(|| AppError::not_found("Branch"))
    }

    pub fn create_branch(&self, input: NewBranch) -> Result<Branch> {
        input.validate()?;
        let branch = self.branches.create(input)?;
        info!(branch_id = %branch.id, rate = %branch.commission_rate, "Branch created");
        Ok(branch)
    }

    /// Rate changes only affect revenue written afterwards
    pub fn update_branch(&self, id: &str, patch: BranchPatch) -> Result<Branch> {
        patch.validate()?;
        let rate_changed = patch.commission_rate.is_some();
        let branch = self.branches.update(id, patch)?;
        if rate_changed {
            info!(branch_id = %branch.id, rate = %branch.commission_rate, "Commission rate changed");
        }
        Ok(branch)
    }

    pub fn delete_branch(&self, id: &str) -> Result<()> {
        self.branches.delete(id)?;
        info!(branch_id = %id, "Branch deleted");
        Ok(())
    }
}
