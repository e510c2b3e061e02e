mod branch;

pub use branch::{Branch, BranchPatch, NewBranch};
