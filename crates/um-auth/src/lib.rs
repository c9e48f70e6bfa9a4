//! Permission catalog and authorization checks for the user-management
//! service.
//!
//! [`PermissionCatalog`] holds the compiled-in well-known vocabulary and its
//! read-only classification. [`AuthorizationEvaluator`] decides whether a
//! [`GrantedPermissionSet`] satisfies a required [`PermissionId`], with
//! `SUPERUSER` satisfying every check.

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod groups;
pub mod permission;

pub use catalog::PermissionCatalog;
pub use config::{AccessConfig, PrincipalConfig};
pub use error::AuthError;
pub use evaluator::{AuthorizationEvaluator, Decision, GrantedPermissionSet};
pub use groups::{GroupDefinition, default_groups, resolve_grants};
pub use permission::{PERMISSIONS, PermissionId, READ_ONLY_PERMISSIONS};
