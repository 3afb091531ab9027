// Services layer - Business logic and orchestration
pub mod access_service;
pub mod role_policy;
pub mod user_directory;

pub use access_service::AccessService;
pub use role_policy::{
    available_roles_for, can_assign, evaluate, AssignmentRequest, Decision, DenialReason, Operation,
};
pub use user_directory::{DirectoryStats, Page, PageRequest, UserFilters};
