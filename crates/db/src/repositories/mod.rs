//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-statement deletes
//! run inside a single transaction.

pub mod article_repo;
pub mod fichier_repo;
pub mod library_repo;
pub mod membership_repo;
pub mod notification_repo;
pub mod plan_repo;
pub mod project_repo;
pub mod tag_repo;
pub mod user_repo;

pub use article_repo::ArticleRepo;
pub use fichier_repo::FichierRepo;
pub use library_repo::LibraryRepo;
pub use membership_repo::MembershipRepo;
pub use notification_repo::NotificationRepo;
pub use plan_repo::PlanRepo;
pub use project_repo::ProjectRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
