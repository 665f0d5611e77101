//! Repository modules for database access

pub mod columns;
pub mod factory;
pub mod member_sql;
pub mod policy_sql;
pub mod timestamp;
pub mod user;
pub mod user_sql;

pub use factory::SqlRepositoryFactory;
pub use member_sql::SqlMemberRepository;
pub use policy_sql::SqlPolicyRepository;
pub use user::{User, UserRepository};
pub use user_sql::SqlUserRepository;
