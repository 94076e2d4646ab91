//! # cms-db
//!
//! Database layer implementing repository traits with MySQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides MySQL implementations for all repository traits
//! defined in `cms-core`. It handles:
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cms_db::{create_pool, run_migrations, DatabaseConfig, MySqlProgramRepository};
//! use cms_core::traits::ProgramRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!
//!     let programs = MySqlProgramRepository::new(pool).list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, MySqlPool};
pub use repositories::{
    MySqlDashboardRepository, MySqlGroupRepository, MySqlHomeRepository,
    MySqlMediaPartnerRepository, MySqlPageRepository, MySqlPermissionRepository,
    MySqlProgramRepository, MySqlScheduleRepository, MySqlUserRepository,
};
