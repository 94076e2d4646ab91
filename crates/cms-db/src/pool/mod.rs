//! Database connection pool management

mod mysql;

pub use mysql::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig};

// Re-export MySqlPool for convenience
pub use sqlx::mysql::MySqlPool;
