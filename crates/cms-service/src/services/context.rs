//! Service context - dependency container for services
//!
//! Holds all repositories, the auth helpers and storage settings needed by services.

use std::sync::Arc;

use cms_common::auth::{JwtService, PasswordService};
use cms_common::StorageConfig;
use cms_core::traits::{
    DashboardRepository, GroupRepository, HomeRepository, MediaPartnerRepository, PageRepository,
    PermissionRepository, ProgramRepository, ScheduleRepository, UserRepository,
};
use cms_db::{
    MySqlDashboardRepository, MySqlGroupRepository, MySqlHomeRepository,
    MySqlMediaPartnerRepository, MySqlPageRepository, MySqlPermissionRepository, MySqlPool,
    MySqlProgramRepository, MySqlScheduleRepository, MySqlUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT and password services for authentication
/// - Upload storage settings
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: MySqlPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    group_repo: Arc<dyn GroupRepository>,
    permission_repo: Arc<dyn PermissionRepository>,
    program_repo: Arc<dyn ProgramRepository>,
    schedule_repo: Arc<dyn ScheduleRepository>,
    home_repo: Arc<dyn HomeRepository>,
    media_partner_repo: Arc<dyn MediaPartnerRepository>,
    page_repo: Arc<dyn PageRepository>,
    dashboard_repo: Arc<dyn DashboardRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
    storage: StorageConfig,
}

impl ServiceContext {
    /// Wire every repository to the MySQL implementation backed by `pool`
    pub fn mysql(pool: MySqlPool, jwt_service: Arc<JwtService>, storage: StorageConfig) -> Self {
        Self {
            user_repo: Arc::new(MySqlUserRepository::new(pool.clone())),
            group_repo: Arc::new(MySqlGroupRepository::new(pool.clone())),
            permission_repo: Arc::new(MySqlPermissionRepository::new(pool.clone())),
            program_repo: Arc::new(MySqlProgramRepository::new(pool.clone())),
            schedule_repo: Arc::new(MySqlScheduleRepository::new(pool.clone())),
            home_repo: Arc::new(MySqlHomeRepository::new(pool.clone())),
            media_partner_repo: Arc::new(MySqlMediaPartnerRepository::new(pool.clone())),
            page_repo: Arc::new(MySqlPageRepository::new(pool.clone())),
            dashboard_repo: Arc::new(MySqlDashboardRepository::new(pool.clone())),
            pool,
            jwt_service,
            password_service: PasswordService::new(),
            storage,
        }
    }

    // === Database Pool ===

    /// Get the MySQL connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    pub fn permission_repo(&self) -> &dyn PermissionRepository {
        self.permission_repo.as_ref()
    }

    pub fn program_repo(&self) -> &dyn ProgramRepository {
        self.program_repo.as_ref()
    }

    pub fn schedule_repo(&self) -> &dyn ScheduleRepository {
        self.schedule_repo.as_ref()
    }

    pub fn home_repo(&self) -> &dyn HomeRepository {
        self.home_repo.as_ref()
    }

    pub fn media_partner_repo(&self) -> &dyn MediaPartnerRepository {
        self.media_partner_repo.as_ref()
    }

    pub fn page_repo(&self) -> &dyn PageRepository {
        self.page_repo.as_ref()
    }

    pub fn dashboard_repo(&self) -> &dyn DashboardRepository {
        self.dashboard_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Upload storage settings
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"MySqlPool")
            .field("repositories", &"...")
            .field("storage", &self.storage)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
///
/// Repositories left unset fall back to the MySQL implementation on the pool.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<MySqlPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    group_repo: Option<Arc<dyn GroupRepository>>,
    permission_repo: Option<Arc<dyn PermissionRepository>>,
    program_repo: Option<Arc<dyn ProgramRepository>>,
    schedule_repo: Option<Arc<dyn ScheduleRepository>>,
    home_repo: Option<Arc<dyn HomeRepository>>,
    media_partner_repo: Option<Arc<dyn MediaPartnerRepository>>,
    page_repo: Option<Arc<dyn PageRepository>>,
    dashboard_repo: Option<Arc<dyn DashboardRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    storage: Option<StorageConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: MySqlPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn permission_repo(mut self, repo: Arc<dyn PermissionRepository>) -> Self {
        self.permission_repo = Some(repo);
        self
    }

    pub fn program_repo(mut self, repo: Arc<dyn ProgramRepository>) -> Self {
        self.program_repo = Some(repo);
        self
    }

    pub fn schedule_repo(mut self, repo: Arc<dyn ScheduleRepository>) -> Self {
        self.schedule_repo = Some(repo);
        self
    }

    pub fn home_repo(mut self, repo: Arc<dyn HomeRepository>) -> Self {
        self.home_repo = Some(repo);
        self
    }

    pub fn media_partner_repo(mut self, repo: Arc<dyn MediaPartnerRepository>) -> Self {
        self.media_partner_repo = Some(repo);
        self
    }

    pub fn page_repo(mut self, repo: Arc<dyn PageRepository>) -> Self {
        self.page_repo = Some(repo);
        self
    }

    pub fn dashboard_repo(mut self, repo: Arc<dyn DashboardRepository>) -> Self {
        self.dashboard_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn storage(mut self, storage: StorageConfig) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the pool, JWT service or storage
    /// settings are missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::validation("pool is required"))?;
        let jwt_service = self
            .jwt_service
            .ok_or_else(|| ServiceError::validation("jwt_service is required"))?;
        let storage = self
            .storage
            .ok_or_else(|| ServiceError::validation("storage is required"))?;

        let mut ctx = ServiceContext::mysql(pool, jwt_service, storage);
        if let Some(repo) = self.user_repo {
            ctx.user_repo = repo;
        }
        if let Some(repo) = self.group_repo {
            ctx.group_repo = repo;
        }
        if let Some(repo) = self.permission_repo {
            ctx.permission_repo = repo;
        }
        if let Some(repo) = self.program_repo {
            ctx.program_repo = repo;
        }
        if let Some(repo) = self.schedule_repo {
            ctx.schedule_repo = repo;
        }
        if let Some(repo) = self.home_repo {
            ctx.home_repo = repo;
        }
        if let Some(repo) = self.media_partner_repo {
            ctx.media_partner_repo = repo;
        }
        if let Some(repo) = self.page_repo {
            ctx.page_repo = repo;
        }
        if let Some(repo) = self.dashboard_repo {
            ctx.dashboard_repo = repo;
        }
        Ok(ctx)
    }
}
