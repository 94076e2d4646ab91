//! # cms-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, DashboardService, GroupService, HomeService, MediaPartnerService, PageService,
    PermissionService, ProgramService, ScheduleService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, Session, UploadService, UserService,
};
