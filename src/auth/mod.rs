//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Google ID token verification (`POST /api/auth/verify`)
//! - Cookie-backed session management
//! - The auth gate applied to protected routes

pub mod gate;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod session;


pub use models::UserInfo;
pub use routes::auth_routes;
pub use session::SessionStore;
