//! Presentation Layer
//!
//! HTTP handlers, views, DTOs and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod views;

pub use handlers::AuthAppState;
pub use router::{auth_router, auth_router_generic};
