//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Environment configuration lookup (with variable-name aliases)
//! - Cookie management
//! - Request origin detection behind reverse proxies

pub mod client;
pub mod config;
pub mod cookie;
