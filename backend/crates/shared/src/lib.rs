//! Shared Kernel - cross-crate error vocabulary
//!
//! Every crate in the workspace reports failures through [`error::app_error::AppError`],
//! classified by [`error::kind::ErrorKind`]. The `axum` feature adds the HTTP rendering.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
