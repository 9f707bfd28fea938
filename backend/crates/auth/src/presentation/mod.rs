//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::{AuthAppState, respond};
pub use middleware::{RequestToken, parse_request_token};
pub use router::{auth_router, auth_router_generic};
