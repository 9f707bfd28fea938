//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Random session token generation
//! - Password hashing (Argon2id)
//! - Bearer token extraction from requests

pub mod client;
pub mod crypto;
pub mod password;
