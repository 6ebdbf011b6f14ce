//! # Auth Module
//!
//! Password accounts and bearer tokens.
//!
//! ## Submodules
//! - `password`: bcrypt hashing and verification
//! - `token`: Issuing and verifying signed bearer tokens
//! - `types`: Request bodies for the API
//! - `registration`: Creating an account
//! - `authentication`: Logging in
//!
//! ## Flow Overview
//!
//! ### Registration
//! 1. Client posts name, email, password and confirmation → `registration::register()`
//! 2. Server validates the fields and checks the email is free
//! 3. Server hashes the password and stores the user
//!
//! ### Authentication
//! 1. Client posts email and password → `authentication::login()`
//! 2. Server looks the user up by email and verifies the password
//! 3. Server issues a token embedding the user id
//! 4. Client sends `Authorization: Bearer <token>` on protected routes,
//!    checked by [`crate::middleware::auth::require_token`]

pub mod authentication;
pub mod password;
pub mod registration;
pub mod token;
pub mod types;
