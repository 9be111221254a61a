//! Core business logic for MyFinances.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Persistence is reached only through the store traits the db crate implements.
//!
//! # Modules
//!
//! - `entry` - Financial entries: validation, lifecycle, search and balance
//! - `user` - User registration and authentication
//! - `auth` - Password hashing

pub mod auth;
pub mod entry;
pub mod user;
