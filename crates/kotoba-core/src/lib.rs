//! # kotoba-core
//!
//! Core types and ID generation for Kotoba.
//!
//! This crate provides the foundational types shared across all Kotoba crates:
//! - Entity structs for the stored documents (word sets, user progress, words)
//! - Merge and counter enums
//! - ID prefix constants and generation helpers
//! - HTTP request and response types

pub mod entities;
pub mod enums;
pub mod ids;
pub mod requests;
pub mod responses;
