//! Thali - a static restaurant catalog with query helpers.
//!
//! This crate provides both a library for querying an immutable, in-memory
//! catalog of restaurants and a small CLI for exercising it.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod catalog;
pub mod domain;
pub mod error;
pub mod query;

// Public CLI modules (needed by binary)
pub mod app;
pub mod cli;
pub mod output;

// Internal modules (not exposed as public API)
pub(crate) mod config;
