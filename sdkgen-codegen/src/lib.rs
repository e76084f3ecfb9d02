//! Shared text-building primitives for SDK header generation.
//!
//! This crate provides the language-agnostic pieces used by the declaration
//! model crates: [`CodeBuilder`] for emitting properly indented lines and
//! [`Indent`] for configuring the indentation unit.

pub mod builder;

pub use builder::{CodeBuilder, Indent};
