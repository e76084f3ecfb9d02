//! C++ declaration model for SDK header generation.
//!
//! An in-memory model of C++-style type declarations (structs, classes,
//! enums, member fields, functions, include blocks) that a discovery stage
//! populates incrementally and then renders into header text. The model does
//! no name resolution and no validation; it assembles exactly the text it is
//! given.
//!
//! Entities are mutable builders with a single render entry point each.
//! Struct, Class and Enum rendering accumulates into internal buffers, so a
//! second render of the same instance duplicates its body content; render
//! each entity once.

pub mod ast;
mod predefined;
mod sdk_file;

pub use ast::{Class, Enum, Function, Include, Includes, Keyword, Member, Parameter, Struct};
pub use predefined::{PredefinedEntry, PredefinedError, PredefinedFunction, PredefinedFunctions};
pub use sdk_file::{PreviewFile, SdkFile, TypeBlock};
