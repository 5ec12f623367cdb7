//! Attribute type registry and mapping definitions for the fomtr codec.
//!
//! This crate defines what the translator knows statically:
//! - The closed [`AttributeType`] registry of federation wire types with
//!   their stable names, numeric ids, and encoded lengths
//! - The [`AppDataType`] model of application-side parameter types
//! - [`AttributeMapping`] / [`ParameterDefinition`] configuration loaded
//!   once per federation session, including per-parameter enumeration
//!   value tables with default-value fallback
//!
//! # Design Principles
//!
//! - **Closed registry** - Wire types are an enum matched exhaustively;
//!   lengths are constants, never computed at runtime.
//! - **Configuration is data** - Mapping types are plain values the
//!   surrounding system loads (optionally via `serde`) and hands in by
//!   reference.
//! - **Lookups degrade, never fail** - Enumeration misses fall back to the
//!   declared default and are logged, not raised.

mod app_type;
mod attribute_type;
mod mapping;

pub use app_type::AppDataType;
pub use attribute_type::AttributeType;
pub use mapping::{AttributeMapping, EnumerationEntry, ParameterDefinition};
