#![deny(missing_docs)]

//! # Declgen Core
//!
//! Core library for the model-to-declaration generator: the semantic model,
//! the passes that rewrite it between parsing and rendering, and its codec.

/// Shared error types.
pub mod error;

/// The semantic model of an API surface.
pub mod model;

/// Links from model nodes to source constructs.
pub mod origin;

/// Deprecation markers and notices.
pub mod deprecation;

/// The pass interface.
pub mod pass;

/// Deprecation enrichment pass.
pub mod enricher;

/// JSON / YAML model documents.
pub mod codec;

pub use codec::{parse_model, read_model, render_model, ModelFormat};
pub use deprecation::{DeprecationMarker, DEPRECATED_TAG};
pub use enricher::{
    add_deprecation, contains_deprecated_tag, count_deprecated_nodes, DeprecationEnricher,
};
pub use error::{AppError, AppResult};
pub use model::{
    Bean, EnumKind, EnumMember, EnumModel, EnumValue, Model, Property, RestApplication,
    RestApplicationKind, RestMethod, RestParam,
};
pub use origin::{OriginMember, OriginRef, SourceElement};
pub use pass::{run_passes, ModelPass};
