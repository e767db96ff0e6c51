//! # Origin References
//!
//! Links from model nodes back to the source constructs they were derived from.
//! The pass only reads them to look up deprecation metadata.

use crate::deprecation::{deserialize_marker, DeprecationMarker};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Descriptor of a source construct (a type, a method or a field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceElement {
    /// Qualified name of the construct (e.g. `com.acme.User#getName`).
    pub name: String,
    /// Deprecation marker, if the construct carries one.
    #[serde(
        default,
        deserialize_with = "deserialize_marker",
        skip_serializing_if = "Option::is_none"
    )]
    pub deprecated: Option<DeprecationMarker>,
}

impl SourceElement {
    /// Creates a descriptor without a deprecation marker.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deprecated: None,
        }
    }

    /// Attaches a deprecation marker.
    pub fn with_deprecation(mut self, marker: DeprecationMarker) -> Self {
        self.deprecated = Some(marker);
        self
    }

    /// Returns the deprecation marker, if any.
    pub fn deprecation(&self) -> Option<&DeprecationMarker> {
        self.deprecated.as_ref()
    }

    /// Wraps the descriptor in a shareable reference.
    pub fn into_ref(self) -> OriginRef {
        Arc::new(self)
    }
}

/// Shared, read-only handle to a source construct.
pub type OriginRef = Arc<SourceElement>;

/// The source member a bean property was derived from.
///
/// Resolved once when the model is built, so enrichment never has to probe the
/// member's shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OriginMember {
    /// A getter-like method.
    Method(OriginRef),
    /// A field.
    Field(OriginRef),
    /// A synthetic property with no source member.
    #[default]
    None,
}

impl OriginMember {
    /// Returns the underlying source element for method and field members.
    pub fn element(&self) -> Option<&OriginRef> {
        match self {
            OriginMember::Method(element) | OriginMember::Field(element) => Some(element),
            OriginMember::None => None,
        }
    }

    /// Whether the property is synthetic.
    pub fn is_none(&self) -> bool {
        matches!(self, OriginMember::None)
    }
}
