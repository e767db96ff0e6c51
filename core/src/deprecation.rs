//! # Deprecation Markers
//!
//! The deprecation metadata attached to source constructs, and its rendering
//! into a single `@deprecated` documentation line.
//!
//! Producers of the model are built against different source platforms, and
//! not every platform exposes the same marker fields. Each optional field is
//! therefore probed leniently while decoding: a missing key, a `null`, or a
//! value of the wrong shape all read as "absent".

use serde::{Deserialize, Deserializer, Serialize};

/// The documentation tag that introduces a deprecation notice.
pub const DEPRECATED_TAG: &str = "@deprecated";

/// Deprecation metadata of a source construct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationMarker {
    /// The version in which the construct was deprecated.
    #[serde(
        default,
        deserialize_with = "probe_since",
        skip_serializing_if = "Option::is_none"
    )]
    pub since: Option<String>,
    /// Whether the construct is scheduled for removal.
    #[serde(
        default,
        deserialize_with = "probe_field",
        skip_serializing_if = "Option::is_none"
    )]
    pub for_removal: Option<bool>,
}

impl DeprecationMarker {
    /// Creates a marker that exposes no optional fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `since` version.
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Sets the `forRemoval` flag.
    pub fn with_for_removal(mut self, for_removal: bool) -> Self {
        self.for_removal = Some(for_removal);
        self
    }

    /// The `since` version, if present and non-empty.
    pub fn since(&self) -> Option<&str> {
        self.since.as_deref().filter(|s| !s.is_empty())
    }

    /// Whether removal is planned. Absent reads as `false`.
    pub fn for_removal(&self) -> bool {
        self.for_removal.unwrap_or(false)
    }

    /// Renders the marker as one documentation line.
    ///
    /// The bare tag is emitted when no detail is available, otherwise the tag is
    /// followed by `since: <v>` and `forRemoval: true`, joined with `"; "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use declgen_core::DeprecationMarker;
    ///
    /// let marker = DeprecationMarker::new().with_since("1.2").with_for_removal(true);
    /// assert_eq!(marker.to_comment(), "@deprecated since: 1.2; forRemoval: true");
    /// ```
    pub fn to_comment(&self) -> String {
        let mut details = Vec::new();
        if let Some(since) = self.since() {
            details.push(format!("since: {}", since));
        }
        if self.for_removal() {
            details.push("forRemoval: true".to_string());
        }

        if details.is_empty() {
            DEPRECATED_TAG.to_string()
        } else {
            format!("{} {}", DEPRECATED_TAG, details.join("; "))
        }
    }
}

/// A marker field as seen on the wire: either the expected shape or anything else.
#[derive(Deserialize)]
#[serde(untagged)]
enum Probe<T> {
    Present(T),
    Unsupported(serde::de::IgnoredAny),
}

/// Decodes an optional marker field, reading unsupported shapes as absent.
fn probe_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Probe<T>>::deserialize(deserializer)? {
        Some(Probe::Present(value)) => Ok(Some(value)),
        Some(Probe::Unsupported(_)) => {
            tracing::debug!("ignoring deprecation marker field of unsupported shape");
            Ok(None)
        }
        None => Ok(None),
    }
}

/// Version scalars: YAML reads an unquoted `since: 1.2` as a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Since {
    Text(String),
    Number(serde_json::Number),
}

/// Decodes `since`, keeping numeric versions as their textual form.
fn probe_since<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(probe_field::<D, Since>(deserializer)?.map(|since| match since {
        Since::Text(text) => text,
        Since::Number(number) => number.to_string(),
    }))
}

/// Wire forms of the marker slot on a source element.
#[derive(Deserialize)]
#[serde(untagged)]
enum MarkerRepr {
    Flag(bool),
    Marker(DeprecationMarker),
}

/// Decodes the marker slot of a source element.
///
/// `true` is a marker without details, `false` and `null` mean "not deprecated".
pub(crate) fn deserialize_marker<'de, D>(
    deserializer: D,
) -> Result<Option<DeprecationMarker>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<MarkerRepr>::deserialize(deserializer)? {
        Some(MarkerRepr::Flag(true)) => Some(DeprecationMarker::new()),
        Some(MarkerRepr::Flag(false)) | None => None,
        Some(MarkerRepr::Marker(marker)) => Some(marker),
    })
}
