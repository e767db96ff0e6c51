//! # Data Models
//!
//! The semantic model of an API surface: beans, enums and REST applications.
//!
//! Nodes are immutable values. Passes rebuild them with the `with_*` methods,
//! which consume the node and return it with one field replaced.

use crate::origin::{OriginMember, OriginRef};
use serde::{Deserialize, Deserializer, Serialize};

/// The root of the model: every declaration the generator will emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Data classes.
    #[serde(default)]
    pub beans: Vec<Bean>,
    /// Enumerations.
    #[serde(default)]
    pub enums: Vec<EnumModel>,
    /// REST endpoints grouped by application.
    #[serde(default)]
    pub rest_applications: Vec<RestApplication>,
}

impl Model {
    /// Creates a model from its three top-level collections.
    pub fn new(
        beans: Vec<Bean>,
        enums: Vec<EnumModel>,
        rest_applications: Vec<RestApplication>,
    ) -> Self {
        Self {
            beans,
            enums,
            rest_applications,
        }
    }
}

/// A data class with an ordered list of properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bean {
    /// The declared name.
    pub name: String,
    /// The super type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Implemented interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    /// The properties, in declaration order.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Documentation lines.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,
    /// The source type this bean was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginRef>,
}

impl Bean {
    /// Creates a bean with no properties, comments or origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            interfaces: Vec::new(),
            properties: Vec::new(),
            comments: Vec::new(),
            origin: None,
        }
    }

    /// Replaces the properties.
    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }

    /// Replaces the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Replaces the origin.
    pub fn with_origin(mut self, origin: OriginRef) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// A property of a bean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// The property name as emitted.
    pub name: String,
    /// The declared type, as rendered by the parser.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the property may be omitted.
    #[serde(default)]
    pub optional: bool,
    /// Documentation lines.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,
    /// The source member this property was derived from.
    #[serde(
        default,
        serialize_with = "serde_yaml::with::singleton_map::serialize",
        deserialize_with = "deserialize_origin_member",
        skip_serializing_if = "OriginMember::is_none"
    )]
    pub origin: OriginMember,
}

impl Property {
    /// Creates a synthetic property with the given name and type.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            comments: Vec::new(),
            origin: OriginMember::None,
        }
    }

    /// Replaces the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Replaces the origin member.
    pub fn with_origin(mut self, origin: OriginMember) -> Self {
        self.origin = origin;
        self
    }
}

/// How enum values are represented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnumKind {
    /// String-valued members.
    #[default]
    String,
    /// Number-valued members.
    Number,
}

/// An enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumModel {
    /// The declared name.
    pub name: String,
    /// The value representation.
    #[serde(default)]
    pub kind: EnumKind,
    /// The members, in declaration order.
    #[serde(default)]
    pub members: Vec<EnumMember>,
    /// Documentation lines.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,
    /// The source type this enum was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginRef>,
}

impl EnumModel {
    /// Creates a string enum with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EnumKind::String,
            members: Vec::new(),
            comments: Vec::new(),
            origin: None,
        }
    }

    /// Replaces the members.
    pub fn with_members(mut self, members: Vec<EnumMember>) -> Self {
        self.members = members;
        self
    }

    /// Replaces the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Replaces the origin.
    pub fn with_origin(mut self, origin: OriginRef) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// The value of an enum member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// A string literal.
    String(String),
    /// A numeric literal.
    Number(serde_json::Number),
}

/// A member of an enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    /// The member name as emitted.
    pub property_name: String,
    /// The member value.
    pub value: EnumValue,
    /// Documentation lines.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,
    /// The source field (enum constant) this member was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginRef>,
}

impl EnumMember {
    /// Creates a member with no comments or origin.
    pub fn new(property_name: impl Into<String>, value: EnumValue) -> Self {
        Self {
            property_name: property_name.into(),
            value,
            comments: Vec::new(),
            origin: None,
        }
    }

    /// Replaces the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Replaces the origin.
    pub fn with_origin(mut self, origin: OriginRef) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// The framework a REST application was discovered from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RestApplicationKind {
    /// JAX-RS resources.
    #[default]
    JaxRs,
    /// Spring controllers.
    Spring,
}

/// A group of REST methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestApplication {
    /// The framework.
    #[serde(default)]
    pub kind: RestApplicationKind,
    /// The base path all methods are mounted under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_path: Option<String>,
    /// The application name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    /// The methods, in discovery order.
    #[serde(default)]
    pub methods: Vec<RestMethod>,
}

impl RestApplication {
    /// Creates an application with no methods.
    pub fn new(kind: RestApplicationKind) -> Self {
        Self {
            kind,
            application_path: None,
            application_name: None,
            methods: Vec::new(),
        }
    }

    /// Replaces the methods.
    pub fn with_methods(mut self, methods: Vec<RestMethod>) -> Self {
        self.methods = methods;
        self
    }
}

/// A named parameter of a REST method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestParam {
    /// The parameter name.
    pub name: String,
    /// The declared type.
    #[serde(rename = "type")]
    pub type_name: String,
}

/// A single REST endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestMethod {
    /// The resource class declaring the method.
    pub origin_class: String,
    /// The method name.
    pub name: String,
    /// The response type.
    pub return_type: String,
    /// HTTP verb.
    pub http_method: String,
    /// Path template relative to the application.
    pub path: String,
    /// Parameters bound from the path.
    #[serde(default)]
    pub path_params: Vec<RestParam>,
    /// Parameters bound from the query string.
    #[serde(default)]
    pub query_params: Vec<RestParam>,
    /// The request body parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_param: Option<RestParam>,
    /// Documentation lines.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub comments: Vec<String>,
    /// The source method this endpoint was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginRef>,
}

impl RestMethod {
    /// Creates an endpoint with no parameters, comments or origin.
    pub fn new(
        origin_class: impl Into<String>,
        name: impl Into<String>,
        http_method: impl Into<String>,
        path: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            origin_class: origin_class.into(),
            name: name.into(),
            return_type: return_type.into(),
            http_method: http_method.into(),
            path: path.into(),
            path_params: Vec::new(),
            query_params: Vec::new(),
            entity_param: None,
            comments: Vec::new(),
            origin: None,
        }
    }

    /// Replaces the comments.
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Replaces the origin.
    pub fn with_origin(mut self, origin: OriginRef) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// Reads a comment list, treating `null` as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads a property origin in singleton-map form, treating `null` as synthetic.
fn deserialize_origin_member<'de, D>(deserializer: D) -> Result<OriginMember, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct SingletonMap(#[serde(with = "serde_yaml::with::singleton_map")] OriginMember);

    Ok(Option::<SingletonMap>::deserialize(deserializer)?
        .map(|wrapped| wrapped.0)
        .unwrap_or_default())
}
