//! # Deprecation Enricher
//!
//! Rewrites a model so that every node derived from a deprecated source construct
//! documents it with a single `@deprecated` line.
//!
//! Each node is rebuilt rather than mutated in place: children first, then the
//! node's own comments. Nodes that already carry a `@deprecated` line are left
//! alone, which makes the pass idempotent.

use crate::deprecation::DEPRECATED_TAG;
use crate::model::{Bean, EnumMember, EnumModel, Model, Property, RestApplication, RestMethod};
use crate::origin::{OriginMember, SourceElement};
use crate::pass::ModelPass;

/// Appends deprecation notices derived from origin markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeprecationEnricher;

impl DeprecationEnricher {
    /// Creates the enricher.
    pub fn new() -> Self {
        Self
    }

    /// Enriches every bean, enum and REST application, preserving order.
    pub fn enrich_model(&self, model: Model) -> Model {
        let beans = map_list(model.beans, |bean| self.enrich_bean(bean));
        let enums = map_list(model.enums, |enum_model| self.enrich_enum(enum_model));
        let rest_applications = map_list(model.rest_applications, |app| {
            self.enrich_rest_application(app)
        });
        Model::new(beans, enums, rest_applications)
    }

    /// Enriches the properties of a bean, then the bean itself.
    pub fn enrich_bean(&self, mut bean: Bean) -> Bean {
        let properties = map_list(std::mem::take(&mut bean.properties), |property| {
            self.enrich_property(property)
        });
        let comments = add_deprecation(
            std::mem::take(&mut bean.comments),
            bean.origin.as_deref(),
        );
        bean.with_properties(properties).with_comments(comments)
    }

    /// Enriches a property from the method or field it was derived from.
    ///
    /// Synthetic properties are returned unchanged.
    pub fn enrich_property(&self, mut property: Property) -> Property {
        let comments = match &property.origin {
            OriginMember::Method(method) => {
                add_deprecation(std::mem::take(&mut property.comments), Some(method.as_ref()))
            }
            OriginMember::Field(field) => {
                add_deprecation(std::mem::take(&mut property.comments), Some(field.as_ref()))
            }
            OriginMember::None => return property,
        };
        property.with_comments(comments)
    }

    /// Enriches the members of an enum, then the enum itself.
    pub fn enrich_enum(&self, mut enum_model: EnumModel) -> EnumModel {
        let members = map_list(std::mem::take(&mut enum_model.members), |member| {
            self.enrich_enum_member(member)
        });
        let comments = add_deprecation(
            std::mem::take(&mut enum_model.comments),
            enum_model.origin.as_deref(),
        );
        enum_model.with_members(members).with_comments(comments)
    }

    /// Enriches an enum member from its source field.
    pub fn enrich_enum_member(&self, mut member: EnumMember) -> EnumMember {
        let comments = add_deprecation(
            std::mem::take(&mut member.comments),
            member.origin.as_deref(),
        );
        member.with_comments(comments)
    }

    /// Enriches the methods of a REST application.
    pub fn enrich_rest_application(&self, mut app: RestApplication) -> RestApplication {
        let methods = map_list(std::mem::take(&mut app.methods), |method| {
            self.enrich_rest_method(method)
        });
        app.with_methods(methods)
    }

    /// Enriches a REST method from its source method.
    pub fn enrich_rest_method(&self, mut method: RestMethod) -> RestMethod {
        let comments = add_deprecation(
            std::mem::take(&mut method.comments),
            method.origin.as_deref(),
        );
        method.with_comments(comments)
    }
}

impl ModelPass for DeprecationEnricher {
    fn name(&self) -> &'static str {
        "deprecation"
    }

    fn apply(&self, model: Model) -> Model {
        self.enrich_model(model)
    }
}

/// Appends the deprecation notice of `origin` to `comments` when one is due.
///
/// The comments are returned untouched when there is no origin, the origin is not
/// deprecated, or a line already starts with `@deprecated`.
pub fn add_deprecation(
    mut comments: Vec<String>,
    origin: Option<&SourceElement>,
) -> Vec<String> {
    let Some(origin) = origin else {
        return comments;
    };
    let Some(marker) = origin.deprecation() else {
        return comments;
    };
    if contains_deprecated_tag(&comments) {
        tracing::trace!(origin = %origin.name, "already documented as deprecated");
        return comments;
    }

    let notice = marker.to_comment();
    tracing::debug!(origin = %origin.name, %notice, "appending deprecation notice");
    comments.push(notice);
    comments
}

/// Whether any comment line starts with the `@deprecated` tag.
pub fn contains_deprecated_tag(comments: &[String]) -> bool {
    comments
        .iter()
        .any(|comment| comment.starts_with(DEPRECATED_TAG))
}

/// Counts the nodes of `model` whose comments carry a `@deprecated` line.
pub fn count_deprecated_nodes(model: &Model) -> usize {
    let tagged = |comments: &[String]| usize::from(contains_deprecated_tag(comments));

    let beans: usize = model
        .beans
        .iter()
        .map(|bean| {
            tagged(&bean.comments)
                + bean
                    .properties
                    .iter()
                    .map(|p| tagged(&p.comments))
                    .sum::<usize>()
        })
        .sum();
    let enums: usize = model
        .enums
        .iter()
        .map(|e| {
            tagged(&e.comments) + e.members.iter().map(|m| tagged(&m.comments)).sum::<usize>()
        })
        .sum();
    let methods: usize = model
        .rest_applications
        .iter()
        .flat_map(|app| &app.methods)
        .map(|m| tagged(&m.comments))
        .sum();

    beans + enums + methods
}

fn map_list<T, R>(list: Vec<T>, mapper: impl FnMut(T) -> R) -> Vec<R> {
    list.into_iter().map(mapper).collect()
}
