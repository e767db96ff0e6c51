use declgen_core::{
    parse_model, render_model, run_passes, Bean, DeprecationEnricher, DeprecationMarker, EnumMember,
    EnumModel, EnumValue, Model, ModelFormat, ModelPass, OriginMember, Property, RestApplication,
    RestApplicationKind, RestMethod, SourceElement,
};
use pretty_assertions::assert_eq;

fn origin(name: &str, marker: Option<DeprecationMarker>) -> declgen_core::OriginRef {
    let element = match marker {
        Some(marker) => SourceElement::new(name).with_deprecation(marker),
        None => SourceElement::new(name),
    };
    element.into_ref()
}

fn sample_model() -> Model {
    let bean = Bean::new("Account")
        .with_comments(vec!["An account.".into()])
        .with_origin(origin(
            "com.acme.Account",
            Some(DeprecationMarker::new().with_since("1.2")),
        ))
        .with_properties(vec![
            Property::new("id", "string").with_origin(OriginMember::Field(origin("id", None))),
            Property::new("owner", "string").with_origin(OriginMember::Method(origin(
                "getOwner",
                Some(DeprecationMarker::new().with_since("1.2").with_for_removal(true)),
            ))),
            Property::new("balance", "number")
                .with_comments(vec!["@deprecated use amount".into()])
                .with_origin(OriginMember::Field(origin(
                    "balance",
                    Some(DeprecationMarker::new()),
                ))),
            Property::new("computed", "boolean"),
        ]);

    let plain_bean = Bean::new("Address").with_origin(origin("com.acme.Address", None));

    let enum_model = EnumModel::new("Status")
        .with_origin(origin("com.acme.Status", None))
        .with_members(vec![
            EnumMember::new("ACTIVE", EnumValue::String("active".into()))
                .with_origin(origin("ACTIVE", None)),
            EnumMember::new("LEGACY", EnumValue::String("legacy".into())).with_origin(origin(
                "LEGACY",
                Some(DeprecationMarker::new().with_for_removal(true)),
            )),
        ]);

    let app = RestApplication::new(RestApplicationKind::JaxRs).with_methods(vec![
        RestMethod::new("AccountResource", "get", "GET", "/accounts/{id}", "Account")
            .with_origin(origin("AccountResource#get", None)),
        RestMethod::new("AccountResource", "old", "GET", "/accounts/old", "Account")
            .with_origin(origin("AccountResource#old", Some(DeprecationMarker::new()))),
    ]);

    Model::new(vec![bean, plain_bean], vec![enum_model], vec![app])
}

#[test]
fn test_notices_are_appended_where_markers_exist() {
    let enriched = DeprecationEnricher::new().enrich_model(sample_model());

    let account = &enriched.beans[0];
    assert_eq!(
        account.comments,
        vec!["An account.".to_string(), "@deprecated since: 1.2".to_string()]
    );
    assert!(account.properties[0].comments.is_empty());
    assert_eq!(
        account.properties[1].comments,
        vec!["@deprecated since: 1.2; forRemoval: true".to_string()]
    );
    assert_eq!(
        account.properties[2].comments,
        vec!["@deprecated use amount".to_string()]
    );
    assert!(account.properties[3].comments.is_empty());

    assert!(enriched.beans[1].comments.is_empty());

    let status = &enriched.enums[0];
    assert!(status.comments.is_empty());
    assert!(status.members[0].comments.is_empty());
    assert_eq!(
        status.members[1].comments,
        vec!["@deprecated forRemoval: true".to_string()]
    );

    let methods = &enriched.rest_applications[0].methods;
    assert!(methods[0].comments.is_empty());
    assert_eq!(methods[1].comments, vec!["@deprecated".to_string()]);
}

#[test]
fn test_enrichment_is_idempotent() {
    let enricher = DeprecationEnricher::new();
    let once = enricher.enrich_model(sample_model());
    let twice = enricher.enrich_model(once.clone());
    assert_eq!(twice, once);
}

#[test]
fn test_shape_and_non_comment_fields_are_preserved() {
    let original = sample_model();
    let mut enriched = DeprecationEnricher::new().enrich_model(original.clone());

    assert_eq!(enriched.beans.len(), original.beans.len());
    assert_eq!(
        enriched.beans[0].properties.len(),
        original.beans[0].properties.len()
    );

    // Clearing the comments on both sides must leave identical trees.
    let mut stripped = original;
    for model in [&mut stripped, &mut enriched] {
        for bean in &mut model.beans {
            bean.comments.clear();
            for property in &mut bean.properties {
                property.comments.clear();
            }
        }
        for enum_model in &mut model.enums {
            enum_model.comments.clear();
            for member in &mut enum_model.members {
                member.comments.clear();
            }
        }
        for app in &mut model.rest_applications {
            for method in &mut app.methods {
                method.comments.clear();
            }
        }
    }
    assert_eq!(enriched, stripped);
}

#[test]
fn test_model_without_markers_is_unchanged() {
    let model = Model::new(
        vec![Bean::new("Plain")
            .with_comments(vec!["Nothing to see.".into()])
            .with_origin(origin("com.acme.Plain", None))
            .with_properties(vec![Property::new("x", "number")
                .with_origin(OriginMember::Field(origin("x", None)))])],
        vec![EnumModel::new("Empty")],
        vec![RestApplication::new(RestApplicationKind::Spring)],
    );
    assert_eq!(DeprecationEnricher::new().enrich_model(model.clone()), model);
}

#[test]
fn test_enrich_document_with_platform_skew() {
    // `since` as an object and `forRemoval` as a string come from producers that
    // do not expose those fields; both read as absent.
    let json = r#"{
        "beans": [{
            "name": "Legacy",
            "origin": {"name": "com.acme.Legacy", "deprecated": {"since": {"v": 8}, "forRemoval": "maybe"}},
            "properties": [{
                "name": "code",
                "type": "string",
                "origin": {"field": {"name": "code", "deprecated": {"since": "", "forRemoval": true}}}
            }]
        }]
    }"#;

    let model = parse_model(json, ModelFormat::Json).unwrap();
    let enriched = run_passes(model, &[&DeprecationEnricher::new() as &dyn ModelPass]);

    assert_eq!(enriched.beans[0].comments, vec!["@deprecated".to_string()]);
    assert_eq!(
        enriched.beans[0].properties[0].comments,
        vec!["@deprecated forRemoval: true".to_string()]
    );

    let rendered = render_model(&enriched, ModelFormat::Json).unwrap();
    assert!(rendered.contains("@deprecated forRemoval: true"));
}

#[test]
fn test_null_comments_and_null_origin() {
    let json = r#"{
        "beans": [{
            "name": "A",
            "comments": null,
            "origin": {"name": "com.acme.A", "deprecated": true},
            "properties": [{"name": "x", "type": "string", "comments": null, "origin": null}]
        }],
        "enums": [{
            "name": "E",
            "comments": null,
            "members": [{
                "propertyName": "OLD",
                "value": "old",
                "comments": null,
                "origin": {"name": "OLD", "deprecated": {"since": "4"}}
            }]
        }]
    }"#;

    let model = parse_model(json, ModelFormat::Json).unwrap();
    let property = model.beans[0].properties[0].clone();
    let enriched = DeprecationEnricher::new().enrich_model(model);

    assert_eq!(enriched.beans[0].comments, vec!["@deprecated".to_string()]);
    assert_eq!(enriched.beans[0].properties[0], property);
    assert!(enriched.enums[0].comments.is_empty());
    assert_eq!(
        enriched.enums[0].members[0].comments,
        vec!["@deprecated since: 4".to_string()]
    );
}
