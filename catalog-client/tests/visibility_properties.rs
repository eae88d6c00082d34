// catalog-client/tests/visibility_properties.rs
// Visibility engine over every subset of the permission vocabulary

use catalog_client::view::{Document, Element};
use catalog_client::{Affordance, PermissionSet, Scope, apply_visibility, compute_visibility};

/// One probe element per affordance plus one tagged with every class
fn probe_document() -> Document {
    let mut doc = Document::new();
    let mut all = Element::new("all");
    for affordance in Affordance::ALL {
        doc.insert(Element::new(affordance.class()).with_class(affordance.class()));
        all = all.with_class(affordance.class());
    }
    doc.insert(all);
    doc.insert(Element::new("untagged"));
    doc
}

fn subsets() -> impl Iterator<Item = Vec<Scope>> {
    (0u32..(1 << Affordance::ALL.len())).map(|mask| {
        Affordance::ALL
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, affordance)| affordance.scope())
            .collect()
    })
}

#[test]
fn test_granted_classes_visible_others_hidden() {
    for scopes in subsets() {
        let perms = PermissionSet::from_scopes(scopes.iter().copied());
        let mut doc = probe_document();
        let visible = apply_visibility(&mut doc, &perms);

        for affordance in Affordance::ALL {
            let granted = scopes.contains(&affordance.scope());
            assert_eq!(visible.contains(&affordance), granted);
            assert_eq!(doc.is_visible(affordance.class()), granted, "{scopes:?}");
        }
        assert_eq!(doc.is_visible("all"), !scopes.is_empty(), "{scopes:?}");
        assert!(doc.is_visible("untagged"));
    }
}

#[test]
fn test_apply_is_idempotent() {
    for scopes in subsets() {
        let perms = PermissionSet::from_scopes(scopes);
        let mut once = probe_document();
        apply_visibility(&mut once, &perms);
        let mut twice = once.clone();
        apply_visibility(&mut twice, &perms);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_sentinel_grants_nothing() {
    let perms = PermissionSet::from_claims(["no:perms"]);
    assert!(compute_visibility(&perms).is_empty());

    let mut doc = probe_document();
    for affordance in Affordance::ALL {
        doc.set_hidden_by_class(affordance.class(), false);
    }
    apply_visibility(&mut doc, &perms);
    assert_eq!(doc.visible_ids(), vec!["untagged"]);
}

#[test]
fn test_recompute_after_permission_change() {
    let mut doc = probe_document();
    apply_visibility(
        &mut doc,
        &PermissionSet::from_claims(["read:movies", "delete:movies"]),
    );
    assert!(doc.is_visible("delete:movies"));

    apply_visibility(&mut doc, &PermissionSet::from_claims(["read:movies"]));
    assert!(doc.is_visible("read:movies"));
    assert!(!doc.is_visible("delete:movies"));
}
