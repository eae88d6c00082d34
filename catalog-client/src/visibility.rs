//! Permission-visibility engine
//!
//! Each non-sentinel scope gates one affordance. Elements are tagged with
//! the scope string as a marker class.

use std::collections::BTreeSet;

use shared::{PermissionSet, Scope};

use crate::view::document::Document;

/// UI affordance gated by a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Affordance {
    ReadMovies,
    ReadActors,
    CreateMovies,
    CreateActors,
    UpdateMovies,
    UpdateActors,
    DeleteMovies,
    DeleteActors,
}

impl Affordance {
    pub const ALL: [Affordance; 8] = [
        Affordance::ReadMovies,
        Affordance::ReadActors,
        Affordance::CreateMovies,
        Affordance::CreateActors,
        Affordance::UpdateMovies,
        Affordance::UpdateActors,
        Affordance::DeleteMovies,
        Affordance::DeleteActors,
    ];

    /// `None` for the `no:perms` sentinel
    pub fn for_scope(scope: Scope) -> Option<Self> {
        match scope {
            Scope::ReadMovies => Some(Self::ReadMovies),
            Scope::ReadActors => Some(Self::ReadActors),
            Scope::CreateMovies => Some(Self::CreateMovies),
            Scope::CreateActors => Some(Self::CreateActors),
            Scope::UpdateMovies => Some(Self::UpdateMovies),
            Scope::UpdateActors => Some(Self::UpdateActors),
            Scope::DeleteMovies => Some(Self::DeleteMovies),
            Scope::DeleteActors => Some(Self::DeleteActors),
            Scope::NoPerms => None,
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            Self::ReadMovies => Scope::ReadMovies,
            Self::ReadActors => Scope::ReadActors,
            Self::CreateMovies => Scope::CreateMovies,
            Self::CreateActors => Scope::CreateActors,
            Self::UpdateMovies => Scope::UpdateMovies,
            Self::UpdateActors => Scope::UpdateActors,
            Self::DeleteMovies => Scope::DeleteMovies,
            Self::DeleteActors => Scope::DeleteActors,
        }
    }

    /// Marker class on gated elements
    pub fn class(&self) -> &'static str {
        self.scope().as_str()
    }
}

/// Affordances granted by `permissions`
pub fn compute_visibility(permissions: &PermissionSet) -> BTreeSet<Affordance> {
    permissions
        .iter()
        .filter_map(Affordance::for_scope)
        .collect()
}

/// Recompute visibility of every gated element.
///
/// Hide pass first, then show pass: an element tagged with several
/// classes is visible when any of them is granted.
pub fn apply_visibility(doc: &mut Document, permissions: &PermissionSet) -> BTreeSet<Affordance> {
    let visible = compute_visibility(permissions);

    for affordance in Affordance::ALL.iter().filter(|a| !visible.contains(a)) {
        doc.set_hidden_by_class(affordance.class(), true);
    }
    for affordance in &visible {
        doc.set_hidden_by_class(affordance.class(), false);
    }

    tracing::debug!(granted = visible.len(), "Applied permission visibility");
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::document::{self, Element};

    #[test]
    fn test_sentinel_has_no_affordance() {
        assert_eq!(Affordance::for_scope(Scope::NoPerms), None);
        for affordance in Affordance::ALL {
            assert_eq!(Affordance::for_scope(affordance.scope()), Some(affordance));
        }
    }

    #[test]
    fn test_no_perms_hides_everything() {
        let mut doc = Document::standard();
        for affordance in Affordance::ALL {
            doc.set_hidden_by_class(affordance.class(), false);
        }
        let visible = apply_visibility(&mut doc, &PermissionSet::none());
        assert!(visible.is_empty());
        assert!(!doc.is_visible(document::NAV_MOVIES));
        assert!(!doc.is_visible(document::CREATE_ACTOR));
        assert!(!doc.is_visible(document::DELETE_MOVIE));
    }

    #[test]
    fn test_create_visible_delete_hidden() {
        let mut doc = Document::standard();
        let perms = PermissionSet::from_claims(["read:movies", "create:movies"]);
        apply_visibility(&mut doc, &perms);
        assert!(doc.is_visible(document::CREATE_MOVIE));
        assert!(doc.is_visible(document::NAV_MOVIES));
        assert!(!doc.is_visible(document::DELETE_MOVIE));
        assert!(!doc.is_visible(document::NAV_ACTORS));
    }

    #[test]
    fn test_show_wins_across_classes() {
        let mut doc = Document::new();
        doc.insert(
            Element::new("edit-or-delete")
                .with_class("update:movies")
                .with_class("delete:movies"),
        );
        apply_visibility(&mut doc, &PermissionSet::from_claims(["delete:movies"]));
        assert!(doc.is_visible("edit-or-delete"));
    }

    #[test]
    fn test_idempotent() {
        let perms = PermissionSet::from_claims(["read:actors", "update:actors"]);
        let mut once = Document::standard();
        apply_visibility(&mut once, &perms);
        let mut twice = once.clone();
        apply_visibility(&mut twice, &perms);
        assert_eq!(once, twice);
    }
}
