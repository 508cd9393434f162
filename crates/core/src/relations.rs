//! Entity relationship graph.
//!
//! Every relationship between two entity kinds appears twice in [`RELATIONS`],
//! once from each side. The table drives two things in `utalii-db`:
//!
//! - cascaded deletes, through [`EntityKind::cascades`] and [`Link`];
//! - the JSON shape of serialized entities, through [`expands`].
//!
//! Serialization nests every related entity, parents included, except along
//! the inverse edges listed in [`EXCLUSIONS`]. An edge whose target kind is
//! already on the current path is never expanded, which bounds every tree.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    User,
    Service,
    Park,
    Hotel,
    Beach,
    Favorite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Serialized as an object, or `null` when the link is empty.
    One,
    /// Serialized as an array.
    Many,
}

/// How an edge is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// A foreign-key column on the child table. For a [`Cardinality::One`]
    /// edge the child is `from`, for a [`Cardinality::Many`] edge it is `to`.
    ForeignKey(&'static str),
    /// A pairing table; `column` holds the id of the `from` side.
    Association {
        table: &'static str,
        column: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub from: EntityKind,
    /// Field name of the edge on `from`.
    pub name: &'static str,
    pub to: EntityKind,
    /// Field name of the inverse edge on `to`.
    pub inverse: &'static str,
    pub cardinality: Cardinality,
    pub link: Link,
    /// Deleting `from` deletes every `to` reachable over this edge.
    pub cascade: bool,
}

const fn one(
    from: EntityKind,
    name: &'static str,
    to: EntityKind,
    inverse: &'static str,
    column: &'static str,
) -> Relation {
    Relation {
        from,
        name,
        to,
        inverse,
        cardinality: Cardinality::One,
        link: Link::ForeignKey(column),
        cascade: false,
    }
}

const fn owns(
    from: EntityKind,
    name: &'static str,
    to: EntityKind,
    inverse: &'static str,
    column: &'static str,
) -> Relation {
    Relation {
        from,
        name,
        to,
        inverse,
        cardinality: Cardinality::Many,
        link: Link::ForeignKey(column),
        cascade: true,
    }
}

const fn paired(
    from: EntityKind,
    name: &'static str,
    to: EntityKind,
    inverse: &'static str,
    column: &'static str,
) -> Relation {
    Relation {
        from,
        name,
        to,
        inverse,
        cardinality: Cardinality::Many,
        link: Link::Association {
            table: "user_favorites",
            column,
        },
        cascade: false,
    }
}

use EntityKind::{Beach, Favorite, Hotel, Park, Service, User};

pub const RELATIONS: &[Relation] = &[
    owns(User, "services", Service, "user", "user_id"),
    owns(User, "hotels", Hotel, "user", "user_id"),
    // Deleting a user removes the pairing rows, never the favorites themselves.
    paired(User, "favorites", Favorite, "users", "user_id"),
    one(Service, "user", User, "services", "user_id"),
    one(Hotel, "user", User, "hotels", "user_id"),
    one(Hotel, "favorite", Favorite, "hotels", "favorite_id"),
    one(Park, "favorite", Favorite, "parks", "favorite_id"),
    one(Beach, "favorite", Favorite, "beaches", "favorite_id"),
    owns(Favorite, "parks", Park, "favorite", "favorite_id"),
    owns(Favorite, "hotels", Hotel, "favorite", "favorite_id"),
    owns(Favorite, "beaches", Beach, "favorite", "favorite_id"),
    paired(Favorite, "users", User, "favorites", "favorite_id"),
];

/// An edge left out of a nested entity.
///
/// When an entity of kind `on` is reached over its edge `via`, its edge
/// `edge` is not serialized. `via` names an edge on `on` itself, so
/// `(Service, "user", "services")` reads as "a service's user omits its
/// services".
#[derive(Debug, Clone, Copy)]
pub struct Exclusion {
    pub on: EntityKind,
    pub via: &'static str,
    pub edge: &'static str,
}

const fn exclude(on: EntityKind, via: &'static str, edge: &'static str) -> Exclusion {
    Exclusion { on, via, edge }
}

pub const EXCLUSIONS: &[Exclusion] = &[
    exclude(User, "services", "user"),
    exclude(User, "hotels", "user"),
    exclude(User, "favorites", "users"),
    exclude(User, "favorites", "parks"),
    exclude(User, "favorites", "hotels"),
    exclude(User, "favorites", "beaches"),
    exclude(Service, "user", "services"),
    exclude(Park, "favorite", "parks"),
    exclude(Hotel, "user", "hotels"),
    exclude(Hotel, "favorite", "hotels"),
    exclude(Beach, "favorite", "beaches"),
    exclude(Favorite, "users", "favorites"),
    exclude(Favorite, "parks", "favorite"),
    exclude(Favorite, "hotels", "favorite"),
    exclude(Favorite, "beaches", "favorite"),
];

/// One entity on a serialization path, with the edge it was reached by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: EntityKind,
    /// `None` for the root.
    pub via: Option<&'static Relation>,
}

impl Step {
    pub fn root(kind: EntityKind) -> Self {
        Self { kind, via: None }
    }

    pub fn over(rel: &'static Relation) -> Self {
        Self {
            kind: rel.to,
            via: Some(rel),
        }
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.name == other.name
    }
}

impl Eq for Relation {}

/// Whether `rel`, leaving the last entity of `path`, is serialized.
///
/// An edge is dropped when its target kind already appears on `path`, or when
/// the parent of the current entity excludes it for the edge the current
/// entity was reached by.
pub fn expands(path: &[Step], rel: &Relation) -> bool {
    if path.iter().any(|step| step.kind == rel.to) {
        return false;
    }
    let [.., parent, current] = path else {
        return true;
    };
    let Some(arrival) = current.via else {
        return true;
    };
    !EXCLUSIONS
        .iter()
        .any(|ex| ex.on == parent.kind && ex.via == arrival.name && ex.edge == rel.name)
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [User, Service, Park, Hotel, Beach, Favorite];

    pub fn table(self) -> &'static str {
        match self {
            User => "users",
            Service => "services",
            Park => "parks",
            Hotel => "hotels",
            Beach => "beaches",
            Favorite => "favorites",
        }
    }

    /// Every edge leaving this entity kind, in declaration order.
    pub fn relations(self) -> impl Iterator<Item = &'static Relation> {
        RELATIONS.iter().filter(move |r| r.from == self)
    }

    /// Edges whose targets are deleted along with a row of this kind.
    pub fn cascades(self) -> impl Iterator<Item = &'static Relation> {
        self.relations().filter(|r| r.cascade)
    }

    /// Pairing-table edges whose rows are deleted along with a row of this kind.
    pub fn associations(self) -> impl Iterator<Item = &'static Relation> {
        self.relations()
            .filter(|r| matches!(r.link, Link::Association { .. }))
    }
}

impl Relation {
    /// The matching edge declared on the other side of this relationship.
    pub fn inverse_relation(&self) -> Option<&'static Relation> {
        RELATIONS
            .iter()
            .find(|r| r.from == self.to && r.name == self.inverse && r.to == self.from)
    }
}
