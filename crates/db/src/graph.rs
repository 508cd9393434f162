//! Nested JSON rendering of entities.
//!
//! [`EntityGraph`] holds every entity row and pairing, read in one
//! transaction, and renders any entity as a JSON object. Related entities are
//! nested along the edges of `utalii_core::relations`, as far as
//! [`expands`] allows, so a service carries its user, that user carries its
//! hotels, and so on, without ever walking back over an excluded edge.

use serde_json::{json, Map, Value};
use sqlx::SqlitePool;
use utalii_core::relations::{expands, Cardinality, EntityKind, Step};
use utalii_core::types::DbId;

use crate::models::beach::Beach;
use crate::models::favorite::Favorite;
use crate::models::hotel::Hotel;
use crate::models::park::Park;
use crate::models::service::Service;
use crate::models::user::User;
use crate::models::user_favorite::UserFavorite;
use crate::repositories::{
    BeachRepo, FavoriteRepo, HotelRepo, ParkRepo, ServiceRepo, UserFavoriteRepo, UserRepo,
};

/// A consistent in-memory copy of every entity table.
#[derive(Debug, Default)]
pub struct EntityGraph {
    users: Vec<User>,
    services: Vec<Service>,
    parks: Vec<Park>,
    hotels: Vec<Hotel>,
    beaches: Vec<Beach>,
    favorites: Vec<Favorite>,
    pairings: Vec<UserFavorite>,
}

#[derive(Debug, Clone, Copy)]
enum Node<'a> {
    User(&'a User),
    Service(&'a Service),
    Park(&'a Park),
    Hotel(&'a Hotel),
    Beach(&'a Beach),
    Favorite(&'a Favorite),
}

impl Node<'_> {
    fn kind(self) -> EntityKind {
        match self {
            Node::User(_) => EntityKind::User,
            Node::Service(_) => EntityKind::Service,
            Node::Park(_) => EntityKind::Park,
            Node::Hotel(_) => EntityKind::Hotel,
            Node::Beach(_) => EntityKind::Beach,
            Node::Favorite(_) => EntityKind::Favorite,
        }
    }

    fn id(self) -> DbId {
        match self {
            Node::User(row) => row.id,
            Node::Service(row) => row.id,
            Node::Park(row) => row.id,
            Node::Hotel(row) => row.id,
            Node::Beach(row) => row.id,
            Node::Favorite(row) => row.id,
        }
    }

    /// The row's own columns. The password hash never leaves the user row.
    fn columns(self) -> Map<String, Value> {
        let value = match self {
            Node::User(user) => json!({
                "id": user.id,
                "name": user.name,
                "email": user.email,
                "phone_number": user.phone_number,
            }),
            Node::Service(row) => json!(row),
            Node::Park(row) => json!(row),
            Node::Hotel(row) => json!(row),
            Node::Beach(row) => json!(row),
            Node::Favorite(row) => json!(row),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

impl EntityGraph {
    /// Read every entity table and the pairing table in one transaction.
    pub async fn load(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let graph = Self {
            users: UserRepo::list(&mut *tx).await?,
            services: ServiceRepo::list(&mut *tx).await?,
            parks: ParkRepo::list(&mut *tx).await?,
            hotels: HotelRepo::list(&mut *tx).await?,
            beaches: BeachRepo::list(&mut *tx).await?,
            favorites: FavoriteRepo::list(&mut *tx).await?,
            pairings: UserFavoriteRepo::list(&mut *tx).await?,
        };
        tx.commit().await?;
        Ok(graph)
    }

    /// Render one entity, or `None` if no row of `kind` has `id`.
    pub fn serialize(&self, kind: EntityKind, id: DbId) -> Option<Value> {
        let node = self.nodes(kind).into_iter().find(|node| node.id() == id)?;
        Some(self.render(node, &mut vec![Step::root(kind)]))
    }

    /// Render every entity of `kind` in id order.
    pub fn serialize_all(&self, kind: EntityKind) -> Vec<Value> {
        self.nodes(kind)
            .into_iter()
            .map(|node| self.render(node, &mut vec![Step::root(kind)]))
            .collect()
    }

    fn render(&self, node: Node<'_>, path: &mut Vec<Step>) -> Value {
        let mut object = node.columns();
        for rel in node.kind().relations() {
            if !expands(path, rel) {
                continue;
            }
            let related = self.related(node, rel.to);
            path.push(Step::over(rel));
            let value = match rel.cardinality {
                Cardinality::One => match related.first() {
                    Some(&target) => self.render(target, path),
                    None => Value::Null,
                },
                Cardinality::Many => Value::Array(
                    related
                        .into_iter()
                        .map(|target| self.render(target, path))
                        .collect(),
                ),
            };
            path.pop();
            object.insert(rel.name.to_owned(), value);
        }
        Value::Object(object)
    }

    fn nodes(&self, kind: EntityKind) -> Vec<Node<'_>> {
        match kind {
            EntityKind::User => self.users.iter().map(Node::User).collect(),
            EntityKind::Service => self.services.iter().map(Node::Service).collect(),
            EntityKind::Park => self.parks.iter().map(Node::Park).collect(),
            EntityKind::Hotel => self.hotels.iter().map(Node::Hotel).collect(),
            EntityKind::Beach => self.beaches.iter().map(Node::Beach).collect(),
            EntityKind::Favorite => self.favorites.iter().map(Node::Favorite).collect(),
        }
    }

    /// Entities of kind `to` linked to `node`, in id order.
    fn related<'a>(&'a self, node: Node<'a>, to: EntityKind) -> Vec<Node<'a>> {
        match (node, to) {
            (Node::User(user), EntityKind::Service) => self
                .services
                .iter()
                .filter(|s| s.user_id == Some(user.id))
                .map(Node::Service)
                .collect(),
            (Node::User(user), EntityKind::Hotel) => self
                .hotels
                .iter()
                .filter(|h| h.user_id == Some(user.id))
                .map(Node::Hotel)
                .collect(),
            (Node::User(user), EntityKind::Favorite) => self
                .favorites
                .iter()
                .filter(|f| self.paired(user.id, f.id))
                .map(Node::Favorite)
                .collect(),
            (Node::Service(service), EntityKind::User) => self.user(service.user_id),
            (Node::Hotel(hotel), EntityKind::User) => self.user(hotel.user_id),
            (Node::Hotel(hotel), EntityKind::Favorite) => self.favorite(hotel.favorite_id),
            (Node::Park(park), EntityKind::Favorite) => self.favorite(park.favorite_id),
            (Node::Beach(beach), EntityKind::Favorite) => self.favorite(beach.favorite_id),
            (Node::Favorite(favorite), EntityKind::Park) => self
                .parks
                .iter()
                .filter(|p| p.favorite_id == Some(favorite.id))
                .map(Node::Park)
                .collect(),
            (Node::Favorite(favorite), EntityKind::Hotel) => self
                .hotels
                .iter()
                .filter(|h| h.favorite_id == Some(favorite.id))
                .map(Node::Hotel)
                .collect(),
            (Node::Favorite(favorite), EntityKind::Beach) => self
                .beaches
                .iter()
                .filter(|b| b.favorite_id == Some(favorite.id))
                .map(Node::Beach)
                .collect(),
            (Node::Favorite(favorite), EntityKind::User) => self
                .users
                .iter()
                .filter(|u| self.paired(u.id, favorite.id))
                .map(Node::User)
                .collect(),
            _ => Vec::new(),
        }
    }

    fn paired(&self, user_id: DbId, favorite_id: DbId) -> bool {
        self.pairings
            .iter()
            .any(|p| p.user_id == user_id && p.favorite_id == favorite_id)
    }

    fn user(&self, id: Option<DbId>) -> Vec<Node<'_>> {
        self.users
            .iter()
            .filter(|u| Some(u.id) == id)
            .map(Node::User)
            .collect()
    }

    fn favorite(&self, id: Option<DbId>) -> Vec<Node<'_>> {
        self.favorites
            .iter()
            .filter(|f| Some(f.id) == id)
            .map(Node::Favorite)
            .collect()
    }
}
