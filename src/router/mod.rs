//! Client-side routing state.
//!
//! Routes are named strings; collection routes follow the
//! `collection-<mode>` convention. The mode is derived once per event into
//! [`RouteMode`] instead of being string-compared at every call site.

use crate::store::ElementId;

/// Prefix shared by every collection route name.
pub const ROUTE_PREFIX: &str = "collection-";

/// The mutually exclusive view modes, derived purely from the route name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum RouteMode {
    #[default]
    List,
    Insert,
    Update,
    Remove,
}

impl RouteMode {
    /// Parse a mode from a route name's trailing segment.
    ///
    /// `"collection-insert"` → `Insert`; names outside the convention parse
    /// as `None`.
    pub fn from_route_name(name: &str) -> Option<Self> {
        let segment = name.rsplit('/').next().unwrap_or(name);
        match segment.strip_prefix(ROUTE_PREFIX)? {
            "list" => Some(Self::List),
            "insert" => Some(Self::Insert),
            "update" => Some(Self::Update),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }

    pub fn route_name(self) -> &'static str {
        match self {
            Self::List => "collection-list",
            Self::Insert => "collection-insert",
            Self::Update => "collection-update",
            Self::Remove => "collection-remove",
        }
    }

    /// A detail mode addresses a single element via `params._id`.
    pub fn is_detail(self) -> bool {
        matches!(self, Self::Update | Self::Remove)
    }
}

/// Parameter bag carried alongside the route stack.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteParams {
    /// `_id` of the addressed element; absent off detail routes.
    pub id: Option<ElementId>,
}

/// Minimal route descriptor: a stack of route names plus params.
///
/// The list route is always the bottom of the stack; modal modes are pushed
/// on top of it and popped by `go_to_list`.
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    routes: Vec<String>,
    pub params: RouteParams,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            routes: vec![RouteMode::List.route_name().to_string()],
            params: RouteParams::default(),
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the active (last) route.
    pub fn current(&self) -> Option<&str> {
        self.routes.last().map(String::as_str)
    }

    /// Active mode, derived from the last route name. Unknown names fall
    /// back to `List` so a malformed route degrades to the plain table.
    pub fn mode(&self) -> RouteMode {
        self.current()
            .and_then(RouteMode::from_route_name)
            .unwrap_or_default()
    }

    /// Navigate to a mode, carrying the element id for detail modes.
    pub fn navigate(&mut self, mode: RouteMode, id: Option<ElementId>) {
        self.routes.truncate(1);
        if mode != RouteMode::List {
            self.routes.push(mode.route_name().to_string());
        }
        self.params.id = id;
    }
}
