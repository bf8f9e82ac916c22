//! Route lookup for the single catch-all pattern.
//!
//! The router is immutable after construction and owns the full route table
//! (one entry). Matching returns an explicit no-match rather than a silent
//! default; the caller decides how a miss is reported.

/// URL pattern shapes the router understands.
///
/// Only the greedy catch-all exists today. It matches any path with a
/// non-empty remainder after the leading slash and captures that remainder
/// verbatim, slashes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    CatchAll,
}

#[derive(Debug, Clone)]
pub struct Route {
    name: &'static str,
    pattern: Pattern,
}

/// A successful match: the route that fired and the captured path remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub name: &'static str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Register a route under `name`. Routes are tried in registration order.
    #[must_use]
    pub fn route(mut self, name: &'static str, pattern: Pattern) -> Self {
        self.routes.push(Route { name, pattern });
        self
    }

    /// Look up the route matching `path`.
    ///
    /// `path` is the raw request path including its leading slash. The root
    /// path (`/` or the empty string) matches nothing: the catch-all requires
    /// at least one character after the slash.
    #[must_use]
    pub fn match_path<'a>(&self, path: &'a str) -> Option<RouteMatch<'a>> {
        self.routes.iter().find_map(|route| match route.pattern {
            Pattern::CatchAll => {
                let rest = path.strip_prefix('/').unwrap_or(path);
                if rest.is_empty() {
                    None
                } else {
                    Some(RouteMatch {
                        name: route.name,
                        text: rest,
                    })
                }
            }
        })
    }
}

/// The route table this service registers: one greedy catch-all.
#[must_use]
pub fn service_router() -> Router {
    Router::new().route("echo", Pattern::CatchAll)
}
