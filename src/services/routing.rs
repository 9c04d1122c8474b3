use crate::models::{Page, RouteClass, RouteMatch};
use indexmap::IndexMap;
use regex::Regex;
use thiserror::Error;

/// Errors raised while compiling a route table
#[derive(Error, Debug)]
pub enum RouteTableError {
    #[error("Route pattern {0:?} must start with '/'")]
    RelativePattern(String),

    #[error("Route pattern {0:?} has a parameter without a name")]
    UnnamedParameter(String),

    #[error("Route pattern {0:?} is declared more than once")]
    DuplicatePattern(String),

    #[error("Route pattern {pattern:?} failed to compile: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// One declared route: a path pattern, its access class and the page it mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition {
    pub pattern: String,
    pub class: RouteClass,
    pub page: Page,
}

impl RouteDefinition {
    pub fn new(pattern: impl Into<String>, class: RouteClass, page: Page) -> Self {
        Self {
            pattern: pattern.into(),
            class,
            page,
        }
    }
}

#[derive(Debug, Clone)]
struct CompiledRoute {
    definition: RouteDefinition,
    matcher: Regex,
    param_names: Vec<String>,
}

/// Declarative route table.
///
/// Patterns are matched segment-wise in declaration order; `:name` captures a
/// single non-empty segment. Paths that match nothing resolve to the fallback
/// (the not-found page).
///
/// The table only classifies paths. Navigation itself belongs to the router.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    fallback: RouteDefinition,
}

/// Strip query string, fragment and trailing slash from a location.
pub fn pathname(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

impl RouteTable {
    /// Compile a table from route definitions plus the catch-all fallback.
    pub fn new(
        definitions: Vec<RouteDefinition>,
        fallback: RouteDefinition,
    ) -> Result<Self, RouteTableError> {
        let mut routes: Vec<CompiledRoute> = Vec::with_capacity(definitions.len());

        for definition in definitions {
            if routes
                .iter()
                .any(|r| r.definition.pattern == definition.pattern)
            {
                return Err(RouteTableError::DuplicatePattern(definition.pattern));
            }
            let (matcher, param_names) = compile_pattern(&definition.pattern)?;
            routes.push(CompiledRoute {
                definition,
                matcher,
                param_names,
            });
        }

        tracing::debug!("Compiled route table with {} routes", routes.len());

        Ok(Self { routes, fallback })
    }

    /// The client's route table.
    pub fn default_table() -> Self {
        use Page::*;
        use RouteClass::*;

        let definitions = vec![
            RouteDefinition::new("/", Public, Home),
            RouteDefinition::new("/search", Public, Search),
            RouteDefinition::new("/trending", Public, Trending),
            RouteDefinition::new("/shorts", Public, Shorts),
            RouteDefinition::new("/watch/:id", Public, Watch),
            RouteDefinition::new("/channel/:id", Public, Channel),
            RouteDefinition::new("/auth", GuestOnly, Auth),
            RouteDefinition::new("/upload", MemberOnly, Upload),
            RouteDefinition::new("/dashboard", MemberOnly, Dashboard),
            RouteDefinition::new("/edit/:id", MemberOnly, EditVideo),
            RouteDefinition::new("/history", MemberOnly, History),
            RouteDefinition::new("/watch-later", MemberOnly, WatchLater),
            RouteDefinition::new("/liked-videos", MemberOnly, LikedVideos),
            RouteDefinition::new("/playlists", MemberOnly, Playlists),
            RouteDefinition::new("/subscriptions", MemberOnly, Subscriptions),
            RouteDefinition::new("/settings", MemberOnly, Settings),
            RouteDefinition::new("/admin", AdminOnly, AdminPanel),
        ];

        Self::new(definitions, RouteDefinition::new("*", Public, NotFound))
            .expect("Built-in route table is valid")
    }

    /// Resolve a location (path with optional query/fragment) to its route.
    pub fn resolve(&self, location: &str) -> RouteMatch {
        let path = pathname(location);

        for route in &self.routes {
            if let Some(captures) = route.matcher.captures(path) {
                let params = route
                    .param_names
                    .iter()
                    .zip(captures.iter().skip(1))
                    .filter_map(|(name, value)| {
                        value.map(|v| (name.clone(), v.as_str().to_string()))
                    })
                    .collect::<IndexMap<_, _>>();

                return RouteMatch {
                    pattern: route.definition.pattern.clone(),
                    class: route.definition.class,
                    page: route.definition.page,
                    params,
                };
            }
        }

        RouteMatch {
            pattern: self.fallback.pattern.clone(),
            class: self.fallback.class,
            page: self.fallback.page,
            params: IndexMap::new(),
        }
    }

    pub fn classify(&self, location: &str) -> RouteClass {
        self.resolve(location).class
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::default_table()
    }
}

fn compile_pattern(pattern: &str) -> Result<(Regex, Vec<String>), RouteTableError> {
    if !pattern.starts_with('/') {
        return Err(RouteTableError::RelativePattern(pattern.to_string()));
    }

    let mut source = String::from("^");
    let mut param_names = Vec::new();

    for segment in pattern.split('/').filter(|s| !s.is_empty()) {
        source.push('/');
        if let Some(name) = segment.strip_prefix(':') {
            if name.is_empty() {
                return Err(RouteTableError::UnnamedParameter(pattern.to_string()));
            }
            param_names.push(name.to_string());
            source.push_str("([^/]+)");
        } else {
            source.push_str(&regex::escape(segment));
        }
    }

    if source == "^" {
        source.push('/');
    }
    source.push('$');

    let matcher = Regex::new(&source).map_err(|source| RouteTableError::Compile {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok((matcher, param_names))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pathname_normalization() {
        assert_eq!(pathname("/search?q=cats"), "/search");
        assert_eq!(pathname("/watch/abc#t=10"), "/watch/abc");
        assert_eq!(pathname("/history/"), "/history");
        assert_eq!(pathname("/"), "/");
        assert_eq!(pathname(""), "/");
        assert_eq!(pathname("?q=x"), "/");
    }

    #[test]
    fn test_resolve_root() {
        let table = RouteTable::default_table();
        let route = table.resolve("/");
        assert_eq!(route.page, Page::Home);
        assert_eq!(route.class, RouteClass::Public);
    }

    #[test]
    fn test_resolve_captures_params() {
        let table = RouteTable::default_table();
        let route = table.resolve("/watch/abc123?t=42");
        assert_eq!(route.page, Page::Watch);
        assert_eq!(route.pattern, "/watch/:id");
        assert_eq!(route.param("id"), Some("abc123"));
    }

    #[test]
    fn test_parameter_needs_a_segment() {
        let table = RouteTable::default_table();
        assert_eq!(table.resolve("/watch").page, Page::NotFound);
        assert_eq!(table.resolve("/watch/a/b").page, Page::NotFound);
    }

    #[test]
    fn test_watch_later_is_not_watch() {
        let table = RouteTable::default_table();
        let route = table.resolve("/watch-later");
        assert_eq!(route.page, Page::WatchLater);
        assert_eq!(route.class, RouteClass::MemberOnly);
    }

    #[test]
    fn test_classification_of_declared_routes() {
        let table = RouteTable::default_table();
        assert_eq!(table.classify("/auth"), RouteClass::GuestOnly);
        assert_eq!(table.classify("/upload"), RouteClass::MemberOnly);
        assert_eq!(table.classify("/edit/v1"), RouteClass::MemberOnly);
        assert_eq!(table.classify("/admin"), RouteClass::AdminOnly);
        assert_eq!(table.classify("/channel/xyz"), RouteClass::Public);
    }

    #[test]
    fn test_unknown_path_falls_back_to_not_found() {
        let table = RouteTable::default_table();
        let route = table.resolve("/definitely/not/here");
        assert_eq!(route.page, Page::NotFound);
        assert_eq!(route.class, RouteClass::Public);
        assert_eq!(route.pattern, "*");
    }

    #[test]
    fn test_literal_segments_are_escaped() {
        let table = RouteTable::new(
            vec![RouteDefinition::new("/a.b", RouteClass::Public, Page::Home)],
            RouteDefinition::new("*", RouteClass::Public, Page::NotFound),
        )
        .unwrap();
        assert_eq!(table.resolve("/a.b").page, Page::Home);
        assert_eq!(table.resolve("/axb").page, Page::NotFound);
    }

    #[test]
    fn test_rejects_invalid_patterns() {
        let fallback = RouteDefinition::new("*", RouteClass::Public, Page::NotFound);

        let relative = RouteTable::new(
            vec![RouteDefinition::new("watch", RouteClass::Public, Page::Watch)],
            fallback.clone(),
        );
        assert!(matches!(relative, Err(RouteTableError::RelativePattern(_))));

        let unnamed = RouteTable::new(
            vec![RouteDefinition::new("/watch/:", RouteClass::Public, Page::Watch)],
            fallback.clone(),
        );
        assert!(matches!(unnamed, Err(RouteTableError::UnnamedParameter(_))));

        let duplicate = RouteTable::new(
            vec![
                RouteDefinition::new("/a", RouteClass::Public, Page::Home),
                RouteDefinition::new("/a", RouteClass::Public, Page::Search),
            ],
            fallback,
        );
        assert!(matches!(duplicate, Err(RouteTableError::DuplicatePattern(_))));
    }
}
