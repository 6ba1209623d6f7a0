//! Page route table.
//!
//! A static mapping from URL path to page. Paths are stored without leading
//! slashes, so the editor lives at `""`. Two pages sit behind the auth gate;
//! every other path resolves to the editor.

/// Pages served by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Editor,
    Programs,
    UserHome,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub page: Page,
    pub requires_auth: bool,
}

impl Route {
    /// Absolute URL of the route, e.g. `/programs`.
    pub fn url(&self) -> String {
        format!("/{}", self.path)
    }
}

/// Page the unmatched paths and failed auth checks land on.
pub const ROOT: Route = Route {
    path: "",
    page: Page::Editor,
    requires_auth: false,
};

pub const ROUTES: &[Route] = &[
    ROOT,
    Route {
        path: "programs",
        page: Page::Programs,
        requires_auth: true,
    },
    Route {
        path: "user-home",
        page: Page::UserHome,
        requires_auth: true,
    },
];

fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// Finds the route registered for `path`, ignoring surrounding slashes.
pub fn find(path: &str) -> Option<&'static Route> {
    let path = normalize(path);
    ROUTES.iter().find(|route| route.path == path)
}

/// Resolves a navigation to exactly one page.
///
/// Unknown paths resolve to the root page, and so do gated paths when the
/// session is not authenticated.
pub fn resolve(path: &str, authenticated: bool) -> Page {
    match find(path) {
        Some(route) if !route.requires_auth || authenticated => route.page,
        _ => ROOT.page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_public_editor() {
        assert_eq!(resolve("", false), Page::Editor);
        assert_eq!(resolve("/", false), Page::Editor);
    }

    #[test]
    fn test_gated_routes_require_auth() {
        assert_eq!(resolve("programs", true), Page::Programs);
        assert_eq!(resolve("/user-home", true), Page::UserHome);

        assert_eq!(resolve("programs", false), Page::Editor);
        assert_eq!(resolve("user-home", false), Page::Editor);
    }

    #[test]
    fn test_unknown_paths_resolve_to_root() {
        assert_eq!(resolve("/nonexistent", false), Page::Editor);
        assert_eq!(resolve("/nonexistent", true), Page::Editor);
        assert_eq!(resolve("programs/42", true), Page::Editor);
    }

    #[test]
    fn test_find_ignores_slashes() {
        assert_eq!(find("/programs/").map(|r| r.page), Some(Page::Programs));
        assert!(find("editor").is_none());
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(ROUTES.len(), 3);
        assert_eq!(ROUTES.iter().filter(|r| r.requires_auth).count(), 2);
        assert_eq!(ROUTES[1].url(), "/programs");
        assert_eq!(ROOT.url(), "/");
    }
}
