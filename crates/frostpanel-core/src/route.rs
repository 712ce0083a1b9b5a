//! Path-based routing.
//!
//! URL format: `/`, `/account/<page>`, `/server/<id>/<page>`, `/auth/...`.

/// Application routes parsed from `location.pathname`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Server list: `/`
    Dashboard,
    /// Account pages: `/account` or `/account/<page>`
    Account {
        /// Empty for the overview page
        page: String,
    },
    /// Server pages: `/server/<id>` or `/server/<id>/<page...>`
    Server {
        id: String,
        /// Empty for the console page
        page: String,
    },
    /// `/auth/login`
    Login,
    /// `/auth/login/checkpoint`
    LoginCheckpoint,
    /// `/auth/password`
    ForgotPassword,
    /// Anything else
    NotFound(String),
}

impl AppRoute {
    /// Parse a pathname into a route.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Dashboard,
            ["account", rest @ ..] => Self::Account {
                page: rest.join("/"),
            },
            ["server", id, rest @ ..] => Self::Server {
                id: id.to_string(),
                page: rest.join("/"),
            },
            ["auth", "login"] => Self::Login,
            ["auth", "login", "checkpoint"] => Self::LoginCheckpoint,
            ["auth", "password"] => Self::ForgotPassword,
            _ => Self::NotFound(format!("/{}", segments.join("/"))),
        }
    }

    /// Convert the route back into a pathname.
    pub fn to_path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Account { page } if page.is_empty() => "/account".to_string(),
            Self::Account { page } => format!("/account/{}", page),
            Self::Server { id, page } if page.is_empty() => format!("/server/{}", id),
            Self::Server { id, page } => format!("/server/{}/{}", id, page),
            Self::Login => "/auth/login".to_string(),
            Self::LoginCheckpoint => "/auth/login/checkpoint".to_string(),
            Self::ForgotPassword => "/auth/password".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// Routes reachable without a session.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Login | Self::LoginCheckpoint | Self::ForgotPassword
        )
    }

    pub fn server_id(&self) -> Option<&str> {
        match self {
            Self::Server { id, .. } => Some(id),
            _ => None,
        }
    }
}

fn trim_trailing(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether a link to `path` is active at `current`.
///
/// Exact links match on equality; others also match any location below
/// them, on whole segments only (`/account` covers `/account/api` but not
/// `/accounts`). Trailing slashes are ignored.
pub fn is_active(current: &str, path: &str, exact: bool) -> bool {
    let current = trim_trailing(current);
    let path = trim_trailing(path);

    if current == path {
        return true;
    }
    if exact {
        return false;
    }
    if path == "/" {
        return true;
    }
    current
        .strip_prefix(path)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Join a route-table entry onto the router's base path.
///
/// `"/"` maps to the base itself; other values are appended with exactly one
/// separating slash.
pub fn join_route(base: &str, value: &str) -> String {
    if value == "/" {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        value.trim_start_matches('/')
    )
}

/// Whether a server route should show the conflict screen instead of the page.
///
/// Root admins may still open the server's overview page to resolve the
/// conflict.
pub fn shows_conflict(in_conflict: bool, root_admin: bool, pathname: &str, server_id: &str) -> bool {
    in_conflict && (!root_admin || !pathname.ends_with(&format!("/server/{}", server_id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(
            AppRoute::from_path("/account"),
            AppRoute::Account {
                page: String::new()
            }
        );
        assert_eq!(
            AppRoute::from_path("/account/api/"),
            AppRoute::Account {
                page: "api".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_path("/server/1a7ce997/files/edit?file=x"),
            AppRoute::Server {
                id: "1a7ce997".to_string(),
                page: "files/edit".to_string()
            }
        );
        assert_eq!(AppRoute::from_path("/auth/login"), AppRoute::Login);
        assert_eq!(
            AppRoute::from_path("/auth/login/checkpoint"),
            AppRoute::LoginCheckpoint
        );
        assert_eq!(
            AppRoute::from_path("/nope/here"),
            AppRoute::NotFound("/nope/here".to_string())
        );
        assert_eq!(
            AppRoute::from_path("/server"),
            AppRoute::NotFound("/server".to_string())
        );
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(AppRoute::Dashboard.to_path(), "/");
        assert_eq!(
            AppRoute::Server {
                id: "abc".into(),
                page: String::new()
            }
            .to_path(),
            "/server/abc"
        );
        assert_eq!(
            AppRoute::Account {
                page: "ssh".into()
            }
            .to_path(),
            "/account/ssh"
        );
        assert_eq!(AppRoute::ForgotPassword.to_path(), "/auth/password");
    }

    #[test]
    fn test_exact_matching() {
        assert!(is_active("/", "/", true));
        assert!(!is_active("/account", "/", true));
        assert!(is_active("/server/abc/", "/server/abc", true));
        assert!(!is_active("/server/abc/files", "/server/abc", true));
    }

    #[test]
    fn test_prefix_matching() {
        assert!(is_active("/account/api", "/account", false));
        assert!(!is_active("/accounts", "/account", false));
        assert!(is_active("/server/abc/files/edit", "/server/abc/files", false));
        assert!(is_active("/anything", "/", false));
    }

    #[test]
    fn test_join_route() {
        assert_eq!(join_route("/server/abc", "/"), "/server/abc");
        assert_eq!(join_route("/server/abc/", "/files"), "/server/abc/files");
        assert_eq!(join_route("/server/abc", "files"), "/server/abc/files");
    }

    #[test]
    fn test_conflict_screen() {
        assert!(shows_conflict(true, false, "/server/abc", "abc"));
        assert!(!shows_conflict(true, true, "/server/abc", "abc"));
        assert!(shows_conflict(true, true, "/server/abc/files", "abc"));
        assert!(!shows_conflict(false, false, "/server/abc/files", "abc"));
    }
}
