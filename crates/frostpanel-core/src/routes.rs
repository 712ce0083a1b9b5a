//! Account and server route tables, and the sidebar links derived from them.

use crate::nav::{NavIcon, NavLink};
use crate::route::join_route;

/// One page in a route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    /// Path relative to the router base; `"/"` is the base itself.
    pub path: &'static str,
    /// Sidebar label; unnamed routes are reachable but not listed.
    pub name: Option<&'static str>,
    pub exact: bool,
    /// Subuser permission required to see the link.
    pub permission: Option<&'static str>,
    pub icon: Option<NavIcon>,
}

impl RouteDef {
    const fn named(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name: Some(name),
            exact: false,
            permission: None,
            icon: None,
        }
    }

    const fn exact(mut self) -> Self {
        self.exact = true;
        self
    }

    const fn permission(mut self, permission: &'static str) -> Self {
        self.permission = Some(permission);
        self
    }

    const fn icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Explicit icon, else the default for the route's name.
    pub fn resolved_icon(&self) -> Option<NavIcon> {
        self.icon.or_else(|| self.name.and_then(NavIcon::for_route_name))
    }
}

pub const ACCOUNT_ROUTES: &[RouteDef] = &[
    RouteDef::named("/", "Account").exact(),
    RouteDef::named("/api", "API Credentials"),
    RouteDef::named("/ssh", "SSH Keys"),
    RouteDef::named("/activity", "Activity"),
];

pub const SERVER_ROUTES: &[RouteDef] = &[
    RouteDef::named("/", "Console").exact(),
    RouteDef::named("/files", "Files").permission("file.*"),
    RouteDef::named("/databases", "Databases")
        .exact()
        .permission("database.*"),
    RouteDef::named("/schedules", "Schedules").permission("schedule.*"),
    RouteDef::named("/users", "Users").permission("user.*"),
    RouteDef::named("/backups", "Backups").permission("backup.*"),
    RouteDef::named("/network", "Network").permission("allocation.*"),
    RouteDef::named("/startup", "Startup").permission("startup.*"),
    RouteDef::named("/settings", "Settings").permission("settings.*"),
    RouteDef::named("/activity", "Activity")
        .permission("activity.*")
        .icon(NavIcon::Analytics),
];

/// Whether any of the held `permissions` satisfies `action`.
///
/// `"*"` held grants everything. An action ending in `.*` is satisfied by
/// any permission in that group; otherwise the exact permission is needed.
pub fn can(permissions: &[String], action: &str) -> bool {
    if permissions.iter().any(|p| p == "*") {
        return true;
    }
    match action.strip_suffix(".*") {
        Some(group) => permissions.iter().any(|p| {
            p.strip_prefix(group)
                .is_some_and(|rest| rest.starts_with('.'))
        }),
        None => permissions.iter().any(|p| p == action),
    }
}

/// The route of `table` serving `page`, the path below the router base.
///
/// Pages are matched on their whole path; the `exact` flag only affects
/// link highlighting.
pub fn find_route(table: &'static [RouteDef], page: &str) -> Option<&'static RouteDef> {
    let page = page.trim_matches('/');
    table
        .iter()
        .find(|route| route.path.trim_matches('/') == page)
}

/// Links for the Account section.
pub fn account_nav_links() -> Vec<NavLink> {
    ACCOUNT_ROUTES
        .iter()
        .filter_map(|route| {
            let name = route.name?;
            Some(
                NavLink::to(join_route("/account", route.path), name)
                    .exact(route.exact)
                    .with_icon(route.resolved_icon()),
            )
        })
        .collect()
}

/// Links for the Server section of server `id`.
///
/// Routes guarded by a permission are listed only when `permissions` allow
/// them. Root admins also get a link to the server in the admin area.
pub fn server_nav_links(
    id: &str,
    permissions: &[String],
    root_admin: bool,
    internal_id: Option<u64>,
) -> Vec<NavLink> {
    let base = format!("/server/{}", id);
    let mut links: Vec<NavLink> = SERVER_ROUTES
        .iter()
        .filter(|route| route.permission.is_none_or(|p| can(permissions, p)))
        .filter_map(|route| {
            let name = route.name?;
            Some(
                NavLink::to(join_route(&base, route.path), name)
                    .exact(route.exact)
                    .with_icon(route.resolved_icon()),
            )
        })
        .collect();

    if root_admin && let Some(internal_id) = internal_id {
        links.push(
            NavLink::href(format!("/admin/servers/view/{}", internal_id), "Admin View")
                .with_icon(Some(NavIcon::ExternalLink)),
        );
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_can_match_any() {
        assert!(can(&perms(&["*"]), "file.*"));
        assert!(can(&perms(&["file.read"]), "file.*"));
        assert!(!can(&perms(&["filesystem.read"]), "file.*"));
        assert!(can(&perms(&["file.sftp"]), "file.sftp"));
        assert!(!can(&perms(&["file.read"]), "file.sftp"));
        assert!(!can(&[], "backup.*"));
    }

    #[test]
    fn test_find_route() {
        assert_eq!(find_route(SERVER_ROUTES, "").and_then(|r| r.name), Some("Console"));
        assert_eq!(find_route(SERVER_ROUTES, "/files/").and_then(|r| r.name), Some("Files"));
        assert!(find_route(SERVER_ROUTES, "files/edit/config.yml").is_none());
        assert!(find_route(SERVER_ROUTES, "databases/1").is_none());
        assert!(find_route(SERVER_ROUTES, "filesystem").is_none());
        assert_eq!(find_route(ACCOUNT_ROUTES, "api").and_then(|r| r.name), Some("API Credentials"));
        assert!(find_route(ACCOUNT_ROUTES, "api/x").is_none());
        assert!(find_route(ACCOUNT_ROUTES, "billing").is_none());
    }

    #[test]
    fn test_account_links() {
        let links = account_nav_links();
        let paths: Vec<_> = links.iter().filter_map(|l| l.to.as_deref()).collect();
        assert_eq!(
            paths,
            vec!["/account", "/account/api", "/account/ssh", "/account/activity"]
        );
        assert!(links[0].exact);
    }

    #[test]
    fn test_server_links_respect_permissions() {
        let links = server_nav_links("abc", &perms(&["file.read", "backup.create"]), false, Some(7));
        let names: Vec<_> = links.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(names, vec!["Console", "Files", "Backups"]);
        assert_eq!(links[0].to.as_deref(), Some("/server/abc"));
        assert_eq!(links[0].icon, Some(NavIcon::Terminal));
        assert_eq!(links[1].to.as_deref(), Some("/server/abc/files"));
    }

    #[test]
    fn test_root_admin_gets_admin_link() {
        let links = server_nav_links("abc", &perms(&["*"]), true, Some(7));
        assert_eq!(links.len(), SERVER_ROUTES.len() + 1);
        let admin = links.last().map(|l| l.href.as_deref());
        assert_eq!(admin, Some(Some("/admin/servers/view/7")));
        assert_eq!(links[SERVER_ROUTES.len() - 1].icon, Some(NavIcon::Analytics));
    }
}
