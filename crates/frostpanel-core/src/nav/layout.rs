//! Sidebar layout.
//!
//! Turns the registry's grouped view, plus links handed directly to the
//! navigation bar, into the ordered list of items the sidebar draws. The
//! result depends only on its inputs.

use super::entry::{NavEntry, NavIcon, NavLink, entries_from_links};
use super::registry::NavGroup;

/// Links passed straight to the navigation bar under their own label.
#[derive(Clone, Copy, Debug)]
pub struct InlineSection<'a> {
    pub section: &'a str,
    pub links: &'a [NavLink],
}

/// One drawable sidebar item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SidebarItem {
    Dashboard,
    SectionLabel(String),
    /// Link handed directly to the navigation bar.
    InlineLink(NavEntry),
    /// Link taken from the registry.
    Link(NavEntry),
    Search,
    Admin,
    Account,
    SignOut,
}

/// What activating an item does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemTarget {
    /// In-app route.
    Route { path: String, exact: bool },
    /// Full page link outside the single-page app.
    External(String),
    OpenSearch,
    SignOut,
    /// Labels are not interactive.
    None,
}

/// How an item is drawn for a given sidebar width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Visible text, `None` when collapsed.
    pub text: Option<String>,
    pub icon: Option<NavIcon>,
    pub target: ItemTarget,
    /// Tooltip for the fixed actions; shown in both widths.
    pub tooltip: Option<&'static str>,
}

pub const DASHBOARD_PATH: &str = "/";
pub const ACCOUNT_PATH: &str = "/account";
pub const ADMIN_PATH: &str = "/admin";

impl SidebarItem {
    /// Resolve text, icon and target for the sidebar state.
    ///
    /// Collapsing only drops text; icons and targets are kept.
    pub fn presentation(&self, expanded: bool) -> Presentation {
        let (text, icon, target, tooltip) = match self {
            Self::Dashboard => (
                "Dashboard".to_string(),
                Some(NavIcon::Dashboard),
                ItemTarget::Route {
                    path: DASHBOARD_PATH.to_string(),
                    exact: true,
                },
                None,
            ),
            Self::SectionLabel(section) => (section.clone(), None, ItemTarget::None, None),
            Self::InlineLink(entry) | Self::Link(entry) => {
                (entry.label.clone(), entry.icon, entry_target(entry), None)
            }
            Self::Search => (
                "Search".to_string(),
                Some(NavIcon::Search),
                ItemTarget::OpenSearch,
                Some("Search"),
            ),
            Self::Admin => (
                "Admin".to_string(),
                Some(NavIcon::Admin),
                ItemTarget::External(ADMIN_PATH.to_string()),
                Some("Admin"),
            ),
            Self::Account => (
                "Account".to_string(),
                Some(NavIcon::Account),
                ItemTarget::Route {
                    path: ACCOUNT_PATH.to_string(),
                    exact: false,
                },
                Some("Account Settings"),
            ),
            Self::SignOut => (
                "Sign Out".to_string(),
                Some(NavIcon::SignOut),
                ItemTarget::SignOut,
                Some("Sign Out"),
            ),
        };

        Presentation {
            text: expanded.then_some(text),
            icon,
            target,
            tooltip,
        }
    }

    /// Whether the item is drawn as an indented section child.
    pub fn is_section_child(&self) -> bool {
        matches!(self, Self::InlineLink(_) | Self::Link(_))
    }
}

/// Absolute `http(s)` links and the admin area leave the single-page app.
fn entry_target(entry: &NavEntry) -> ItemTarget {
    let path = &entry.path;
    let external = path.starts_with("http://")
        || path.starts_with("https://")
        || path == ADMIN_PATH
        || path.starts_with("/admin/");
    if external {
        ItemTarget::External(path.clone())
    } else {
        ItemTarget::Route {
            path: path.clone(),
            exact: entry.exact,
        }
    }
}

/// Build the ordered sidebar.
///
/// Order: dashboard, inline section (only when it has at least one valid
/// link), registry sections in first-seen order, then search, admin (root
/// admins only), account and sign out.
pub fn build_sidebar(
    groups: &[NavGroup],
    inline: Option<InlineSection<'_>>,
    root_admin: bool,
) -> Vec<SidebarItem> {
    let mut items = vec![SidebarItem::Dashboard];

    if let Some(inline) = inline
        && !inline.section.trim().is_empty()
    {
        let entries: Vec<_> = entries_from_links(inline.section, inline.links).collect();
        if !entries.is_empty() {
            items.push(SidebarItem::SectionLabel(inline.section.to_string()));
            items.extend(entries.into_iter().map(SidebarItem::InlineLink));
        }
    }

    for group in groups {
        items.push(SidebarItem::SectionLabel(group.section.clone()));
        items.extend(group.entries.iter().cloned().map(SidebarItem::Link));
    }

    items.push(SidebarItem::Search);
    if root_admin {
        items.push(SidebarItem::Admin);
    }
    items.push(SidebarItem::Account);
    items.push(SidebarItem::SignOut);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::NavRegistry;

    fn registry() -> NavRegistry {
        let mut registry = NavRegistry::new();
        registry.register(NavEntry::new("Console", "/server/abc", "Server").exact(true));
        registry.register(NavEntry::new("Files", "/server/abc/files", "Server"));
        registry.register(NavEntry::new("Docs", "https://example.com/docs", "Help"));
        registry
    }

    #[test]
    fn test_sidebar_order() {
        let links = vec![NavLink::to("/account/api", "API Credentials")];
        let items = build_sidebar(
            &registry().grouped_view(),
            Some(InlineSection {
                section: "Account",
                links: &links,
            }),
            true,
        );

        let kinds: Vec<String> = items
            .iter()
            .map(|i| match i {
                SidebarItem::Dashboard => "dashboard".to_string(),
                SidebarItem::SectionLabel(s) => format!("label:{s}"),
                SidebarItem::InlineLink(e) => format!("inline:{}", e.label),
                SidebarItem::Link(e) => format!("link:{}", e.label),
                SidebarItem::Search => "search".to_string(),
                SidebarItem::Admin => "admin".to_string(),
                SidebarItem::Account => "account".to_string(),
                SidebarItem::SignOut => "signout".to_string(),
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                "dashboard",
                "label:Account",
                "inline:API Credentials",
                "label:Server",
                "link:Console",
                "link:Files",
                "label:Help",
                "link:Docs",
                "search",
                "admin",
                "account",
                "signout",
            ]
        );
    }

    #[test]
    fn test_admin_entry_requires_root_admin() {
        let items = build_sidebar(&[], None, false);
        assert_eq!(
            items,
            vec![
                SidebarItem::Dashboard,
                SidebarItem::Search,
                SidebarItem::Account,
                SidebarItem::SignOut,
            ]
        );
    }

    #[test]
    fn test_inline_section_needs_label_and_links() {
        let links = vec![NavLink::to("/account", "Account")];
        let unlabeled = build_sidebar(
            &[],
            Some(InlineSection {
                section: "",
                links: &links,
            }),
            false,
        );
        assert_eq!(unlabeled.len(), 4);

        let empty = build_sidebar(
            &[],
            Some(InlineSection {
                section: "Account",
                links: &[],
            }),
            false,
        );
        assert_eq!(empty.len(), 4);
    }

    #[test]
    fn test_build_is_deterministic() {
        let groups = registry().grouped_view();
        assert_eq!(
            build_sidebar(&groups, None, true),
            build_sidebar(&groups, None, true)
        );
    }

    #[test]
    fn test_collapsed_keeps_icon_and_target() {
        let item = SidebarItem::Link(
            NavEntry::new("Console", "/server/abc", "Server")
                .exact(true)
                .with_icon(Some(NavIcon::Terminal)),
        );

        let expanded = item.presentation(true);
        let collapsed = item.presentation(false);

        assert_eq!(expanded.text.as_deref(), Some("Console"));
        assert_eq!(collapsed.text, None);
        assert_eq!(collapsed.icon, Some(NavIcon::Terminal));
        assert_eq!(collapsed.target, expanded.target);
        assert_eq!(
            collapsed.target,
            ItemTarget::Route {
                path: "/server/abc".to_string(),
                exact: true
            }
        );
    }

    #[test]
    fn test_external_targets() {
        let docs = SidebarItem::Link(NavEntry::new("Docs", "https://example.com", "Help"));
        assert_eq!(
            docs.presentation(true).target,
            ItemTarget::External("https://example.com".to_string())
        );
        let admin_view = SidebarItem::Link(NavEntry::new("Admin View", "/admin/servers/view/4", "Server"));
        assert_eq!(
            admin_view.presentation(true).target,
            ItemTarget::External("/admin/servers/view/4".to_string())
        );
        assert_eq!(
            SidebarItem::Admin.presentation(false).target,
            ItemTarget::External(ADMIN_PATH.to_string())
        );
    }
}
