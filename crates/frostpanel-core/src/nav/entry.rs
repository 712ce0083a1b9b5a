//! Navigation entries and the typed link descriptors that produce them.

/// Symbolic icon reference, mapped to a concrete glyph by the UI theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Dashboard,
    Terminal,
    Folder,
    Users,
    Settings,
    Database,
    Analytics,
    Security,
    Network,
    Schedules,
    List,
    Storage,
    ExternalLink,
    Search,
    Admin,
    Account,
    SignOut,
}

impl NavIcon {
    /// Default icon for a named route.
    ///
    /// Route tables may set an icon explicitly; this is the fallback used when
    /// they don't.
    pub fn for_route_name(name: &str) -> Option<Self> {
        let icon = match name {
            "Console" => Self::Terminal,
            "Files" | "File Manager" => Self::Folder,
            "Users" | "User Management" => Self::Users,
            "Settings" | "Configuration" => Self::Settings,
            "Database" | "Databases" => Self::Database,
            "Analytics" | "Statistics" => Self::Analytics,
            "Security" => Self::Security,
            "Network" => Self::Network,
            "Schedules" => Self::Schedules,
            "Tasks" | "Startup" => Self::List,
            "Storage" | "Backups" => Self::Storage,
            _ => return None,
        };
        Some(icon)
    }
}

/// A single sidebar entry held by the [`NavRegistry`](super::NavRegistry).
///
/// Identity inside the registry is the `(path, label)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// Display text.
    pub label: String,
    /// Target route or absolute link.
    pub path: String,
    /// Grouping key.
    pub section: String,
    /// Highlight only on exact path equality.
    pub exact: bool,
    pub icon: Option<NavIcon>,
}

impl NavEntry {
    pub fn new(
        label: impl Into<String>,
        path: impl Into<String>,
        section: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            section: section.into(),
            exact: false,
            icon: None,
        }
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn with_icon(mut self, icon: Option<NavIcon>) -> Self {
        self.icon = icon;
        self
    }

    /// Whether the entry carries both a destination and a label.
    pub fn is_complete(&self) -> bool {
        !self.path.trim().is_empty() && !self.label.trim().is_empty()
    }

    /// Whether `other` shares this entry's identity.
    #[inline]
    pub fn same_identity(&self, other: &NavEntry) -> bool {
        self.path == other.path && self.label == other.label
    }
}

/// A link declared by a page for its section of the sidebar.
///
/// `to` is an in-app route, `href` a plain link; when both are set `to` wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavLink {
    pub to: Option<String>,
    pub href: Option<String>,
    pub text: String,
    pub exact: bool,
    pub icon: Option<NavIcon>,
}

impl NavLink {
    /// In-app route link.
    pub fn to(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: Some(path.into()),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Plain (possibly external) link.
    pub fn href(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: Some(url.into()),
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn with_icon(mut self, icon: Option<NavIcon>) -> Self {
        self.icon = icon;
        self
    }

    /// The link's destination, ignoring blank values.
    pub fn destination(&self) -> Option<&str> {
        [self.to.as_deref(), self.href.as_deref()]
            .into_iter()
            .flatten()
            .find(|d| !d.trim().is_empty())
    }

    /// Whether the destination is an in-app route rather than a plain link.
    pub fn is_route(&self) -> bool {
        self.to.as_deref().is_some_and(|d| !d.trim().is_empty())
    }

    /// Convert into a registry entry for `section`.
    ///
    /// Returns `None` for links without a destination or without text; such
    /// links never reach the registry.
    pub fn to_entry(&self, section: &str) -> Option<NavEntry> {
        let path = self.destination()?;
        if self.text.trim().is_empty() {
            return None;
        }
        Some(NavEntry {
            label: self.text.clone(),
            path: path.to_string(),
            section: section.to_string(),
            exact: self.exact,
            icon: self.icon,
        })
    }
}

/// Convert a set of links into entries for `section`, dropping malformed ones.
pub fn entries_from_links<'a>(
    section: &'a str,
    links: impl IntoIterator<Item = &'a NavLink> + 'a,
) -> impl Iterator<Item = NavEntry> + 'a {
    links.into_iter().filter_map(move |link| link.to_entry(section))
}
