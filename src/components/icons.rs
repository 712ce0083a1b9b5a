//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use frostpanel_core::nav::NavIcon;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Analytics, LuCalendar as Schedules, LuChevronLeft as ChevronLeft,
        LuCog as Admin, LuCpu as Cpu, LuDatabase as Database, LuEthernetPort as Allocation,
        LuExternalLink as ExternalLink, LuFolder as Folder, LuHardDrive as Storage,
        LuLayers as Dashboard, LuList as List, LuLogOut as SignOut, LuMemoryStick as Memory,
        LuMenu as Menu, LuNetwork as Network, LuRefreshCw as Spinner, LuSearch as Search,
        LuServer as Server, LuSettings as Settings, LuShield as Security,
        LuTerminal as Terminal, LuUser as Account, LuUsers as Users, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRepeat as Spinner, BsBoxArrowRight as SignOut, BsBoxArrowUpRight as ExternalLink,
        BsCalendar as Schedules, BsChevronLeft as ChevronLeft, BsCpu as Cpu,
        BsDatabase as Database, BsEthernet as Allocation, BsFolderFill as Folder,
        BsGear as Settings, BsGearWideConnected as Admin, BsGraphUp as Analytics,
        BsHdd as Storage, BsHddNetwork as Network, BsLayers as Dashboard, BsList as Menu,
        BsListUl as List, BsMemory as Memory, BsPeople as Users, BsPerson as Account,
        BsSearch as Search, BsServer as Server, BsShield as Security, BsTerminal as Terminal,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(DASHBOARD, Dashboard);
themed_icon!(TERMINAL, Terminal);
themed_icon!(FOLDER, Folder);
themed_icon!(USERS, Users);
themed_icon!(SETTINGS, Settings);
themed_icon!(DATABASE, Database);
themed_icon!(ANALYTICS, Analytics);
themed_icon!(SECURITY, Security);
themed_icon!(NETWORK, Network);
themed_icon!(SCHEDULES, Schedules);
themed_icon!(LIST, List);
themed_icon!(STORAGE, Storage);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(SEARCH, Search);
themed_icon!(ADMIN, Admin);
themed_icon!(ACCOUNT, Account);
themed_icon!(SIGN_OUT, SignOut);
themed_icon!(MENU, Menu);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CLOSE, Close);
themed_icon!(CPU, Cpu);
themed_icon!(MEMORY, Memory);
themed_icon!(ALLOCATION, Allocation);
themed_icon!(SERVER, Server);
themed_icon!(SPINNER, Spinner);

/// Glyph for a symbolic navigation icon.
pub const fn nav_icon(icon: NavIcon) -> Icon {
    match icon {
        NavIcon::Dashboard => DASHBOARD,
        NavIcon::Terminal => TERMINAL,
        NavIcon::Folder => FOLDER,
        NavIcon::Users => USERS,
        NavIcon::Settings => SETTINGS,
        NavIcon::Database => DATABASE,
        NavIcon::Analytics => ANALYTICS,
        NavIcon::Security => SECURITY,
        NavIcon::Network => NETWORK,
        NavIcon::Schedules => SCHEDULES,
        NavIcon::List => LIST,
        NavIcon::Storage => STORAGE,
        NavIcon::ExternalLink => EXTERNAL_LINK,
        NavIcon::Search => SEARCH,
        NavIcon::Admin => ADMIN,
        NavIcon::Account => ACCOUNT,
        NavIcon::SignOut => SIGN_OUT,
    }
}
