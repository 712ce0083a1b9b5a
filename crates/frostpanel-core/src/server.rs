//! Server and resource-usage records, and the values the server row derives
//! from them.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::format::{bytes_to_string, format_percent, ip, mb_to_bytes};

/// Usage at or above this share of the limit is shown as an alarm.
pub const ALARM_THRESHOLD: f64 = 0.9;

/// Lifecycle status reported by the panel; `None` on a server means normal.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerStatus {
    Installing,
    InstallFailed,
    ReinstallFailed,
    Suspended,
    RestoringBackup,
    #[serde(other)]
    Unknown,
}

/// Power state reported by the resource endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    #[default]
    Offline,
    Starting,
    Running,
    Stopping,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub id: u64,
    pub ip: String,
    pub alias: Option<String>,
    pub port: u16,
    pub is_default: bool,
}

impl Allocation {
    /// "alias:port", or "ip:port" with IPv6 addresses bracketed.
    pub fn display(&self) -> String {
        let host = self
            .alias
            .as_deref()
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| ip(&self.ip));
        format!("{}:{}", host, self.port)
    }
}

/// Resource limits; zero means unlimited. Memory and disk are in megabytes,
/// CPU in percent of one core.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Limits {
    pub memory: u64,
    #[serde(default)]
    pub swap: i64,
    pub disk: u64,
    #[serde(default)]
    pub io: u64,
    pub cpu: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Server {
    /// Short identifier used in URLs.
    pub id: String,
    pub internal_id: u64,
    pub uuid: String,
    pub name: String,
    pub node: String,
    pub description: Option<String>,
    pub status: Option<ServerStatus>,
    pub is_transferring: bool,
    pub limits: Limits,
    pub allocations: Vec<Allocation>,
    pub docker_image: String,
    /// Subuser permissions of the current user on this server.
    pub permissions: Vec<String>,
}

impl Server {
    /// Labels of the default allocations.
    pub fn default_allocations(&self) -> Vec<String> {
        self.allocations
            .iter()
            .filter(|a| a.is_default)
            .map(Allocation::display)
            .collect()
    }

    /// Suspended, installing, restoring or transferring.
    pub fn in_conflict_state(&self) -> bool {
        self.status.is_some() || self.is_transferring
    }

    /// Route of the server's console page.
    pub fn route(&self) -> String {
        format!("/server/{}", self.id)
    }
}

/// Title and message of the screen shown instead of a server page while the
/// server is in a conflict state.
pub fn conflict_notice(server: &Server) -> Option<(&'static str, &'static str)> {
    if server.is_transferring {
        return Some((
            "Transferring",
            "Your server is being transferred to a new node, please check back later.",
        ));
    }
    let notice = match server.status.as_ref()? {
        ServerStatus::Suspended => (
            "Server Suspended",
            "This server is suspended and cannot be accessed.",
        ),
        ServerStatus::Installing | ServerStatus::InstallFailed | ServerStatus::ReinstallFailed => (
            "Installing",
            "Your server should be ready soon, please try again in a few minutes.",
        ),
        ServerStatus::RestoringBackup => (
            "Restoring from Backup",
            "Your server is currently being restored from a backup, please check back in a few minutes.",
        ),
        ServerStatus::Unknown => (
            "Unavailable",
            "This server cannot be accessed right now, please check back later.",
        ),
    };
    Some(notice)
}

/// Resource usage snapshot from the resource endpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerStats {
    pub status: PowerState,
    pub is_suspended: bool,
    pub memory_usage_in_bytes: u64,
    pub cpu_usage_percent: f64,
    pub disk_usage_in_bytes: u64,
    pub network_rx_in_bytes: u64,
    pub network_tx_in_bytes: u64,
    pub uptime: u64,
}

/// Whether polling should stop for this server.
pub fn is_suspended(server: &Server, stats: Option<&ServerStats>) -> bool {
    stats.is_some_and(|s| s.is_suspended) || server.status == Some(ServerStatus::Suspended)
}

/// `current` bytes against a megabyte `limit`; unlimited never alarms.
fn is_alarm_state(current: u64, limit_mb: u64) -> bool {
    limit_mb > 0 && current as f64 / mb_to_bytes(limit_mb) as f64 >= ALARM_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceAlarms {
    pub cpu: bool,
    pub memory: bool,
    pub disk: bool,
}

/// Which resources are close to their limit.
pub fn alarms(limits: &Limits, stats: Option<&ServerStats>) -> ResourceAlarms {
    let Some(stats) = stats else {
        return ResourceAlarms::default();
    };
    ResourceAlarms {
        cpu: limits.cpu > 0 && stats.cpu_usage_percent >= limits.cpu as f64 * ALARM_THRESHOLD,
        memory: is_alarm_state(stats.memory_usage_in_bytes, limits.memory),
        disk: is_alarm_state(stats.disk_usage_in_bytes, limits.disk),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LimitLabels {
    pub cpu: String,
    pub memory: String,
    pub disk: String,
}

/// "of ..." captions under each resource.
pub fn limit_labels(limits: &Limits) -> LimitLabels {
    let sized = |mb: u64| {
        if mb == 0 {
            "Unlimited".to_string()
        } else {
            bytes_to_string(mb_to_bytes(mb))
        }
    };
    LimitLabels {
        cpu: if limits.cpu == 0 {
            "Unlimited".to_string()
        } else {
            format!("{} %", limits.cpu)
        },
        memory: sized(limits.memory),
        disk: sized(limits.disk),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UsagePercentages {
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
}

/// Usage as a percentage of each limit; zero when unlimited or unknown.
pub fn usage_percentages(limits: &Limits, stats: Option<&ServerStats>) -> UsagePercentages {
    let Some(stats) = stats else {
        return UsagePercentages::default();
    };
    let share = |used: u64, limit_mb: u64| {
        if limit_mb == 0 {
            0.0
        } else {
            used as f64 / mb_to_bytes(limit_mb) as f64 * 100.0
        }
    };
    UsagePercentages {
        cpu: stats.cpu_usage_percent,
        memory: share(stats.memory_usage_in_bytes, limits.memory),
        disk: share(stats.disk_usage_in_bytes, limits.disk),
    }
}

/// Width of a resource bar in percent; never thinner than 5 or wider than 100.
pub fn bar_width(percentage: f64) -> f64 {
    percentage.clamp(5.0, 100.0)
}

/// Current usage figures shown next to each resource icon.
pub fn usage_labels(stats: &ServerStats) -> (String, String, String) {
    (
        format_percent(stats.cpu_usage_percent),
        bytes_to_string(stats.memory_usage_in_bytes),
        bytes_to_string(stats.disk_usage_in_bytes),
    )
}

/// Badge colouring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Suspended,
    Transferring,
    Installing,
    Neutral,
}

/// What the usage area of a server row shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowDisplay {
    /// Status badge instead of usage.
    Badge { tone: BadgeTone, label: &'static str },
    /// First stats request still pending.
    Loading,
    /// Usage figures.
    Stats,
}

/// Decide what the usage area shows.
pub fn row_display(server: &Server, stats: Option<&ServerStats>, suspended: bool) -> RowDisplay {
    if suspended {
        let label = if server.status == Some(ServerStatus::Suspended) {
            "Suspended"
        } else {
            "Connection Error"
        };
        return RowDisplay::Badge {
            tone: BadgeTone::Suspended,
            label,
        };
    }
    if stats.is_some() {
        return RowDisplay::Stats;
    }
    if server.is_transferring {
        return RowDisplay::Badge {
            tone: BadgeTone::Transferring,
            label: "Transferring",
        };
    }
    match &server.status {
        Some(ServerStatus::Installing) => RowDisplay::Badge {
            tone: BadgeTone::Installing,
            label: "Installing",
        },
        Some(ServerStatus::RestoringBackup) => RowDisplay::Badge {
            tone: BadgeTone::Neutral,
            label: "Restoring Backup",
        },
        Some(_) => RowDisplay::Badge {
            tone: BadgeTone::Neutral,
            label: "Unavailable",
        },
        None => RowDisplay::Loading,
    }
}

/// Colour of the status strip at the edge of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Danger,
    Ok,
    Warning,
}

pub fn status_tone(state: Option<PowerState>) -> StatusTone {
    match state {
        None | Some(PowerState::Offline) => StatusTone::Danger,
        Some(PowerState::Running) => StatusTone::Ok,
        Some(_) => StatusTone::Warning,
    }
}

/// Characters a URI component keeps as they are.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Thumbnail for a server, picked from its container image.
pub fn image_for(server: &Server) -> String {
    let image = server.docker_image.to_lowercase();
    let text = [
        ("minecraft", "MC"),
        ("valheim", "VH"),
        ("terraria", "TR"),
        ("rust", "RS"),
    ]
    .into_iter()
    .find(|(game, _)| image.contains(game))
    .map(|(_, text)| text.to_string())
    .unwrap_or_else(|| {
        server
            .name
            .chars()
            .next()
            .map(|c| utf8_percent_encode(&c.to_string(), URI_COMPONENT).to_string())
            .unwrap_or_default()
    });
    format!("/api/placeholder/160/160?text={}", text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn server() -> Server {
        Server {
            id: "1a7ce997".into(),
            internal_id: 4,
            uuid: "1a7ce997-259b-452e-8b4e-cecc464142ca".into(),
            name: "Survival".into(),
            node: "node-1".into(),
            description: None,
            status: None,
            is_transferring: false,
            limits: Limits {
                memory: 1024,
                swap: 0,
                disk: 2048,
                io: 500,
                cpu: 100,
            },
            allocations: vec![
                Allocation {
                    id: 1,
                    ip: "2001:db8::1".into(),
                    alias: None,
                    port: 25565,
                    is_default: true,
                },
                Allocation {
                    id: 2,
                    ip: "10.0.0.2".into(),
                    alias: None,
                    port: 25566,
                    is_default: false,
                },
            ],
            docker_image: "ghcr.io/pterodactyl/yolks:java_17".into(),
            permissions: vec!["*".into()],
        }
    }

    fn stats(memory: u64, cpu: f64, disk: u64) -> ServerStats {
        ServerStats {
            status: PowerState::Running,
            memory_usage_in_bytes: memory,
            cpu_usage_percent: cpu,
            disk_usage_in_bytes: disk,
            ..ServerStats::default()
        }
    }

    #[test]
    fn test_default_allocations() {
        assert_eq!(server().default_allocations(), vec!["[2001:db8::1]:25565"]);

        let mut aliased = server();
        aliased.allocations[0].alias = Some("play.example.com".into());
        assert_eq!(aliased.default_allocations(), vec!["play.example.com:25565"]);
    }

    #[test]
    fn test_alarms() {
        let s = server();
        let busy = stats(mb_to_bytes(950), 95.0, mb_to_bytes(100));
        assert_eq!(
            alarms(&s.limits, Some(&busy)),
            ResourceAlarms {
                cpu: true,
                memory: true,
                disk: false
            }
        );
        assert_eq!(alarms(&s.limits, None), ResourceAlarms::default());
    }

    #[test]
    fn test_unlimited_never_alarms() {
        let limits = Limits::default();
        let busy = stats(u64::MAX / 2, 900.0, u64::MAX / 2);
        assert_eq!(alarms(&limits, Some(&busy)), ResourceAlarms::default());
    }

    #[test]
    fn test_limit_labels() {
        let labels = limit_labels(&server().limits);
        assert_eq!(labels.cpu, "100 %");
        assert_eq!(labels.memory, "1 GiB");
        assert_eq!(labels.disk, "2 GiB");

        let unlimited = limit_labels(&Limits::default());
        assert_eq!(unlimited.cpu, "Unlimited");
        assert_eq!(unlimited.memory, "Unlimited");
    }

    #[test]
    fn test_usage_percentages_and_bars() {
        let s = server();
        let pct = usage_percentages(&s.limits, Some(&stats(mb_to_bytes(512), 12.5, 0)));
        assert_eq!(pct.memory, 50.0);
        assert_eq!(pct.cpu, 12.5);
        assert_eq!(pct.disk, 0.0);
        assert_eq!(bar_width(pct.disk), 5.0);
        assert_eq!(bar_width(250.0), 100.0);
    }

    #[test]
    fn test_row_display() {
        let mut s = server();
        assert_eq!(row_display(&s, None, false), RowDisplay::Loading);
        assert_eq!(
            row_display(&s, Some(&ServerStats::default()), false),
            RowDisplay::Stats
        );

        s.status = Some(ServerStatus::Installing);
        assert_eq!(
            row_display(&s, None, false),
            RowDisplay::Badge {
                tone: BadgeTone::Installing,
                label: "Installing"
            }
        );

        s.is_transferring = true;
        assert_eq!(
            row_display(&s, None, false),
            RowDisplay::Badge {
                tone: BadgeTone::Transferring,
                label: "Transferring"
            }
        );

        s.status = Some(ServerStatus::Suspended);
        assert!(is_suspended(&s, None));
        assert_eq!(
            row_display(&s, None, true),
            RowDisplay::Badge {
                tone: BadgeTone::Suspended,
                label: "Suspended"
            }
        );
    }

    #[test]
    fn test_suspended_from_stats_reads_connection_error() {
        let s = server();
        let suspended_stats = ServerStats {
            is_suspended: true,
            ..ServerStats::default()
        };
        assert!(is_suspended(&s, Some(&suspended_stats)));
        assert_eq!(
            row_display(&s, Some(&suspended_stats), true),
            RowDisplay::Badge {
                tone: BadgeTone::Suspended,
                label: "Connection Error"
            }
        );
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(status_tone(None), StatusTone::Danger);
        assert_eq!(status_tone(Some(PowerState::Running)), StatusTone::Ok);
        assert_eq!(status_tone(Some(PowerState::Starting)), StatusTone::Warning);
    }

    #[test]
    fn test_image_for() {
        let mut s = server();
        assert_eq!(image_for(&s), "/api/placeholder/160/160?text=S");
        s.docker_image = "ghcr.io/parkervcp/games:Valheim".into();
        assert_eq!(image_for(&s), "/api/placeholder/160/160?text=VH");
        s.docker_image = String::new();
        s.name = "Ärger".into();
        assert_eq!(image_for(&s), "/api/placeholder/160/160?text=%C3%84");
        s.name = " spaced".into();
        assert_eq!(image_for(&s), "/api/placeholder/160/160?text=%20");
        s.name = "(paren)".into();
        assert_eq!(image_for(&s), "/api/placeholder/160/160?text=(");
        s.name = "&amp".into();
        assert_eq!(image_for(&s), "/api/placeholder/160/160?text=%26");
    }

    #[test]
    fn test_conflict_state() {
        let mut s = server();
        assert!(!s.in_conflict_state());
        s.is_transferring = true;
        assert!(s.in_conflict_state());
    }

    #[test]
    fn test_conflict_notice() {
        let mut s = server();
        assert_eq!(conflict_notice(&s), None);
        s.status = Some(ServerStatus::InstallFailed);
        assert_eq!(conflict_notice(&s).map(|(title, _)| title), Some("Installing"));
        s.status = Some(ServerStatus::Suspended);
        assert_eq!(conflict_notice(&s).map(|(title, _)| title), Some("Server Suspended"));
        s.is_transferring = true;
        assert_eq!(conflict_notice(&s).map(|(title, _)| title), Some("Transferring"));
    }
}
