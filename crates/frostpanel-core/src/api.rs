//! Wire envelopes returned by the panel's client API and their conversion
//! into domain records.
//!
//! Single objects arrive as `{"object": "...", "attributes": {...}}`, lists as
//! `{"object": "list", "data": [...], "meta": {...}}`.

use serde::Deserialize;

use crate::server::{Allocation, Limits, PowerState, Server, ServerStats, ServerStatus};

/// Client API base path.
pub const CLIENT_BASE: &str = "/api/client";

pub fn server_url(id: &str) -> String {
    format!("{}/servers/{}", CLIENT_BASE, id)
}

pub fn server_resources_url(uuid: &str) -> String {
    format!("{}/servers/{}/resources", CLIENT_BASE, uuid)
}

#[derive(Clone, Debug, Deserialize)]
pub struct FractalObject<T> {
    pub attributes: T,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FractalList<T> {
    pub data: Vec<FractalObject<T>>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

impl<T> FractalList<T> {
    pub fn into_items(self) -> impl Iterator<Item = T> {
        self.data.into_iter().map(|o| o.attributes)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListMeta {
    pub pagination: Option<Pagination>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AllocationAttributes {
    pub id: u64,
    pub ip: String,
    pub ip_alias: Option<String>,
    pub port: u16,
    #[serde(default)]
    pub is_default: bool,
}

impl From<AllocationAttributes> for Allocation {
    fn from(a: AllocationAttributes) -> Self {
        Self {
            id: a.id,
            ip: a.ip,
            alias: a.ip_alias,
            port: a.port,
            is_default: a.is_default,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServerRelationships {
    pub allocations: Option<FractalList<AllocationAttributes>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerAttributes {
    pub identifier: String,
    pub internal_id: u64,
    pub uuid: String,
    pub name: String,
    pub node: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ServerStatus>,
    #[serde(default)]
    pub is_transferring: bool,
    pub limits: Limits,
    #[serde(default)]
    pub docker_image: String,
    #[serde(default)]
    pub relationships: ServerRelationships,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServerMeta {
    #[serde(default)]
    pub is_server_owner: bool,
    #[serde(default)]
    pub user_permissions: Vec<String>,
}

/// `GET /api/client/servers/<id>`
#[derive(Clone, Debug, Deserialize)]
pub struct ServerResponse {
    pub attributes: ServerAttributes,
    #[serde(default)]
    pub meta: ServerMeta,
}

impl ServerAttributes {
    /// Convert into a [`Server`] holding `permissions`.
    pub fn into_server(self, permissions: Vec<String>) -> Server {
        let allocations = self
            .relationships
            .allocations
            .map(|list| list.into_items().map(Allocation::from).collect())
            .unwrap_or_default();
        Server {
            id: self.identifier,
            internal_id: self.internal_id,
            uuid: self.uuid,
            name: self.name,
            node: self.node,
            description: self.description.filter(|d| !d.trim().is_empty()),
            status: self.status,
            is_transferring: self.is_transferring,
            limits: self.limits,
            allocations,
            docker_image: self.docker_image,
            permissions,
        }
    }
}

impl From<ServerResponse> for Server {
    fn from(response: ServerResponse) -> Self {
        response
            .attributes
            .into_server(response.meta.user_permissions)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResourceUsage {
    #[serde(default)]
    pub memory_bytes: u64,
    #[serde(default)]
    pub cpu_absolute: f64,
    #[serde(default)]
    pub disk_bytes: u64,
    #[serde(default)]
    pub network_rx_bytes: u64,
    #[serde(default)]
    pub network_tx_bytes: u64,
    #[serde(default)]
    pub uptime: u64,
}

/// `GET /api/client/servers/<uuid>/resources`, inside the object envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct ResourceAttributes {
    pub current_state: PowerState,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub resources: ResourceUsage,
}

impl From<ResourceAttributes> for ServerStats {
    fn from(a: ResourceAttributes) -> Self {
        Self {
            status: a.current_state,
            is_suspended: a.is_suspended,
            memory_usage_in_bytes: a.resources.memory_bytes,
            cpu_usage_percent: a.resources.cpu_absolute,
            disk_usage_in_bytes: a.resources.disk_bytes,
            network_rx_in_bytes: a.resources.network_rx_bytes,
            network_tx_in_bytes: a.resources.network_tx_bytes,
            uptime: a.resources.uptime,
        }
    }
}

impl FractalList<ServerAttributes> {
    /// Servers of a list response. List entries carry no permissions.
    pub fn into_servers(self) -> Vec<Server> {
        self.into_items()
            .map(|attributes| attributes.into_server(Vec::new()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVER: &str = r#"{
        "object": "server",
        "attributes": {
            "server_owner": true,
            "identifier": "1a7ce997",
            "internal_id": 4,
            "uuid": "1a7ce997-259b-452e-8b4e-cecc464142ca",
            "name": "Survival",
            "node": "node-1",
            "description": "",
            "limits": {"memory": 1024, "swap": -1, "disk": 2048, "io": 500, "cpu": 100, "threads": null},
            "docker_image": "ghcr.io/pterodactyl/yolks:java_17",
            "status": "restoring_backup",
            "is_transferring": false,
            "relationships": {
                "allocations": {
                    "object": "list",
                    "data": [
                        {"object": "allocation", "attributes": {"id": 1, "ip": "10.0.0.1", "ip_alias": null, "port": 25565, "notes": null, "is_default": true}}
                    ]
                }
            }
        },
        "meta": {"is_server_owner": true, "user_permissions": ["*"]}
    }"#;

    #[test]
    fn test_server_response_conversion() {
        let response: ServerResponse = serde_json::from_str(SERVER).unwrap();
        let server = Server::from(response);

        assert_eq!(server.id, "1a7ce997");
        assert_eq!(server.internal_id, 4);
        assert_eq!(server.description, None);
        assert_eq!(server.status, Some(ServerStatus::RestoringBackup));
        assert_eq!(server.limits.swap, -1);
        assert_eq!(server.default_allocations(), vec!["10.0.0.1:25565"]);
        assert_eq!(server.permissions, vec!["*"]);
    }

    #[test]
    fn test_unknown_status_still_decodes() {
        let body = SERVER.replace("restoring_backup", "node_under_maintenance");
        let response: ServerResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(response.attributes.status, Some(ServerStatus::Unknown));
    }

    #[test]
    fn test_resource_usage_conversion() {
        let body = r#"{
            "object": "stats",
            "attributes": {
                "current_state": "running",
                "is_suspended": false,
                "resources": {"memory_bytes": 536870912, "cpu_absolute": 12.5, "disk_bytes": 1048576, "network_rx_bytes": 10, "network_tx_bytes": 20, "uptime": 3600}
            }
        }"#;
        let object: FractalObject<ResourceAttributes> = serde_json::from_str(body).unwrap();
        let stats = ServerStats::from(object.attributes);

        assert_eq!(stats.status, PowerState::Running);
        assert_eq!(stats.memory_usage_in_bytes, 536_870_912);
        assert_eq!(stats.cpu_usage_percent, 12.5);
        assert_eq!(stats.uptime, 3600);
    }

    #[test]
    fn test_server_list() {
        let body = format!(
            r#"{{"object": "list", "data": [{}], "meta": {{"pagination": {{"total": 1, "count": 1, "per_page": 50, "current_page": 1, "total_pages": 1}}}}}}"#,
            SERVER
        );
        let list: FractalList<ServerAttributes> = serde_json::from_str(&body).unwrap();
        let servers = list.into_servers();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].name, "Survival");
        assert!(servers[0].permissions.is_empty());
    }

    #[test]
    fn test_urls() {
        assert_eq!(server_url("abc"), "/api/client/servers/abc");
        assert_eq!(
            server_resources_url("abc"),
            "/api/client/servers/abc/resources"
        );
    }
}
