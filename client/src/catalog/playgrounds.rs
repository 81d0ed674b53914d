//! Cloud sandbox playground catalog entries.

#[cfg(test)]
#[path = "playgrounds_test.rs"]
mod playgrounds_test;

/// One hand-authored sandbox playground tile.
#[derive(Clone, Copy, Debug)]
pub struct PlaygroundEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Runtime image label shown on the tile badge.
    pub runtime: &'static str,
    pub vcpus: u8,
    pub memory_gb: u8,
    pub session_minutes: u16,
}

/// Fixed summary figures for the sandbox page header.
pub const SUMMARY_STATS: &[(&str, &str)] = &[
    ("Environments", "8"),
    ("Median boot", "11 s"),
    ("Uptime", "99.9%"),
];

/// The playground catalog, in display order.
pub const PLAYGROUNDS: &[PlaygroundEntry] = &[
    PlaygroundEntry {
        id: "sbx-ubuntu-workbench",
        title: "Ubuntu Workbench",
        description: "A plain Ubuntu LTS shell with build tools preinstalled for scripting practice.",
        runtime: "Ubuntu 24.04",
        vcpus: 2,
        memory_gb: 4,
        session_minutes: 60,
    },
    PlaygroundEntry {
        id: "sbx-postgres-lab",
        title: "Postgres Lab",
        description: "A seeded PostgreSQL instance with psql and sample schemas for query drills.",
        runtime: "PostgreSQL 16",
        vcpus: 2,
        memory_gb: 4,
        session_minutes: 45,
    },
    PlaygroundEntry {
        id: "sbx-container-host",
        title: "Container Host",
        description: "A single-node container runtime for image, volume, and network exercises.",
        runtime: "Docker 27",
        vcpus: 4,
        memory_gb: 8,
        session_minutes: 60,
    },
    PlaygroundEntry {
        id: "sbx-k8s-cluster",
        title: "Kubernetes Cluster",
        description: "A three-node cluster with kubectl configured for orchestration labs.",
        runtime: "Kubernetes 1.31",
        vcpus: 6,
        memory_gb: 12,
        session_minutes: 90,
    },
];
