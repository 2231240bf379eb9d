use serde::Serialize;

use crate::services::status::StatusSnapshot;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub monitor: StatusSnapshot,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
