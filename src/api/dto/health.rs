//! DTOs for the health check endpoints.

use serde::Serialize;

/// Response for the timed database probe.
///
/// The probe result is reported in-band: a reachable database yields the
/// round-trip seconds, an unreachable one the string `"Unavailable"`,
/// both under HTTP 200.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    #[serde(rename = "DB")]
    pub db: DbProbe,
}

/// Probe outcome, serialized untagged as either a float or a string.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DbProbe {
    Seconds(f64),
    Unavailable(&'static str),
}

impl DbProbe {
    pub fn from_elapsed(elapsed: Option<f64>) -> Self {
        match elapsed {
            Some(seconds) => DbProbe::Seconds(seconds),
            None => DbProbe::Unavailable("Unavailable"),
        }
    }
}

/// Response for the readiness probe.
#[derive(Debug, Serialize)]
pub struct PingDbResponse {
    pub db_ready: bool,
}
