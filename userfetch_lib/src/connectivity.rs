//! Connectivity probing, standing in for a browser's online flag.

use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

/// Reports whether the device currently has network connectivity.
pub trait ConnectivityProbe {
    fn is_online(&self) -> bool;
}

/// Probes well-known public DNS endpoints over TCP. Reports offline only
/// when none of them can be reached within the timeout.
pub struct SystemProbe {
    timeout: Duration,
}

impl SystemProbe {
    const PROBE_ADDRS: [&'static str; 2] = ["1.1.1.1:53", "8.8.8.8:53"];

    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(1),
        }
    }
}

impl Default for SystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectivityProbe for SystemProbe {
    fn is_online(&self) -> bool {
        Self::PROBE_ADDRS.iter().any(|addr| {
            let Ok(addr) = addr.parse::<SocketAddr>() else {
                return false;
            };
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(_) => true,
                Err(e) => {
                    tracing::debug!("Connectivity probe to {} failed: {}", addr, e);
                    false
                }
            }
        })
    }
}

/// Probe with a pinned answer, for tests and deterministic demos.
pub struct FixedProbe(pub bool);

impl ConnectivityProbe for FixedProbe {
    fn is_online(&self) -> bool {
        self.0
    }
}
