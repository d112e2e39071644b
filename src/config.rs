//! 伺服器設定（環境變數）
//!
//! - `BELOT_HOST`: 監聽位址，預設 `127.0.0.1`
//! - `BELOT_PORT`: 監聽埠，預設 `50051`
//! - `BELOT_PREFS_PATH`: 偏好設定檔，預設 `belot_prefs.json`
//! - `BELOT_SEED`: 模擬掃描的亂數種子，未設定時隨機

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 50051;
pub const DEFAULT_PREFS_PATH: &str = "belot_prefs.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub prefs_path: PathBuf,
    pub seed: u64,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 以任意查找函式建立（測試不需動到行程環境）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("BELOT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("BELOT_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "BELOT_PORT",
                expected: "a valid port number",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };
        let addr_text = format!("{host}:{port}");
        let addr = addr_text.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
            name: "BELOT_HOST",
            expected: "an IP address",
            value: host,
        })?;

        let prefs_path = lookup("BELOT_PREFS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH));

        let seed = match lookup("BELOT_SEED") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "BELOT_SEED",
                expected: "an unsigned integer",
                value: raw,
            })?,
            None => rand::random(),
        };

        Ok(Self {
            addr,
            prefs_path,
            seed,
        })
    }
}
