//! Belot 計分器
//!
//! - `game`: 計分核心（進位、比賽狀態、發牌者、紀錄）
//! - `service`: 工作階段與指令流程
//! - `proto`: gRPC 訊息

pub mod config;
pub mod game;
pub mod proto;
pub mod service;
pub mod telemetry;
