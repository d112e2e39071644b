//! gRPC 訊息定義
//!
//! 訊息直接以 prost derive 定義；服務 stub 由 build.rs 產生。

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResetRequest {
    #[prost(uint64, tag = "1")]
    pub seed: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResetResponse {
    #[prost(message, optional, tag = "1")]
    pub snapshot: ::core::option::Option<Snapshot>,
}

/// 一個使用者指令：`command_type` 見 `COMMAND_TYPE_*`，`value` 依類型解讀
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Command {
    #[prost(int32, tag = "1")]
    pub command_type: i32,
    #[prost(int64, tag = "2")]
    pub value: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StepRequest {
    #[prost(message, optional, tag = "1")]
    pub command: ::core::option::Option<Command>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StepResponse {
    #[prost(message, optional, tag = "1")]
    pub snapshot: ::core::option::Option<Snapshot>,
    /// 前置條件不滿足時為 false，並附上提示
    #[prost(bool, tag = "2")]
    pub accepted: bool,
    #[prost(string, tag = "3")]
    pub prompt: ::prost::alloc::string::String,
    /// 本次指令計算出的分數（submit / confirm），否則 -1
    #[prost(int64, tag = "4")]
    pub scored_points: i64,
    /// 本次指令觸發的勝利隊伍，否則 -1
    #[prost(int32, tag = "5")]
    pub victory_team: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SnapshotRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SnapshotResponse {
    #[prost(message, optional, tag = "1")]
    pub snapshot: ::core::option::Option<Snapshot>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HandEntry {
    #[prost(int32, tag = "1")]
    pub team: i32,
    #[prost(int64, tag = "2")]
    pub points: i64,
    #[prost(string, tag = "3")]
    pub timestamp: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Snapshot {
    // 比賽
    #[prost(int64, tag = "1")]
    pub my_team_score: i64,
    #[prost(int64, tag = "2")]
    pub opponent_score: i64,
    #[prost(uint32, tag = "3")]
    pub my_team_wins: u32,
    #[prost(uint32, tag = "4")]
    pub opponent_wins: u32,
    #[prost(int32, tag = "5")]
    pub dealer_seat: i32,
    #[prost(bool, tag = "6")]
    pub dealer_set: bool,
    #[prost(int32, tag = "7")]
    pub victory_team: i32,

    // 輸入流程
    #[prost(int32, tag = "8")]
    pub mode: i32,
    #[prost(bool, tag = "9")]
    pub contra: bool,
    #[prost(bool, tag = "10")]
    pub recontra: bool,
    #[prost(int32, tag = "11")]
    pub stage: i32,
    #[prost(int32, tag = "12")]
    pub entry_source: i32,
    #[prost(int64, tag = "13")]
    pub pending_raw: i64,
    #[prost(int64, tag = "14")]
    pub pending_rounded: i64,
    #[prost(int64, tag = "15")]
    pub pending_from_scan: i64,
    #[prost(int64, tag = "16")]
    pub pending_bonus: i64,
    #[prost(int64, tag = "17")]
    pub manual_points: i64,
    #[prost(int64, tag = "18")]
    pub displayed_points: i64,

    // 其他
    #[prost(bool, tag = "19")]
    pub dark_mode: bool,
    #[prost(bool, repeated, tag = "20")]
    pub command_mask: ::prost::alloc::vec::Vec<bool>,
    /// 最新在前
    #[prost(message, repeated, tag = "21")]
    pub history: ::prost::alloc::vec::Vec<HandEntry>,
}

pub mod scorekeeper {
    include!(concat!(env!("OUT_DIR"), "/belot.Scorekeeper.rs"));
}

pub use scorekeeper::scorekeeper_server;
