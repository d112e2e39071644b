use std::sync::Mutex;

use tonic::{Request, Response, Status};
use tracing::{info, warn};

use belot_scorer::config::ServerConfig;
use belot_scorer::proto::scorekeeper_server::{Scorekeeper, ScorekeeperServer};
use belot_scorer::proto::{
    ResetRequest, ResetResponse, SnapshotRequest, SnapshotResponse, StepRequest, StepResponse,
};
use belot_scorer::service::{
    snapshot_from_session, Command, CommandOutcome, PreferencesStore, Session,
};
use belot_scorer::telemetry;

// ============================================================================
// gRPC 服務
// ============================================================================

struct ScorekeeperService {
    session: Mutex<Session>,
    store: PreferencesStore,
}

impl ScorekeeperService {
    fn new(config: &ServerConfig) -> Self {
        let store = PreferencesStore::at(&config.prefs_path);
        Self {
            session: Mutex::new(Session::new(config.seed, store.clone())),
            store,
        }
    }
}

#[tonic::async_trait]
impl Scorekeeper for ScorekeeperService {
    async fn reset(
        &self,
        request: Request<ResetRequest>,
    ) -> Result<Response<ResetResponse>, Status> {
        let seed = request.into_inner().seed;
        let mut session = self
            .session
            .lock()
            .map_err(|_| Status::internal("lock error"))?;

        *session = Session::new(seed, self.store.clone());
        info!(seed, "session reset");

        Ok(Response::new(ResetResponse {
            snapshot: Some(snapshot_from_session(&session)),
        }))
    }

    async fn step(&self, request: Request<StepRequest>) -> Result<Response<StepResponse>, Status> {
        let StepRequest { command } = request.into_inner();
        let command = command.ok_or_else(|| Status::invalid_argument("missing command"))?;
        let command = Command::from_wire(command.command_type, command.value).map_err(|err| {
            warn!(command_type = command.command_type, error = %err, "malformed command");
            Status::invalid_argument(err.to_string())
        })?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| Status::internal("lock error"))?;

        let mut accepted = true;
        let mut prompt = String::new();
        let mut scored_points = -1i64;
        let mut victory_team = -1i32;

        match session.dispatch(command) {
            Ok(CommandOutcome::Scored(result)) => {
                scored_points = result.rounded;
            }
            Ok(CommandOutcome::HandApplied(outcome)) => {
                scored_points = outcome.points;
                victory_team = outcome.victory.map(|t| t.to_index() as i32).unwrap_or(-1);
            }
            Ok(_) => {}
            Err(err) => {
                // 前置條件不滿足：狀態不變，回傳提示給使用者
                accepted = false;
                prompt = err.to_string();
            }
        }

        Ok(Response::new(StepResponse {
            snapshot: Some(snapshot_from_session(&session)),
            accepted,
            prompt,
            scored_points,
            victory_team,
        }))
    }

    async fn get_snapshot(
        &self,
        _request: Request<SnapshotRequest>,
    ) -> Result<Response<SnapshotResponse>, Status> {
        let session = self
            .session
            .lock()
            .map_err(|_| Status::internal("lock error"))?;

        Ok(Response::new(SnapshotResponse {
            snapshot: Some(snapshot_from_session(&session)),
        }))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let config = ServerConfig::from_env()?;
    let service = ScorekeeperService::new(&config);

    info!(addr = %config.addr, prefs = %config.prefs_path.display(), "Belot scorekeeper gRPC server listening");

    tonic::transport::Server::builder()
        .add_service(ScorekeeperServer::new(service))
        .serve(config.addr)
        .await?;

    Ok(())
}
