use crate::api::model::{AnalyzeRequest, ValidationError};
use crate::storage::MemStorage;
use crate::workflow::runner::Runner;
use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn api_bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

fn validate(request: &AnalyzeRequest) -> Option<ValidationError> {
    if request.file_name.trim().is_empty() {
        return Some(ValidationError::for_field(
            "fileName must not be empty",
            "fileName",
        ));
    }
    if request.file_content.trim().is_empty() {
        return Some(ValidationError::for_field(
            "fileContent must not be empty",
            "fileContent",
        ));
    }
    None
}

fn handle_analyze(
    request: AnalyzeRequest,
    runner: &Runner,
    storage: &MemStorage,
) -> warp::reply::WithStatus<warp::reply::Json> {
    if let Some(error) = validate(&request) {
        return warp::reply::with_status(warp::reply::json(&error), StatusCode::BAD_REQUEST);
    }

    match runner.execute(&request.file_content) {
        Ok(report) => {
            let id = storage.create_analysis(&request.file_name, report.clone());
            info!("stored analysis {} for {}", id, request.file_name);
            warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)
        }
        Err(err) => {
            warn!("analyze failed for {}: {:#}", request.file_name, err);
            warp::reply::with_status(
                warp::reply::json(&ValidationError::new(format!("{:#}", err))),
                StatusCode::BAD_REQUEST,
            )
        }
    }
}

/// Hosts the analysis HTTP endpoint on a background thread and keeps
/// the append-only archive of accepted runs.
pub struct ApiBridge {
    storage: Arc<MemStorage>,
}

impl ApiBridge {
    pub fn new(runner: Arc<Runner>, port: u16) -> Self {
        let storage = Arc::new(MemStorage::new());
        let storage_for_filter = storage.clone();
        let storage_filter = warp::any().map(move || storage_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let analyze_route = warp::path!("api" / "analyze")
            .and(warp::post())
            .and(warp::body::json())
            .and(runner_filter)
            .and(storage_filter)
            .and_then(
                |request: AnalyzeRequest, runner: Arc<Runner>, storage: Arc<MemStorage>| async move {
                    Ok::<_, warp::Rejection>(handle_analyze(request, &runner, &storage))
                },
            );

        thread::spawn(move || {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(analyze_route).run(api_bind_address(port)).await;
            });
        });

        Self { storage }
    }

    pub fn publish_status(&self, message: &str) {
        println!("[API] {}", message);
    }

    pub fn stored_count(&self) -> usize {
        self.storage.len()
    }
}
