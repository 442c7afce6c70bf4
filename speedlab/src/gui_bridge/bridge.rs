use crate::gui_bridge::model::{
    AskRequest, AskResponse, ErrorReply, ParametersRequest, SessionView,
};
use crate::workflow::runner::Runner;
use anyhow::Context;
use log::{info, warn};
use serde_json::json;
use speedcore::chat::SessionStore;
use speedcore::ModelParameters;
use std::{
    net::SocketAddr,
    sync::{Arc, PoisonError, RwLock},
};
use warp::{http::StatusCode, Filter};

type SharedStore = Arc<RwLock<SessionStore>>;

fn unknown_session(id: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorReply::new(format!("unknown session {}", id))),
        StatusCode::NOT_FOUND,
    )
}

/// HTTP surface over per-session render cycles and chat transcripts.
#[derive(Clone)]
pub struct GuiBridge {
    store: SharedStore,
    runner: Runner,
    defaults: ModelParameters,
}

impl GuiBridge {
    pub fn new(runner: Runner, defaults: ModelParameters) -> Self {
        Self {
            store: Arc::new(RwLock::new(SessionStore::with_defaults(defaults))),
            runner,
            defaults,
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let store = self.store.clone();
        let store_filter = warp::any().map(move || store.clone());
        let runner = self.runner.clone();
        let runner_filter = warp::any().map(move || runner.clone());
        let defaults = self.defaults;

        let default_report = warp::path("report")
            .and(warp::path::end())
            .and(warp::get())
            .and(runner_filter.clone())
            .map(move |runner: Runner| warp::reply::json(&runner.execute(&defaults)));

        let set_parameters = warp::path!("session" / String / "parameters")
            .and(warp::post())
            .and(warp::body::json())
            .and(store_filter.clone())
            .and(runner_filter.clone())
            .map(
                |id: String, body: ParametersRequest, store: SharedStore, runner: Runner| {
                    match ModelParameters::new(body.initial_speed, body.rate_percent, body.hours) {
                        Ok(params) => {
                            let mut guard = store.write().unwrap_or_else(PoisonError::into_inner);
                            let session = guard.session_mut(&id);
                            session.set_parameters(params);
                            let report = session.render(runner.builder());
                            info!("session {} -> {}", id, report.summary);
                            warp::reply::with_status(warp::reply::json(&report), StatusCode::OK)
                        }
                        Err(err) => {
                            warn!("session {} rejected parameters: {}", id, err);
                            warp::reply::with_status(
                                warp::reply::json(&ErrorReply::new(err.to_string())),
                                StatusCode::BAD_REQUEST,
                            )
                        }
                    }
                },
            );

        let session_report = warp::path!("session" / String / "report")
            .and(warp::get())
            .and(store_filter.clone())
            .and(runner_filter)
            .map(|id: String, store: SharedStore, runner: Runner| {
                let guard = store.read().unwrap_or_else(PoisonError::into_inner);
                match guard.get(&id) {
                    Some(session) => warp::reply::with_status(
                        warp::reply::json(&session.render(runner.builder())),
                        StatusCode::OK,
                    ),
                    None => unknown_session(&id),
                }
            });

        let ask = warp::path!("session" / String / "ask")
            .and(warp::post())
            .and(warp::body::json())
            .and(store_filter.clone())
            .map(|id: String, body: AskRequest, store: SharedStore| {
                let mut guard = store.write().unwrap_or_else(PoisonError::into_inner);
                let session = guard.session_mut(&id);
                let response = session.ask(&body.question).map(str::to_string);
                warp::reply::json(&AskResponse {
                    response,
                    transcript: session.transcript().messages().to_vec(),
                })
            });

        let transcript = warp::path!("session" / String / "transcript")
            .and(warp::get())
            .and(store_filter.clone())
            .map(|id: String, store: SharedStore| {
                let guard = store.read().unwrap_or_else(PoisonError::into_inner);
                match guard.get(&id) {
                    Some(session) => warp::reply::with_status(
                        warp::reply::json(&session.transcript().messages()),
                        StatusCode::OK,
                    ),
                    None => unknown_session(&id),
                }
            });

        let session_view = warp::path!("session" / String)
            .and(warp::get())
            .and(store_filter.clone())
            .map(|id: String, store: SharedStore| {
                let guard = store.read().unwrap_or_else(PoisonError::into_inner);
                match guard.get(&id) {
                    Some(session) => warp::reply::with_status(
                        warp::reply::json(&SessionView {
                            parameters: *session.parameters(),
                            metrics: session.metrics(),
                            transcript: session.transcript().messages().to_vec(),
                        }),
                        StatusCode::OK,
                    ),
                    None => unknown_session(&id),
                }
            });

        let end_session = warp::path!("session" / String)
            .and(warp::delete())
            .and(store_filter)
            .map(|id: String, store: SharedStore| {
                let mut guard = store.write().unwrap_or_else(PoisonError::into_inner);
                match guard.remove(&id) {
                    Some(session) => {
                        info!(
                            "session {} ended after {} messages",
                            id,
                            session.transcript().len()
                        );
                        warp::reply::with_status(
                            warp::reply::json(&json!({"status": "ok"})),
                            StatusCode::OK,
                        )
                    }
                    None => unknown_session(&id),
                }
            });

        default_report
            .or(set_parameters)
            .or(session_report)
            .or(ask)
            .or(transcript)
            .or(session_view)
            .or(end_session)
    }

    /// Serves the routes on `addr` until Ctrl+C.
    pub async fn serve(&self, addr: SocketAddr) -> anyhow::Result<()> {
        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, async {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    warn!("failed to listen for Ctrl+C: {}", err);
                }
            })
            .with_context(|| format!("binding HTTP bridge on {}", addr))?;
        info!("HTTP bridge listening on {} (Ctrl+C to stop)", bound);
        server.await;
        Ok(())
    }

    pub fn session_count(&self) -> usize {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
