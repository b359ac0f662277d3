//! The trending page: fetch lifecycle plus rendering of its body.

use std::{sync::Arc, time::Duration};

use eframe::egui;
use tokio::{
    runtime::Handle,
    sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender},
};

use crate::api::VideoApi;
use crate::components::{self, Loader};
use crate::credentials::CredentialProvider;
use crate::error::FetchError;
use crate::model::VideoSummary;
use crate::state::{Body, RequestToken, ResponsePolicy, Status, ViewState};
use crate::theme::Theme;
use crate::thumbnail::ThumbnailCache;

type Response = (RequestToken, Result<Vec<VideoSummary>, FetchError>);

pub struct TrendingVideoView {
    api: Arc<dyn VideoApi>,
    credentials: Box<dyn CredentialProvider>,
    runtime: Handle,
    state: ViewState,
    /// Completed fetches, sent back from the runtime
    responses_tx: UnboundedSender<Response>,
    responses_rx: UnboundedReceiver<Response>,
    thumbnails: ThumbnailCache,
}

impl TrendingVideoView {
    /// Creates the view and starts the first fetch right away
    pub fn new(
        api: Arc<dyn VideoApi>,
        credentials: Box<dyn CredentialProvider>,
        runtime: Handle,
        policy: ResponsePolicy,
    ) -> Self {
        let (responses_tx, responses_rx) = unbounded_channel();
        let mut view = Self {
            api,
            credentials,
            thumbnails: ThumbnailCache::new(runtime.clone()),
            runtime,
            state: ViewState::new(policy),
            responses_tx,
            responses_rx,
        };
        view.fetch_trending_videos();
        view
    }

    /// Switches to `InProgress` and dispatches the request without waiting for it.
    /// Nothing cancels the request; if the view is gone when it resolves, the result is dropped.
    pub fn fetch_trending_videos(&mut self) -> RequestToken {
        let token = self.state.start_fetch();
        let bearer = self.credentials.bearer_token();
        if bearer.is_none() {
            tracing::debug!("no bearer token available, sending an empty one");
        }

        let api = Arc::clone(&self.api);
        let tx = self.responses_tx.clone();
        tracing::info!(?token, "fetching trending videos");
        self.runtime.spawn(async move {
            let outcome = api.trending_videos(bearer).await;
            if tx.send((token, outcome)).is_err() {
                tracing::debug!(?token, "trending view dropped before the response arrived");
            }
        });
        token
    }

    /// Starts over after a failure. No backoff, no limit.
    pub fn retry(&mut self) {
        tracing::info!("retrying trending videos");
        self.fetch_trending_videos();
    }

    /// Applies every response that arrived since the last frame
    pub fn poll_responses(&mut self) {
        while let Ok((token, outcome)) = self.responses_rx.try_recv() {
            self.apply(token, outcome);
        }
    }

    fn apply(&mut self, token: RequestToken, outcome: Result<Vec<VideoSummary>, FetchError>) {
        match &outcome {
            Ok(videos) => tracing::info!(?token, count = videos.len(), "trending videos loaded"),
            Err(e) => tracing::warn!(?token, "trending videos failed: {}", e),
        }
        if self.state.resolve(token, outcome) {
            tracing::debug!(status = ?self.state.status(), stored = self.state.videos().len(), "trending state updated");
        } else {
            tracing::debug!(?token, "discarded response of a superseded fetch");
        }
    }

    /// Draws the title row and the body for the current status
    pub fn show(&mut self, ui: &mut egui::Ui, theme: Theme) {
        self.poll_responses();
        self.thumbnails.upload_pending(ui.ctx());

        let palette = theme.palette();
        components::page_title(ui, palette);
        ui.separator();

        let mut retry = false;
        match self.state.body() {
            Body::Empty => {}
            Body::Loading => Loader::default().show(ui),
            Body::List(videos) => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        for video in videos {
                            ui.push_id(&video.id, |ui| {
                                components::video_card(ui, palette, video, &mut self.thumbnails);
                            });
                            ui.add_space(12.0);
                        }
                    });
            }
            Body::Failure => retry = components::failure_view(ui, palette),
        }
        if retry {
            self.retry();
        }

        // Keep polling while a request is out
        if self.state.status() == Status::InProgress {
            ui.ctx().request_repaint_after(Duration::from_millis(100));
        }
    }
}
