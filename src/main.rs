//! Trending videos desktop client

// Video API client and response parsing
mod api;
// Presentational widgets: header, navigation, cards, loader, failure view
mod components;
// Command line / environment configuration
mod config;
// Bearer token sources
mod credentials;
// Fetch error detail, logged only
mod error;
// tracing subscriber setup
mod logging;
// Wire and display models
mod model;
// Fetch status state machine
mod state;
// Theme flag and page colors
mod theme;
// Thumbnail fetching and texture cache
mod thumbnail;
// The trending page itself
mod view;

use std::sync::Arc;

use clap::Parser;
// eframe/egui for GUI application framework
use eframe::{egui, App, Frame};
// OnceCell for single-time runtime initialization
use once_cell::sync::OnceCell;
use tokio::runtime::Runtime;

use api::HttpVideoApi;
use config::Args;
use theme::Theme;
use view::TrendingVideoView;

// Global Tokio runtime stored in a OnceCell for lazy init
static RUNTIME: OnceCell<Arc<Runtime>> = OnceCell::new();

/// Program entry point: reads config, initializes runtime and launches GUI
fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    if let Err(e) = logging::init_logging(args.log_level) {
        eprintln!("could not set up logging: {}", e);
        std::process::exit(1);
    }

    let rt = match RUNTIME.get_or_try_init(|| Runtime::new().map(Arc::new)) {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("could not start the async runtime: {}", e);
            std::process::exit(1);
        }
    };
    let handle = rt.handle().clone();

    tracing::info!(endpoint = %args.endpoint, "starting trending videos client");

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Trending Videos",
        options,
        Box::new(move |_cc| {
            let view = TrendingVideoView::new(
                Arc::new(HttpVideoApi::new(args.endpoint.clone())),
                args.credentials(),
                handle,
                args.response_policy(),
            );
            Box::new(TrendingApp::new(args.theme(), view))
        }),
    )
}

/// Application shell: owns the theme and lays out the page
struct TrendingApp {
    theme: Theme,
    trending: TrendingVideoView,
}

impl TrendingApp {
    fn new(theme: Theme, trending: TrendingVideoView) -> Self {
        Self { theme, trending }
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        let visuals = if self.theme.is_dark_theme {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }
}

impl App for TrendingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.apply_visuals(ctx);
        let palette = self.theme.palette();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if components::header(ui, palette, self.theme.is_dark_theme) {
                self.theme = self.theme.toggled();
                tracing::debug!(dark = self.theme.is_dark_theme, "theme switched");
            }
        });

        egui::SidePanel::left("navigation").show(ctx, |ui| {
            components::navigation_bar(ui, palette);
        });

        // Page background follows the theme
        let page = egui::Frame::central_panel(&ctx.style()).fill(palette.background);
        egui::CentralPanel::default().frame(page).show(ctx, |ui| {
            self.trending.show(ui, self.theme);
        });
    }
}
