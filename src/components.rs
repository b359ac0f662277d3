//! Presentational pieces of the page. None of them own state.

use eframe::egui::{self, Color32, RichText};

use crate::model::VideoSummary;
use crate::theme::Palette;
use crate::thumbnail::ThumbnailCache;

const THUMBNAIL_WIDTH: f32 = 320.0;
const FIRE_RED: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);

/// Top bar with the app name and the theme toggle. Returns true when the toggle was clicked.
pub fn header(ui: &mut egui::Ui, palette: Palette, is_dark_theme: bool) -> bool {
    let mut toggle = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new("▶ Trending Videos").heading().color(palette.text));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon = if is_dark_theme { "☀" } else { "🌙" };
            toggle = ui.button(icon).on_hover_text("Switch theme").clicked();
        });
    });
    toggle
}

/// Side menu; only Trending is live in this client
pub fn navigation_bar(ui: &mut egui::Ui, palette: Palette) {
    for (entry, active) in [
        ("🏠 Home", false),
        ("🔥 Trending", true),
        ("🎮 Gaming", false),
        ("💾 Saved videos", false),
    ] {
        let mut text = RichText::new(entry).color(palette.text);
        if active {
            text = text.strong();
        }
        ui.add_enabled(active, egui::SelectableLabel::new(active, text));
    }
}

/// Title row above the body
pub fn page_title(ui: &mut egui::Ui, palette: Palette) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("🔥").size(35.0).color(FIRE_RED));
        ui.label(RichText::new("Trending").size(28.0).strong().color(palette.text));
    });
}

/// Kind of loading animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderKind {
    ThreeDots,
}

#[derive(Debug, Clone, Copy)]
pub struct Loader {
    pub kind: LoaderKind,
    pub color: Color32,
    pub size: f32,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            kind: LoaderKind::ThreeDots,
            color: Color32::from_rgb(0x0b, 0x69, 0xff),
            size: 50.0,
        }
    }
}

impl Loader {
    pub fn show(self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| match self.kind {
            LoaderKind::ThreeDots => {
                ui.add(egui::Spinner::new().size(self.size).color(self.color));
            }
        });
    }
}

/// Failure message with a retry button. Returns true when Retry was clicked.
pub fn failure_view(ui: &mut egui::Ui, palette: Palette) -> bool {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Oops! Something Went Wrong").size(24.0).color(palette.text));
        ui.label(
            RichText::new("We are having some trouble to complete your request. Please try again.")
                .color(palette.text),
        );
        ui.add_space(12.0);
        ui.button("Retry").clicked()
    })
    .inner
}

/// Renders one video, thumbnail included when it has arrived
pub fn video_card(ui: &mut egui::Ui, palette: Palette, video: &VideoSummary, thumbnails: &mut ThumbnailCache) {
    let ctx = ui.ctx().clone();
    ui.horizontal(|ui| {
        match thumbnails.get_or_request(&ctx, &video.id, &video.thumbnail_url) {
            Some(tex) => {
                ui.add(egui::Image::new(tex).max_width(THUMBNAIL_WIDTH));
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(THUMBNAIL_WIDTH, THUMBNAIL_WIDTH * 9.0 / 16.0),
                    egui::Sense::hover(),
                );
                ui.painter().rect_filled(rect, 4.0, Color32::DARK_GRAY);
            }
        }
        ui.vertical(|ui| {
            ui.label(RichText::new(&video.title).size(18.0).color(palette.text));
            ui.label(RichText::new(&video.channel_name).color(palette.text));
            ui.label(
                RichText::new(format!("{} views • {}", video.view_count, video.published_at))
                    .color(palette.text),
            );
        });
    });
}
