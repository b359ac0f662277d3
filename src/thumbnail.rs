use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use tokio::runtime::Handle;

/// Downloads and decodes a thumbnail, returning None on any error
pub fn fetch_thumbnail(url: &str) -> Option<ColorImage> {
    let resp = match reqwest::blocking::get(url).and_then(|r| r.error_for_status()) {
        Ok(resp) => resp.bytes().ok()?,
        Err(e) => {
            tracing::warn!("thumbnail {} unavailable: {}", url, e);
            return None;
        }
    };
    decode_thumbnail(&resp)
}

/// Decodes image bytes into an egui image without premultiplying alpha
pub fn decode_thumbnail(bytes: &[u8]) -> Option<ColorImage> {
    let img = image::load_from_memory(bytes).ok()?.to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Some(ColorImage::from_rgba_unmultiplied(size, &img))
}

/// Video thumbnails keyed by video id, fetched once in the background
pub struct ThumbnailCache {
    runtime: Handle,
    /// Ids already requested, loaded or not
    requested: HashSet<String>,
    textures: HashMap<String, TextureHandle>,
    /// Decoded images waiting to be uploaded on the UI thread
    results: Arc<Mutex<Vec<(String, ColorImage)>>>,
}

impl ThumbnailCache {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            requested: HashSet::new(),
            textures: HashMap::new(),
            results: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Texture for `id`, starting the download on first call
    pub fn get_or_request(&mut self, ctx: &egui::Context, id: &str, url: &str) -> Option<&TextureHandle> {
        if self.requested.insert(id.to_string()) {
            let id = id.to_string();
            let url = url.to_string();
            let results = Arc::clone(&self.results);
            let ctx = ctx.clone();
            self.runtime.spawn_blocking(move || {
                if let Some(img) = fetch_thumbnail(&url) {
                    if let Ok(mut pending) = results.lock() {
                        pending.push((id, img));
                    }
                    ctx.request_repaint();
                }
            });
        }
        self.textures.get(id)
    }

    /// Uploads finished downloads as textures
    pub fn upload_pending(&mut self, ctx: &egui::Context) {
        let Ok(mut pending) = self.results.lock() else {
            return;
        };
        for (id, img) in pending.drain(..) {
            let tex = ctx.load_texture(&id, img, TextureOptions::default());
            self.textures.insert(id, tex);
        }
    }
}
