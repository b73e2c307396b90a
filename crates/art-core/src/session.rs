// File: crates/art-core/src/session.rs
// Summary: Live preview: owns the raster surface, loads images in the background and
//          overlays them only while the request that asked for them is still current.

use std::collections::HashMap;
use std::path::PathBuf;

use log::{debug, info, warn};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::assets::{AssetSource, RasterImage};
use crate::compositor::{Assets, Compositor};
use crate::error::{ArtError, Result};
use crate::request::ArtworkRequest;
use crate::skia_surface::SkiaSurface;

/// Monotonic identity of a submitted request.
pub type Generation = u64;

/// What a finished download hands to its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub png: Vec<u8>,
}

/// Supplied by the owner of the session; decides where downloads go.
pub type DownloadHandler = Box<dyn FnMut(Download) -> std::io::Result<()> + Send>;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum AssetKey {
    Icon,
    Logo(PathBuf),
}

struct Loaded {
    generation: Generation,
    key: AssetKey,
    result: Result<RasterImage>,
}

pub struct PreviewSession {
    compositor: Compositor,
    surface: SkiaSurface,
    runtime: Handle,
    generation: Generation,
    request: Option<ArtworkRequest>,
    cache: HashMap<AssetKey, RasterImage>,
    in_flight: Vec<JoinHandle<()>>,
    outstanding: usize,
    tx: mpsc::UnboundedSender<Loaded>,
    rx: mpsc::UnboundedReceiver<Loaded>,
    on_download: DownloadHandler,
}

impl PreviewSession {
    /// Must be called from within a Tokio runtime.
    pub fn new(compositor: Compositor, on_download: DownloadHandler) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| ArtError::Runtime(e.to_string()))?;
        let surface = compositor.new_surface()?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self {
            compositor,
            surface,
            runtime,
            generation: 0,
            request: None,
            cache: HashMap::new(),
            in_flight: Vec::new(),
            outstanding: 0,
            tx,
            rx,
            on_download,
        })
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn request(&self) -> Option<&ArtworkRequest> {
        self.request.as_ref()
    }

    /// False while there is nothing worth showing (empty name on the default layout).
    pub fn has_content(&self) -> bool {
        self.request.as_ref().is_some_and(ArtworkRequest::has_content)
    }

    /// Number of image loads the current request is still waiting for.
    pub fn pending_loads(&self) -> usize {
        self.outstanding
    }

    /// Replace the current request: cancel its predecessor's loads, redraw with cached
    /// images, and start loading whatever is missing.
    pub fn submit(&mut self, request: ArtworkRequest) -> Generation {
        for task in self.in_flight.drain(..) {
            task.abort();
        }
        self.outstanding = 0;
        self.generation += 1;

        let icon_key = AssetKey::Icon;
        let logo_key = request.logo.as_ref().map(|l| AssetKey::Logo(l.path().to_path_buf()));
        let wants_icon = request.mission.has_corner_icons();
        // Only the icon and the current logo stay decoded.
        self.cache.retain(|key, _| *key == AssetKey::Icon || Some(key) == logo_key.as_ref());

        let assets = Assets {
            icon: wants_icon.then(|| self.cache.get(&icon_key)).flatten(),
            logo: logo_key.as_ref().and_then(|k| self.cache.get(k)),
        };
        self.compositor.render(&mut self.surface, &request, assets);

        if wants_icon && !self.cache.contains_key(&icon_key) {
            let source = self.compositor.options().icon.clone();
            self.spawn_load(icon_key, source);
        }
        if let Some(key) = logo_key {
            if !self.cache.contains_key(&key) {
                if let AssetKey::Logo(path) = &key {
                    let source = AssetSource::File(path.clone());
                    self.spawn_load(key, source);
                }
            }
        }

        debug!("submitted generation {} ({} loads pending)", self.generation, self.outstanding);
        self.request = Some(request);
        self.generation
    }

    /// Wait for every load of the current request and overlay the results.
    pub async fn settle(&mut self) {
        while self.outstanding > 0 {
            match self.rx.recv().await {
                Some(loaded) => self.apply(loaded),
                None => break,
            }
        }
    }

    /// Overlay whatever has already arrived, without waiting.
    pub fn apply_ready(&mut self) {
        while let Ok(loaded) = self.rx.try_recv() {
            self.apply(loaded);
        }
    }

    /// PNG of the frame as it stands now; images still loading are absent.
    pub fn snapshot_png(&mut self) -> Result<Vec<u8>> {
        self.surface.to_png_bytes()
    }

    pub fn snapshot_rgba8(&mut self) -> Result<Vec<u8>> {
        self.surface.to_rgba8()
    }

    /// Encode the current frame and hand it to the download handler.
    pub fn download(&mut self) -> Result<String> {
        let company = self.request.as_ref().map(|r| r.company_name.as_str()).unwrap_or("");
        let file_name = download_file_name(company, chrono::Utc::now().timestamp_millis());
        let png = self.surface.to_png_bytes()?;
        (self.on_download)(Download { file_name: file_name.clone(), png })?;
        info!("downloaded {file_name}");
        Ok(file_name)
    }

    fn spawn_load(&mut self, key: AssetKey, source: AssetSource) {
        let generation = self.generation;
        let tx = self.tx.clone();
        let task = self.runtime.spawn(async move {
            let result = match tokio::task::spawn_blocking(move || source.load()).await {
                Ok(result) => result,
                Err(e) => Err(ArtError::Runtime(format!("image load task failed: {e}"))),
            };
            // The receiver only goes away with the session.
            let _ = tx.send(Loaded { generation, key, result });
        });
        self.in_flight.push(task);
        self.outstanding += 1;
    }

    fn apply(&mut self, loaded: Loaded) {
        if loaded.generation != self.generation {
            debug!(
                "dropping {:?} from generation {} (current {})",
                loaded.key, loaded.generation, self.generation
            );
            return;
        }
        self.outstanding = self.outstanding.saturating_sub(1);

        let image = match loaded.result {
            Ok(image) => image,
            Err(e) => {
                warn!("failed to load {:?}: {e}", loaded.key);
                return;
            }
        };
        match &loaded.key {
            AssetKey::Icon => self.compositor.draw_corner_icons(&mut self.surface, &image),
            AssetKey::Logo(_) => self.compositor.draw_logo(&mut self.surface, &image),
        }
        self.cache.insert(loaded.key, image);
    }
}

/// `arte-<company>-<millis>.png`, with `design` for an empty name and path separators replaced.
pub fn download_file_name(company: &str, millis: i64) -> String {
    let stem = if company.is_empty() { "design" } else { company };
    let stem: String = stem
        .chars()
        .map(|c| if matches!(c, '/' | '\\') || c.is_control() { '-' } else { c })
        .collect();
    format!("arte-{stem}-{millis}.png")
}
