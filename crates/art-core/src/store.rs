// File: crates/art-core/src/store.rs
// Summary: In-memory artwork records and server-side generation of the final PNG.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assets::RasterImage;
use crate::color::Rgb;
use crate::compositor::{Assets, Compositor};
use crate::error::{ArtError, Result};
use crate::form::{NewArtwork, TemplateType};
use crate::request::{ArtworkRequest, LogoRef, MissionVariant};
use crate::upload::UploadPolicy;

/// Number of records `recent` returns when no limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: Uuid,
    pub company_name: String,
    /// `#RRGGBB`, uppercase.
    pub primary_color: String,
    pub mission_type: MissionVariant,
    pub logo_path: Option<String>,
    pub template_type: TemplateType,
    pub generated_image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub metadata: Option<serde_json::Value>,
}

impl Artwork {
    /// Compositor input for this record. The logo is resolved against `uploads`; a logo
    /// path outside the uploads area is an error rather than a silent switch to the wordmark.
    pub fn to_request(&self, uploads: &UploadPolicy) -> Result<ArtworkRequest> {
        let color = Rgb::parse(&self.primary_color)?;
        let mut request = ArtworkRequest::new(self.company_name.clone(), color, self.mission_type);
        if let Some(path) = self.logo_path.as_deref() {
            let resolved = uploads.resolve(path).ok_or_else(|| {
                ArtError::validation("logoPath", format!("logo path {path} is outside the uploads area"))
            })?;
            request = request.with_logo(LogoRef::new(resolved));
        }
        Ok(request)
    }
}

/// Partial update; `Some` fields overwrite.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtworkPatch {
    pub logo_path: Option<String>,
    pub generated_image_path: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Response of a successful generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtwork {
    pub success: bool,
    pub image_path: String,
    pub artwork_id: Uuid,
}

struct Entry {
    seq: u64,
    artwork: Artwork,
}

#[derive(Default)]
struct Inner {
    next_seq: u64,
    entries: HashMap<Uuid, Entry>,
}

/// Process-local store; contents vanish with the process.
#[derive(Default)]
pub struct ArtworkStore {
    inner: Mutex<Inner>,
}

impl ArtworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, new: NewArtwork) -> Artwork {
        let artwork = Artwork {
            id: Uuid::new_v4(),
            company_name: new.company_name,
            primary_color: new.primary_color.to_hex(),
            mission_type: new.mission_type,
            logo_path: new.logo_path,
            template_type: new.template_type,
            generated_image_path: None,
            created_at: Utc::now(),
            metadata: None,
        };
        let mut inner = self.lock();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(artwork.id, Entry { seq, artwork: artwork.clone() });
        info!("created artwork {} for '{}'", artwork.id, artwork.company_name);
        artwork
    }

    pub fn get(&self, id: Uuid) -> Option<Artwork> {
        self.lock().entries.get(&id).map(|e| e.artwork.clone())
    }

    pub fn update(&self, id: Uuid, patch: ArtworkPatch) -> Option<Artwork> {
        let mut inner = self.lock();
        let entry = inner.entries.get_mut(&id)?;
        let a = &mut entry.artwork;
        if let Some(p) = patch.logo_path {
            a.logo_path = Some(p);
        }
        if let Some(p) = patch.generated_image_path {
            a.generated_image_path = Some(p);
        }
        if let Some(m) = patch.metadata {
            a.metadata = Some(m);
        }
        Some(a.clone())
    }

    /// Newest first; ties in `created_at` go to the later insert.
    pub fn recent(&self, limit: usize) -> Vec<Artwork> {
        let inner = self.lock();
        let mut entries: Vec<&Entry> = inner.entries.values().collect();
        entries.sort_by(|a, b| {
            b.artwork
                .created_at
                .cmp(&a.artwork.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        entries.into_iter().take(limit).map(|e| e.artwork.clone()).collect()
    }

    /// `recent` with [`DEFAULT_RECENT_LIMIT`].
    pub fn recent_default(&self) -> Vec<Artwork> {
        self.recent(DEFAULT_RECENT_LIMIT)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the record to `generated-<id>-<millis>.png` in the uploads directory and
    /// remember its public path. A logo that fails to load leaves the footer blank.
    pub fn generate(
        &self,
        id: Uuid,
        compositor: &Compositor,
        uploads: &UploadPolicy,
    ) -> Result<GeneratedArtwork> {
        let artwork = self.get(id).ok_or(ArtError::NotFound(id))?;
        let request = artwork.to_request(uploads)?;

        let logo = request.logo.as_ref().and_then(|l| match RasterImage::load(l.path()) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!("artwork {id}: logo {} unavailable: {e}", l.path().display());
                None
            }
        });
        let icon = if request.mission.has_corner_icons() {
            match compositor.options().icon.load() {
                Ok(img) => Some(img),
                Err(e) => {
                    warn!("artwork {id}: corner icon unavailable: {e}");
                    None
                }
            }
        } else {
            None
        };

        let png = compositor.render_to_png(&request, Assets { icon: icon.as_ref(), logo: logo.as_ref() })?;
        let file_name = format!("generated-{id}-{}.png", Utc::now().timestamp_millis());
        let image_path = uploads.store(&file_name, &png)?;

        self.update(id, ArtworkPatch { generated_image_path: Some(image_path.clone()), ..Default::default() })
            .ok_or(ArtError::NotFound(id))?;
        info!("generated {image_path} for artwork {id}");
        Ok(GeneratedArtwork { success: true, image_path, artwork_id: id })
    }
}
