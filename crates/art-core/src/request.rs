// File: crates/art-core/src/request.rs
// Summary: Typed compositor input (company, brand color, mission variant, optional logo).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ArtError, Result};

/// Campaign layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionVariant {
    #[serde(rename = "follow-instagram")]
    FollowInstagram,
    #[serde(rename = "choose-proplayer")]
    ChooseProPlayer,
}

impl MissionVariant {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MissionVariant::FollowInstagram => "follow-instagram",
            MissionVariant::ChooseProPlayer => "choose-proplayer",
        }
    }

    /// Whether the layout carries the decorative corner icons.
    pub const fn has_corner_icons(&self) -> bool {
        matches!(self, MissionVariant::FollowInstagram)
    }
}

impl Default for MissionVariant {
    fn default() -> Self {
        MissionVariant::FollowInstagram
    }
}

impl FromStr for MissionVariant {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "follow-instagram" => Ok(MissionVariant::FollowInstagram),
            "choose-proplayer" => Ok(MissionVariant::ChooseProPlayer),
            other => Err(ArtError::validation(
                "missionType",
                format!("unknown mission type '{other}'"),
            )),
        }
    }
}

impl fmt::Display for MissionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a logo image on disk. The compositor never reads it; loaders do.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LogoRef(PathBuf);

impl LogoRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Immutable input to a single render.
#[derive(Clone, Debug, PartialEq)]
pub struct ArtworkRequest {
    pub company_name: String,
    pub primary_color: Rgb,
    pub mission: MissionVariant,
    pub logo: Option<LogoRef>,
}

impl ArtworkRequest {
    pub fn new(company_name: impl Into<String>, primary_color: Rgb, mission: MissionVariant) -> Self {
        Self { company_name: company_name.into(), primary_color, mission, logo: None }
    }

    pub fn with_logo(mut self, logo: LogoRef) -> Self {
        self.logo = Some(logo);
        self
    }

    /// False while the form is still empty: no company name on the default layout.
    pub fn has_content(&self) -> bool {
        !self.company_name.is_empty() || self.mission != MissionVariant::FollowInstagram
    }
}
