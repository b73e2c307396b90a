// File: crates/art-core/src/form.rs
// Summary: Artwork form payload and its validation into a typed store entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{ArtError, Result};
use crate::request::MissionVariant;
use crate::upload::{upload_file_name, UPLOADS_PREFIX};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    #[default]
    Instagram,
    #[serde(rename = "proplayer")]
    ProPlayer,
}

impl TemplateType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Instagram => "instagram",
            TemplateType::ProPlayer => "proplayer",
        }
    }
}

impl FromStr for TemplateType {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "instagram" => Ok(TemplateType::Instagram),
            "proplayer" => Ok(TemplateType::ProPlayer),
            other => Err(ArtError::validation("templateType", format!("unknown template type '{other}'"))),
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form submission, as received from a client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkForm {
    pub company_name: String,
    pub primary_color: String,
    pub mission_type: String,
    #[serde(default)]
    pub template_type: Option<String>,
    #[serde(default)]
    pub logo_path: Option<String>,
}

/// A validated form, ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewArtwork {
    pub company_name: String,
    pub primary_color: Rgb,
    pub mission_type: MissionVariant,
    pub template_type: TemplateType,
    pub logo_path: Option<String>,
}

impl ArtworkForm {
    pub fn validate(&self) -> Result<NewArtwork> {
        if self.company_name.is_empty() {
            return Err(ArtError::validation("companyName", "company name is required"));
        }
        let primary_color = Rgb::parse(&self.primary_color).map_err(|_| {
            ArtError::validation("primaryColor", "color must be in hexadecimal #RRGGBB format")
        })?;
        let mission_type = self.mission_type.parse::<MissionVariant>()?;
        let template_type = match self.template_type.as_deref() {
            None => TemplateType::default(),
            Some(t) => t.parse()?,
        };
        let logo_path = self.logo_path.clone().filter(|p| !p.is_empty());
        if let Some(path) = logo_path.as_deref() {
            if upload_file_name(path).is_none() {
                let message = format!("logo must be an uploaded file under {UPLOADS_PREFIX}");
                return Err(ArtError::validation("logoPath", message));
            }
        }

        Ok(NewArtwork {
            company_name: self.company_name.clone(),
            primary_color,
            mission_type,
            template_type,
            logo_path,
        })
    }
}
