// File: crates/art-core/src/headline.rs
// Summary: Three-line headline templates per mission variant.

use crate::request::{ArtworkRequest, MissionVariant};

/// Shown in place of an empty company name.
pub const COMPANY_FALLBACK: &str = "TIME";

/// The three headline lines; `highlight` is the auto-fitted, brand-colored one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Headline {
    pub lead: String,
    pub highlight: String,
    pub tail: String,
}

impl Headline {
    pub fn for_request(request: &ArtworkRequest) -> Self {
        match request.mission {
            MissionVariant::FollowInstagram => {
                let highlight = if request.company_name.is_empty() {
                    COMPANY_FALLBACK.to_string()
                } else {
                    request.company_name.to_uppercase()
                };
                Self::new("SIGA O", highlight, "NO INSTAGRAM")
            }
            MissionVariant::ChooseProPlayer => Self::new("ESCOLHA O SEU", "PRO PLAYER", "FAVORITO"),
        }
    }

    fn new(lead: &str, highlight: impl Into<String>, tail: &str) -> Self {
        Self { lead: lead.to_string(), highlight: highlight.into(), tail: tail.to_string() }
    }

    pub fn lines(&self) -> [&str; 3] {
        [&self.lead, &self.highlight, &self.tail]
    }
}
