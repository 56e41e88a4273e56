/// Added to the vertical scroll offset before section ranges are checked, so
/// the highlight switches a little before a section reaches the top edge.
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Fraction of a section's area that must be on screen before it fades in.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

pub const REPOSITORY_URL: &str = "https://github.com/keerthiparam/PhishMate";
pub const ABUSEIPDB_URL: &str = "https://www.abuseipdb.com/";
pub const CLONE_TUTORIAL_URL: &str =
    "https://docs.github.com/en/repositories/creating-and-managing-repositories/cloning-a-repository";

pub const LOGO_PATH: &str = "/phishmate_logo.png";
pub const EXTENSION_SCREENSHOT_PATH: &str = "/ext_ss.png";
pub const API_KEY_POPUP_PATH: &str = "/apikeypopup.png";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub lookahead: f64,
    pub visibility_threshold: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            lookahead: SCROLL_LOOKAHEAD_PX,
            visibility_threshold: VISIBILITY_THRESHOLD,
        }
    }
}
