//! Fixed option lists driving the dependent-field form. All derivations are
//! pure functions of the upstream selections; the form state model is
//! responsible for clearing downstream values when an upstream one changes.

pub const DEFAULT_PROFILE: &str = "Default";

/// The one profile under which segment and theme are active and the
/// audience list depends on the selected segment.
pub const SEGMENTING_PROFILE: &str = "Client Outreach";

pub const PROFILES: &[&str] = &[DEFAULT_PROFILE, SEGMENTING_PROFILE];

/// Segments enumerated under the segmenting profile only.
pub const SEGMENTS: &[&str] = &["SaaS", "Fintech", "Agency"];

/// Themes enumerated under the segmenting profile only.
pub const THEMES: &[&str] = &[
    "Thought Leadership",
    "Case Study",
    "Behind the Scenes",
    "Product Update",
];

pub const POST_GOALS: &[&str] = &[
    "Engagement",
    "Brand Awareness",
    "Lead Generation",
    "Community Building",
    "Recruitment",
];

pub const TONES: &[&str] = &[
    "Professional",
    "Casual",
    "Inspirational",
    "Educational",
    "Bold",
];

pub const PREFERRED_FORMATS: &[&str] = &["Text Post", "Carousel", "Video", "Poll", "Article"];

const GLOBAL_AUDIENCES: &[&str] = &[
    "Professionals",
    "Entrepreneurs",
    "Students",
    "Recruiters",
    "Executives",
];

const SAAS_AUDIENCES: &[&str] = &["Founders", "Product Managers", "Developers"];
const FINTECH_AUDIENCES: &[&str] = &["CFOs", "Analysts", "Compliance Officers"];
const AGENCY_AUDIENCES: &[&str] = &["Agency Owners", "Account Managers", "Creatives"];

pub fn is_segmenting_profile(profile: &str) -> bool {
    profile == SEGMENTING_PROFILE
}

/// Valid audience choices for the given upstream selections.
///
/// Under the segmenting profile the list is keyed by segment, and an
/// unknown (or not yet selected) segment yields an empty list so the UI
/// shows no options rather than an error. Under every other profile one
/// fixed global list applies and the segment argument is ignored.
pub fn valid_audiences(profile: &str, segment: &str) -> &'static [&'static str] {
    if is_segmenting_profile(profile) {
        match segment {
            "SaaS" => SAAS_AUDIENCES,
            "Fintech" => FINTECH_AUDIENCES,
            "Agency" => AGENCY_AUDIENCES,
            _ => &[],
        }
    } else {
        GLOBAL_AUDIENCES
    }
}
