pub mod catalog;

pub use catalog::{is_segmenting_profile, valid_audiences};

use ideapad_core::{DraftSuggestions, IdeaDraft};

/// Fields the form exposes besides `profile`, which has its own setter
/// because changing it cascades into the dependent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    DraftText,
    PostGoal,
    Tone,
    TargetAudience,
    Segment,
    Theme,
    PreferredFormat,
    Keywords,
    Notes,
}

/// Holds the in-progress draft and enforces the dependent-field rules:
/// a profile change clears segment, theme and audience; a segment change
/// clears the audience; an audience not offered for the current upstream
/// selections is never stored.
#[derive(Debug, Clone)]
pub struct FormState {
    draft: IdeaDraft,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        let draft = IdeaDraft {
            profile: catalog::DEFAULT_PROFILE.to_string(),
            ..IdeaDraft::default()
        };
        Self { draft }
    }

    pub fn draft(&self) -> &IdeaDraft {
        &self.draft
    }

    /// Whether segment and theme are relevant under the current profile.
    pub fn segments_active(&self) -> bool {
        catalog::is_segmenting_profile(&self.draft.profile)
    }

    /// Audience choices valid under the current profile and segment.
    pub fn audiences(&self) -> &'static [&'static str] {
        catalog::valid_audiences(&self.draft.profile, &self.draft.segment)
    }

    pub fn set_profile(&mut self, value: String) {
        self.draft.profile = value;
        self.draft.target_audience.clear();
        self.draft.segment.clear();
        self.draft.theme.clear();
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::DraftText => self.draft.draft_text = value,
            FormField::PostGoal => self.draft.post_goal = value,
            FormField::Tone => self.draft.tone = value,
            FormField::TargetAudience => {
                // Unconditional policy: an audience the current upstream
                // selections do not offer is dropped, not stored.
                if value.is_empty() || self.audiences().contains(&value.as_str()) {
                    self.draft.target_audience = value;
                } else {
                    self.draft.target_audience.clear();
                }
            }
            FormField::Segment => {
                self.draft.segment = value;
                self.draft.target_audience.clear();
            }
            FormField::Theme => self.draft.theme = value,
            FormField::PreferredFormat => self.draft.preferred_format = value,
            FormField::Keywords => self.draft.keywords = value,
            FormField::Notes => self.draft.notes = value,
        }
    }

    /// Merges a field-population response into the draft. Present keys
    /// overwrite the matching field, absent keys leave it unchanged — but
    /// the merge goes through the same dependent-field guards as
    /// [`set_field`](Self::set_field): segment and theme suggestions are
    /// dropped outside the segmenting profile, and an audience the
    /// upstream selections do not offer is never stored.
    pub fn apply_suggestions(&mut self, suggestions: &DraftSuggestions) {
        if let Some(goal) = &suggestions.goal {
            self.draft.post_goal = goal.clone();
        }
        if let Some(tone) = &suggestions.tone {
            self.draft.tone = tone.clone();
        }
        if self.segments_active() {
            if let Some(segment) = &suggestions.segment {
                // Clears any previously chosen audience, like a manual
                // segment change does.
                self.set_field(FormField::Segment, segment.clone());
            }
            if let Some(theme) = &suggestions.theme {
                self.draft.theme = theme.clone();
            }
        }
        if let Some(audience) = &suggestions.audience {
            self.set_field(FormField::TargetAudience, audience.clone());
        }
        if let Some(format) = &suggestions.creative_format {
            self.draft.preferred_format = format.clone();
        }
        if let Some(keywords) = &suggestions.keywords {
            self.draft.keywords = keywords.clone();
        }
        if let Some(notes) = &suggestions.additional_notes {
            self.draft.notes = notes.clone();
        }
    }

    /// Back to an empty draft on the default profile.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
