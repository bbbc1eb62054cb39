use access_gate::{AccessGate, GateState};
use form_model::{catalog, FormField, FormState};
use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, text_input, Column,
};
use iced::{Command, Element, Length, Theme};
use ideapad_core::{CoreError, DraftSuggestions, ErrorExt, IdeaRecord};
use std::sync::Arc;
use storage::{IdeaRepository, KeyValueStore, SettingsStore};
use webhook_client::WebhookClient;

#[derive(Debug, Clone)]
pub enum Message {
    // Reachable while locked
    CredentialInput(String),
    UnlockPressed,

    // Form
    DraftTextChanged(String),
    ProfileSelected(String),
    PostGoalSelected(String),
    ToneSelected(String),
    SegmentSelected(String),
    ThemeSelected(String),
    AudienceSelected(String),
    FormatSelected(String),
    KeywordsChanged(String),
    NotesChanged(String),

    // Actions
    SubmitPressed,
    SendFinished(Result<(), String>),
    ResendPressed(String),
    DeletePressed(String),
    PopulatePressed,
    PopulateFinished(Result<DraftSuggestions, String>),

    // Settings
    ToggleSettings,
    WebhookUrlChanged(String),
    PopulateUrlChanged(String),
    ChangeCredentialPressed,
}

pub struct App {
    repository: IdeaRepository,
    settings: SettingsStore,
    gate: AccessGate,
    form: FormState,
    client: WebhookClient,
    credential_input: String,
    webhook_url_input: String,
    populate_url_input: String,
    show_settings: bool,
    is_busy: bool,
    status: Option<String>,
}

impl App {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Result<Self, CoreError> {
        let settings = SettingsStore::new(store.clone());
        let repository = IdeaRepository::load(store)?;
        let gate = AccessGate::load(settings.clone())?;
        let webhook_url_input = settings.webhook_url()?;
        let populate_url_input = settings.populate_url()?;

        Ok(Self {
            repository,
            settings,
            gate,
            form: FormState::new(),
            client: WebhookClient::new(),
            credential_input: String::new(),
            webhook_url_input,
            populate_url_input,
            show_settings: false,
            is_busy: false,
            status: None,
        })
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CredentialInput(value) => {
                self.credential_input = value;
                Command::none()
            }
            Message::UnlockPressed => {
                match self.gate.unlock(&self.credential_input) {
                    Ok(()) => {
                        self.credential_input.clear();
                        self.status = None;
                    }
                    Err(e) => {
                        e.log_warn();
                        self.status = Some(e.user_friendly_message());
                    }
                }
                Command::none()
            }
            // Everything below is inert while the gate is locked.
            _ if !self.gate.is_unlocked() => Command::none(),

            Message::DraftTextChanged(value) => {
                self.form.set_field(FormField::DraftText, value);
                Command::none()
            }
            Message::ProfileSelected(value) => {
                self.form.set_profile(value);
                Command::none()
            }
            Message::PostGoalSelected(value) => {
                self.form.set_field(FormField::PostGoal, value);
                Command::none()
            }
            Message::ToneSelected(value) => {
                self.form.set_field(FormField::Tone, value);
                Command::none()
            }
            Message::SegmentSelected(value) => {
                self.form.set_field(FormField::Segment, value);
                Command::none()
            }
            Message::ThemeSelected(value) => {
                self.form.set_field(FormField::Theme, value);
                Command::none()
            }
            Message::AudienceSelected(value) => {
                self.form.set_field(FormField::TargetAudience, value);
                Command::none()
            }
            Message::FormatSelected(value) => {
                self.form.set_field(FormField::PreferredFormat, value);
                Command::none()
            }
            Message::KeywordsChanged(value) => {
                self.form.set_field(FormField::Keywords, value);
                Command::none()
            }
            Message::NotesChanged(value) => {
                self.form.set_field(FormField::Notes, value);
                Command::none()
            }

            Message::SubmitPressed => {
                if self.is_busy {
                    return Command::none();
                }
                let draft = self.form.draft().clone();
                let record = match self.repository.add(&draft) {
                    Ok(record) => record,
                    Err(e) => {
                        e.log_warn();
                        self.status = Some(e.user_friendly_message());
                        return Command::none();
                    }
                };
                // The record is saved at this point; webhook failure never
                // rolls it back.
                self.form.reset();
                self.status = Some("Idea saved. Sending to Make.com...".to_string());
                self.send_record(record)
            }
            Message::SendFinished(result) => {
                self.is_busy = false;
                self.status = Some(match result {
                    Ok(()) => "Idea sent to Make.com.".to_string(),
                    Err(message) => message,
                });
                Command::none()
            }
            Message::ResendPressed(id) => {
                if self.is_busy {
                    return Command::none();
                }
                match self.repository.find(&id).cloned() {
                    Some(record) => {
                        self.status = Some("Resending to Make.com...".to_string());
                        self.send_record(record)
                    }
                    None => Command::none(),
                }
            }
            Message::DeletePressed(id) => {
                match self.repository.remove(&id) {
                    Ok(()) => self.status = Some("Idea deleted.".to_string()),
                    Err(e) => {
                        e.log_error();
                        self.status = Some(e.user_friendly_message());
                    }
                }
                Command::none()
            }
            Message::PopulatePressed => {
                if self.is_busy {
                    return Command::none();
                }
                let url = match self.settings.populate_url() {
                    Ok(url) => url,
                    Err(e) => {
                        e.log_error();
                        self.status = Some(e.user_friendly_message());
                        return Command::none();
                    }
                };
                let client = self.client.clone();
                let credential = self.gate.credential().unwrap_or("").to_string();
                let draft_text = self.form.draft().draft_text.clone();
                let profile = self.form.draft().profile.clone();
                self.is_busy = true;
                self.status = Some("Asking Make.com to fill in the fields...".to_string());
                Command::perform(
                    async move {
                        client
                            .populate_from_draft(&draft_text, &profile, &credential, &url)
                            .await
                            .map_err(|e| {
                                e.log_error();
                                e.user_friendly_message()
                            })
                    },
                    Message::PopulateFinished,
                )
            }
            Message::PopulateFinished(result) => {
                self.is_busy = false;
                match result {
                    Ok(suggestions) => {
                        self.form.apply_suggestions(&suggestions);
                        self.status = Some("Draft fields populated.".to_string());
                    }
                    Err(message) => self.status = Some(message),
                }
                Command::none()
            }

            Message::ToggleSettings => {
                self.show_settings = !self.show_settings;
                Command::none()
            }
            Message::WebhookUrlChanged(value) => {
                self.webhook_url_input = value.clone();
                if let Err(e) = self.settings.set_webhook_url(&value) {
                    e.log_error();
                    self.status = Some(e.user_friendly_message());
                }
                Command::none()
            }
            Message::PopulateUrlChanged(value) => {
                self.populate_url_input = value.clone();
                if let Err(e) = self.settings.set_populate_url(&value) {
                    e.log_error();
                    self.status = Some(e.user_friendly_message());
                }
                Command::none()
            }
            Message::ChangeCredentialPressed => {
                if let Err(e) = self.gate.lock() {
                    e.log_error();
                    self.status = Some(e.user_friendly_message());
                } else {
                    self.status = Some("Enter a new API key to continue.".to_string());
                }
                Command::none()
            }
        }
    }

    fn send_record(&mut self, record: IdeaRecord) -> Command<Message> {
        let url = match self.settings.webhook_url() {
            Ok(url) => url,
            Err(e) => {
                e.log_error();
                self.status = Some(e.user_friendly_message());
                return Command::none();
            }
        };
        let client = self.client.clone();
        let credential = self.gate.credential().unwrap_or("").to_string();
        self.is_busy = true;
        Command::perform(
            async move {
                client
                    .send_idea(&record, &credential, &url)
                    .await
                    .map_err(|e| {
                        e.log_error();
                        e.user_friendly_message()
                    })
            },
            Message::SendFinished,
        )
    }

    pub fn view(&self) -> Element<Message, Theme> {
        let body: Element<Message, Theme> = match self.gate.state() {
            GateState::Locked => self.locked_view(),
            GateState::Unlocked => self.main_view(),
        };

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    fn locked_view(&self) -> Element<Message, Theme> {
        let mut col = column![
            text("LinkedIn Idea Pad").size(24),
            text("Enter your Make.com API key to continue").size(14),
            text_input("API key", &self.credential_input).on_input(Message::CredentialInput),
            button("Unlock").on_press(Message::UnlockPressed)
        ]
        .spacing(10)
        .max_width(420);

        if let Some(status) = &self.status {
            col = col.push(text(status).size(14));
        }

        col.into()
    }

    fn main_view(&self) -> Element<Message, Theme> {
        let header = row![
            text("LinkedIn Idea Pad").size(24),
            button("Settings").on_press(Message::ToggleSettings),
            button("Change API key").on_press(Message::ChangeCredentialPressed)
        ]
        .spacing(20);

        let mut col = Column::new().spacing(20).push(header);

        if self.show_settings {
            col = col.push(self.settings_view());
        }

        col = col.push(self.form_view());

        if let Some(status) = &self.status {
            col = col.push(text(status).size(14));
        }

        col = col.push(self.ideas_view());

        col.into()
    }

    fn settings_view(&self) -> Element<Message, Theme> {
        container(
            column![
                text("Make.com Integration Settings").size(16),
                text("Webhook URL").size(12),
                text_input("https://hook.make.com/...", &self.webhook_url_input)
                    .on_input(Message::WebhookUrlChanged),
                text("Field population URL").size(12),
                text_input("https://hook.make.com/...", &self.populate_url_input)
                    .on_input(Message::PopulateUrlChanged)
            ]
            .spacing(6),
        )
        .padding(10)
        .into()
    }

    fn form_view(&self) -> Element<Message, Theme> {
        let draft = self.form.draft();

        let mut form = Column::new()
            .spacing(10)
            .push(text("New post idea").size(18))
            .push(
                text_input("What story will you tell?", &draft.draft_text)
                    .on_input(Message::DraftTextChanged),
            )
            .push(Self::pick_field(
                "Profile",
                catalog::PROFILES,
                &draft.profile,
                Message::ProfileSelected,
            ))
            .push(
                row![
                    Self::pick_field(
                        "Post goal",
                        catalog::POST_GOALS,
                        &draft.post_goal,
                        Message::PostGoalSelected,
                    ),
                    Self::pick_field("Tone", catalog::TONES, &draft.tone, Message::ToneSelected),
                    Self::pick_field(
                        "Format",
                        catalog::PREFERRED_FORMATS,
                        &draft.preferred_format,
                        Message::FormatSelected,
                    )
                ]
                .spacing(10),
            );

        // Segment and theme only exist under the segmenting profile.
        if self.form.segments_active() {
            form = form.push(
                row![
                    Self::pick_field(
                        "Segment",
                        catalog::SEGMENTS,
                        &draft.segment,
                        Message::SegmentSelected,
                    ),
                    Self::pick_field("Theme", catalog::THEMES, &draft.theme, Message::ThemeSelected)
                ]
                .spacing(10),
            );
        }

        form = form
            .push(Self::pick_field(
                "Target audience",
                self.form.audiences(),
                &draft.target_audience,
                Message::AudienceSelected,
            ))
            .push(text_input("Keywords", &draft.keywords).on_input(Message::KeywordsChanged))
            .push(text_input("Additional notes", &draft.notes).on_input(Message::NotesChanged));

        let mut populate = button("Populate from draft");
        let mut submit = button(if self.is_busy {
            "Sending..."
        } else {
            "Save & send to Make.com"
        });
        if !self.is_busy {
            populate = populate.on_press(Message::PopulatePressed);
            submit = submit.on_press(Message::SubmitPressed);
        }
        form = form.push(row![populate, submit].spacing(10));

        container(form).padding(10).into()
    }

    fn ideas_view(&self) -> Element<Message, Theme> {
        let ideas = self.repository.list();

        let heading = text(format!("Your ideas ({})", ideas.len())).size(18);

        let content: Element<Message, Theme> = if ideas.is_empty() {
            text("No ideas yet. Add your first post idea above!")
                .size(14)
                .into()
        } else {
            let mut list = Column::new().spacing(10);
            for idea in ideas {
                let mut meta = format!(
                    "{} · {}",
                    idea.profile,
                    idea.created_at.format("%Y-%m-%d %H:%M")
                );
                if !idea.segment.is_empty() {
                    meta.push_str(&format!(" · {}", idea.segment));
                }

                let mut resend = button("Resend");
                if !self.is_busy {
                    resend = resend.on_press(Message::ResendPressed(idea.id.clone()));
                }

                let item: Element<Message, Theme> = container(
                    column![
                        text(&idea.draft_text).size(16),
                        text(meta).size(12),
                        row![
                            resend,
                            button("Delete").on_press(Message::DeletePressed(idea.id.clone()))
                        ]
                        .spacing(10)
                    ]
                    .spacing(5),
                )
                .padding(10)
                .into();
                list = list.push(item);
            }
            scrollable(list).into()
        };

        column![heading, content].spacing(10).into()
    }

    fn pick_field(
        label: &'static str,
        options: &'static [&'static str],
        current: &str,
        on_select: fn(String) -> Message,
    ) -> Element<'static, Message, Theme> {
        let choices: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        let selected = if current.is_empty() {
            None
        } else {
            Some(current.to_string())
        };

        column![text(label).size(12), pick_list(choices, selected, on_select)]
            .spacing(4)
            .into()
    }
}
