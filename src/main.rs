use gui::App;
use iced::{Application, Settings};
use ideapad_core::{CoreError, ErrorExt};
use std::path::PathBuf;
use std::sync::Arc;
use storage::{FileStore, KeyValueStore};

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter("ideapad=debug,gui=debug,storage=debug,webhook_client=debug")
        .init();

    tracing::info!("Starting LinkedIn Idea Pad");

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(data_dir())?);
    let app = App::new(store).map_err(|e| {
        e.log_error();
        e
    })?;

    let mut settings = Settings::with_flags(app);
    settings.window = iced::window::Settings {
        size: iced::Size::new(1000.0, 760.0),
        min_size: Some(iced::Size::new(700.0, 520.0)),
        ..Default::default()
    };

    IdeaPadApp::run(settings).map_err(|e| {
        tracing::error!("Application error: {}", e);
        CoreError::Configuration {
            message: format!("GUI error: {e}"),
        }
    })
}

fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("IDEAPAD_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".ideapad"),
        None => PathBuf::from(".ideapad"),
    }
}

struct IdeaPadApp {
    app: App,
}

impl Application for IdeaPadApp {
    type Message = gui::Message;
    type Theme = iced::Theme;
    type Executor = iced::executor::Default;
    type Flags = App;

    fn new(flags: Self::Flags) -> (Self, iced::Command<Self::Message>) {
        tracing::info!("Initializing application");
        (Self { app: flags }, iced::Command::none())
    }

    fn title(&self) -> String {
        "LinkedIn Idea Pad".to_string()
    }

    fn update(&mut self, message: Self::Message) -> iced::Command<Self::Message> {
        self.app.update(message)
    }

    fn view(&self) -> iced::Element<Self::Message> {
        self.app.view()
    }
}
