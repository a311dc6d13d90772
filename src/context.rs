//! Application Context
//!
//! Shared state provided via Leptos Context API. Owns the state signal and
//! runs the commands returned by each transition.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::notify::Notifications;
use crate::state::{AppState, Command, GalleryView, Msg};

#[derive(Clone, Copy)]
pub struct AppContext {
    /// App state - only written by `dispatch`
    state: RwSignal<AppState>,
    config: StoredValue<AppConfig>,
    pub notifications: Notifications,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let notifications = Notifications::new(config.toast_duration_ms);
        Self {
            state: RwSignal::new(AppState::default()),
            config: StoredValue::new(config),
            notifications,
        }
    }

    /// Read-only view of the state
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(f)
    }

    pub fn gallery_view(&self) -> GalleryView {
        self.state.with(|s| s.gallery_view())
    }

    pub fn dispatch(&self, msg: Msg) {
        let mut commands = Vec::new();
        self.state.update(|s| commands = s.update(msg));
        for command in commands {
            self.run(command);
        }
    }

    fn run(&self, command: Command) {
        let ctx = *self;
        let base = self.config.with_value(|c| c.api_base.clone());
        match command {
            Command::FetchTask => spawn_local(async move {
                web_sys::console::log_1(&"[APP] Requesting a new task".into());
                let result = api::fetch_task(&base).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("[APP] Task fetch failed: {}", e).into());
                }
                ctx.dispatch(Msg::TaskLoaded(result));
            }),
            Command::PostAnswer(submission) => spawn_local(async move {
                web_sys::console::log_1(&format!("[APP] Submitting answer for task {}", submission.task_id).into());
                let result = api::submit_answer(&base, &submission).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("[APP] Submit failed: {}", e).into());
                }
                ctx.dispatch(Msg::AnswerSubmitted(result));
            }),
            Command::FetchGallery => spawn_local(async move {
                let result = api::list_gallery(&base).await;
                match &result {
                    Ok(items) => web_sys::console::log_1(&format!("[APP] Loaded {} gallery items", items.len()).into()),
                    Err(e) => web_sys::console::error_1(&format!("[APP] Gallery load failed: {}", e).into()),
                }
                ctx.dispatch(Msg::GalleryLoaded(result));
            }),
            Command::PostVote(id) => spawn_local(async move {
                let result = api::vote(&base, &id).await;
                if let Err(e) = &result {
                    web_sys::console::error_1(&format!("[APP] Vote for {} failed: {}", id, e).into());
                }
                ctx.dispatch(Msg::VoteRecorded(id, result));
            }),
            Command::Notify(level, message) => self.notifications.show(level, message),
        }
    }
}
