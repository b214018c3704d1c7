//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::time::Duration;

use leptos::prelude::*;
use storefront_api::ApiConfig;

/// How long a toast stays on screen
const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Toasts currently shown, oldest first
    pub notices: ReadSignal<Vec<Notice>>,
    set_notices: WriteSignal<Vec<Notice>>,
    next_notice: StoredValue<u64>,
    api_config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(api_config: ApiConfig) -> Self {
        let (notices, set_notices) = signal(Vec::<Notice>::new());
        Self {
            notices,
            set_notices,
            next_notice: StoredValue::new(0),
            api_config: StoredValue::new(api_config),
        }
    }

    pub fn api_config(&self) -> ApiConfig {
        self.api_config.get_value()
    }

    /// Show a toast that dismisses itself after a few seconds
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let id = self.next_notice.get_value();
        self.next_notice.set_value(id + 1);
        let message = message.into();
        self.set_notices.update(|notices| notices.push(Notice { id, kind, message }));

        let ctx = *self;
        set_timeout(move || ctx.dismiss(id), NOTICE_TTL);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        // the timer may outlive the app root
        self.set_notices.try_update(|notices| notices.retain(|notice| notice.id != id));
    }
}
