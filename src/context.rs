//! Application Context
//!
//! Navigation and toast notifications provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Top-level pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Pipeline,
    Clients,
    Detail,
    NewRfp,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Pipeline => "RFP Pipeline",
            Page::Clients => "Clients",
            Page::Detail => "RFP Details",
            Page::NewRfp => "Create RFP",
        }
    }
}

/// A transient notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub page: ReadSignal<Page>,
    /// Page currently shown - write
    set_page: WriteSignal<Page>,
    /// Toast on screen - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Toast on screen - write
    set_toast: WriteSignal<Option<Toast>>,
    next_toast_id: StoredValue<u32>,
    toast_duration_ms: u32,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
        toast_duration_ms: u32,
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            toast: toast.0,
            set_toast: toast.1,
            next_toast_id: StoredValue::new(0),
            toast_duration_ms,
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("[NAV] -> {}", page.title());
        self.set_page.set(page);
    }

    /// Show a toast and dismiss it after the configured duration,
    /// unless a newer toast replaced it first
    pub fn show_toast(&self, title: impl Into<String>, description: impl Into<String>) {
        self.next_toast_id.update_value(|id| *id += 1);
        let id = self.next_toast_id.get_value();
        self.set_toast.set(Some(Toast {
            id,
            title: title.into(),
            description: description.into(),
        }));

        let toast = self.toast;
        let set_toast = self.set_toast;
        let delay = self.toast_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if toast.get_untracked().is_some_and(|t| t.id == id) {
                set_toast.set(None);
            }
        });
    }

    pub fn dismiss_toast(&self) {
        self.set_toast.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
