//! Application Context
//!
//! Shared state provided via Leptos Context API: the reload trigger and the
//! transient notifications every remote call reports through.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a notification stays on screen
pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub is_error: bool,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the list from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the list from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Visible notifications, oldest first
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
        }
    }

    /// Trigger a reload of the list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), false);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::warn_1(&format!("[TOAST] {}", message).into());
        self.push(message, true);
    }

    /// Report an action outcome: `Ok` carries the success message
    pub fn report(&self, result: &Result<String, String>) {
        match result {
            Ok(message) => self.success(message.clone()),
            Err(message) => self.error(message.clone()),
        }
    }

    pub fn dismiss(&self, id: u32) {
        self.set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push(&self, message: String, is_error: bool) {
        if message.is_empty() {
            return;
        }
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        self.set_toasts.update(|toasts| toasts.push(Toast { id, message, is_error }));

        let ctx = *self;
        Timeout::new(TOAST_DURATION_MS, move || ctx.dismiss(id)).forget();
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
