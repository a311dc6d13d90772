//! Mutil Frontend App
//!
//! Root component: task panel on top, gallery below, toasts over both.

use leptos::prelude::*;

use crate::components::{Gallery, TaskPanel, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::state::Msg;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    web_sys::console::log_1(&format!("[APP] Starting with API base {}", config.api_base).into());

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Load the gallery once on mount
    Effect::new(move |_| {
        ctx.dispatch(Msg::RequestGallery);
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Mutil"</h1>
                <TaskPanel />
                <Gallery />
            </main>
            <ToastHost />
        </div>
    }
}
