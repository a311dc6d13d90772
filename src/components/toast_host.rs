//! Toast Host Component
//!
//! Renders the active notifications in a fixed corner stack.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notifications = ctx.notifications;

    view! {
        <div class="notification-stack">
            <For
                each=move || notifications.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.css_class()>
                            <div class="notification-content">
                                <span class="notification-icon">{toast.level.icon()}</span>
                                <span class="notification-message">{toast.message}</span>
                                <button class="notification-close" on:click=move |_| notifications.dismiss(id)>
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
