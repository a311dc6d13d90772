//! Task Panel Component
//!
//! Button that fetches a new task, the task text, and the answer form
//! once a task is held.

use leptos::prelude::*;

use crate::components::AnswerForm;
use crate::context::AppContext;
use crate::state::Msg;

#[component]
pub fn TaskPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let task_text = Memo::new(move |_| ctx.with(|s| s.task_text()));
    let loading = Memo::new(move |_| ctx.with(|s| s.task_loading()));
    let form_visible = Memo::new(move |_| ctx.with(|s| s.answer_form_visible()));

    view! {
        <section class="task-panel">
            <p id="task-text" class="task-text">{move || task_text.get()}</p>
            <button
                id="get-task-btn"
                class="task-btn"
                disabled=move || loading.get()
                on:click=move |_| ctx.dispatch(Msg::RequestTask)
            >
                {move || if loading.get() { "Thinking..." } else { "Get a new task!" }}
            </button>

            <Show when=move || form_visible.get()>
                <AnswerForm />
            </Show>
        </section>
    }
}
