//! Answer Form Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::state::Msg;

/// Free-text answer for the current task
#[component]
pub fn AnswerForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let answer = Memo::new(move |_| ctx.with(|s| s.answer.clone()));
    let submitting = Memo::new(move |_| ctx.with(|s| s.is_submitting()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Msg::SubmitAnswer);
    };

    view! {
        <form id="response-form" class="answer-form" on:submit=on_submit>
            <textarea
                id="answer-input"
                placeholder="Your answer..."
                rows="4"
                prop:value=move || answer.get()
                on:input=move |ev| ctx.dispatch(Msg::AnswerChanged(event_target_value(&ev)))
            />
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending..." } else { "Submit answer" }}
            </button>
        </form>
    }
}
