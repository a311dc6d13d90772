//! Gallery Card Component
//!
//! One submission with its vote count and vote button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Submission;
use crate::state::Msg;

#[component]
pub fn GalleryCard(submission: Submission) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let Submission { id, task, user_answer, image_url, votes, created_at } = submission;
    let votes_id = format!("votes-{}", id);
    let data_id = id.to_string();
    let count_id = id.clone();
    let count = Memo::new(move |_| ctx.with(|s| s.votes_for(&count_id)).unwrap_or(votes));

    view! {
        <div class="gallery-item">
            <h3>"Task: " {task}</h3>
            <p><strong>"Answer: "</strong> {user_answer}</p>
            {image_url.map(|src| view! { <img src=src alt="User answer" class="gallery-image" /> })}
            {created_at.map(|at| view! { <p class="gallery-date">{at}</p> })}
            <p>"Votes: " <span id=votes_id class="vote-count">{move || count.get()}</span></p>
            <button
                class="vote-btn"
                data-id=data_id
                on:click=move |_| ctx.dispatch(Msg::Vote(id.clone()))
            >
                "Vote"
            </button>
        </div>
    }
}
