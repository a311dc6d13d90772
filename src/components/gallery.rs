//! Gallery Component
//!
//! Status messages are rebuilt from state; loaded items go through a keyed
//! list so a vote only touches its own card.

use leptos::prelude::*;

use crate::components::GalleryCard;
use crate::context::AppContext;
use crate::state::{GalleryView, Msg, GALLERY_EMPTY, GALLERY_FAILED};

#[component]
pub fn Gallery() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // None while items are shown, so vote updates don't re-run the match
    let status = Memo::new(move |_| match ctx.gallery_view() {
        GalleryView::Items(_) => None,
        other => Some(other),
    });

    view! {
        <section class="gallery">
            <div class="gallery-header">
                <h2>"Gallery"</h2>
                <button class="refresh-btn" on:click=move |_| ctx.dispatch(Msg::RequestGallery)>
                    "Refresh"
                </button>
            </div>

            <div id="gallery-container" class="gallery-container">
                {move || match status.get() {
                    Some(GalleryView::Loading) => view! { <p class="gallery-status">"Loading..."</p> }.into_any(),
                    Some(GalleryView::Failed) => view! { <p class="gallery-status error">{GALLERY_FAILED}</p> }.into_any(),
                    Some(GalleryView::Empty) => view! { <p class="gallery-status">{GALLERY_EMPTY}</p> }.into_any(),
                    Some(GalleryView::Items(_)) | None => view! {
                        <div class="gallery-grid">
                            <For
                                each=move || ctx.with(|s| s.gallery_items())
                                key=|submission| submission.id.clone()
                                children=move |submission| view! { <GalleryCard submission=submission /> }
                            />
                        </div>
                    }.into_any(),
                }}
            </div>
        </section>
    }
}
