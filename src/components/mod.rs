//! UI Components
//!
//! Leptos components for the task, answer, gallery and notification areas.

mod task_panel;
mod answer_form;
mod gallery;
mod gallery_card;
mod toast_host;

pub use task_panel::TaskPanel;
pub use answer_form::AnswerForm;
pub use gallery::Gallery;
pub use gallery_card::GalleryCard;
pub use toast_host::ToastHost;
