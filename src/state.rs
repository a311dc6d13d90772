//! Application State
//!
//! All UI state and the pure transition function over it. Side effects are
//! returned as [`Command`]s and run by `AppContext`, so everything here can
//! be tested without a browser.

use crate::api::RequestError;
use crate::models::{NewSubmission, Submission, SubmissionId, SubmitReceipt, Task, TaskId, VoteCount};
use crate::notify::Level;

pub const TASK_PROMPT: &str = "Press the button to get a creative task.";
pub const TASK_FETCH_FAILED: &str = "Could not get a task. Please try again.";
pub const ANSWER_REQUIRED: &str = "Please enter an answer and make sure you have a current task.";
pub const ANSWER_SUBMITTED: &str = "Answer submitted!";
pub const SUBMIT_FAILED: &str = "Could not submit the answer. Please try again.";
pub const GALLERY_EMPTY: &str = "No answers in the gallery yet.";
pub const GALLERY_FAILED: &str = "Could not load the gallery.";
pub const VOTE_FAILED: &str = "Could not record the vote.";

/// The task area
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TaskSlot {
    #[default]
    Empty,
    /// Fetch in flight; holds the text that was on screen when it started
    Loading(Option<String>),
    Ready(Task),
    Failed,
}

/// The gallery area
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GalleryState {
    #[default]
    Loading,
    Loaded(Vec<Submission>),
    Failed,
}

/// What the gallery container should show
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    Loading,
    Failed,
    Empty,
    Items(Vec<Submission>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Current task; its id is what an answer is submitted against
    pub task: TaskSlot,
    /// Answer draft bound to the input
    pub answer: String,
    /// Task id of the answer post in flight
    pub submitting: Option<TaskId>,
    pub gallery: GalleryState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    RequestTask,
    TaskLoaded(Result<Task, RequestError>),
    AnswerChanged(String),
    SubmitAnswer,
    AnswerSubmitted(Result<SubmitReceipt, RequestError>),
    RequestGallery,
    GalleryLoaded(Result<Vec<Submission>, RequestError>),
    Vote(SubmissionId),
    VoteRecorded(SubmissionId, Result<VoteCount, RequestError>),
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchTask,
    PostAnswer(NewSubmission),
    FetchGallery,
    PostVote(SubmissionId),
    Notify(Level, String),
}

impl AppState {
    /// Apply one message; returns the side effects to run next
    pub fn update(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::RequestTask => {
                if self.task_loading() {
                    return vec![];
                }
                let shown = match &self.task {
                    TaskSlot::Empty => None,
                    _ => Some(self.task_text()),
                };
                self.task = TaskSlot::Loading(shown);
                vec![Command::FetchTask]
            }
            Msg::TaskLoaded(result) => {
                self.task = match result {
                    Ok(task) => TaskSlot::Ready(task),
                    Err(_) => TaskSlot::Failed,
                };
                vec![]
            }
            Msg::AnswerChanged(text) => {
                self.answer = text;
                vec![]
            }
            Msg::SubmitAnswer => self.submit_answer(),
            Msg::AnswerSubmitted(result) => {
                let submitted = self.submitting.take();
                match result {
                    Ok(receipt) => {
                        // Only discard the task the answer was for
                        let still_current = matches!(
                            (&self.task, &submitted),
                            (TaskSlot::Ready(task), Some(id)) if &task.id == id
                        );
                        if still_current {
                            self.answer.clear();
                            self.task = TaskSlot::Empty;
                        }
                        let message = receipt.message.unwrap_or_else(|| ANSWER_SUBMITTED.to_string());
                        vec![Command::Notify(Level::Success, message), Command::FetchGallery]
                    }
                    Err(_) => vec![Command::Notify(Level::Error, SUBMIT_FAILED.to_string())],
                }
            }
            Msg::RequestGallery => {
                // Keep showing the current list while a refresh is in flight
                if !matches!(self.gallery, GalleryState::Loaded(_)) {
                    self.gallery = GalleryState::Loading;
                }
                vec![Command::FetchGallery]
            }
            Msg::GalleryLoaded(result) => {
                self.gallery = match result {
                    Ok(items) => GalleryState::Loaded(items),
                    Err(_) => GalleryState::Failed,
                };
                vec![]
            }
            Msg::Vote(id) => vec![Command::PostVote(id)],
            Msg::VoteRecorded(id, result) => match result {
                Ok(count) => {
                    if let Some(submission) = self.submission_mut(&id) {
                        submission.votes = count.votes;
                    }
                    count
                        .message
                        .map(|m| vec![Command::Notify(Level::Success, m)])
                        .unwrap_or_default()
                }
                Err(_) => vec![Command::Notify(Level::Error, VOTE_FAILED.to_string())],
            },
        }
    }

    fn submit_answer(&mut self) -> Vec<Command> {
        if self.is_submitting() {
            return vec![];
        }
        let content = self.answer.trim();
        let task_id = match &self.task {
            TaskSlot::Ready(task) if !content.is_empty() => task.id.clone(),
            _ => return vec![Command::Notify(Level::Warning, ANSWER_REQUIRED.to_string())],
        };
        let content = content.to_string();
        self.submitting = Some(task_id.clone());
        vec![Command::PostAnswer(NewSubmission { task_id, content })]
    }

    fn submission_mut(&mut self, id: &SubmissionId) -> Option<&mut Submission> {
        match &mut self.gallery {
            GalleryState::Loaded(items) => items.iter_mut().find(|s| &s.id == id),
            _ => None,
        }
    }

    // ========================
    // View helpers
    // ========================

    pub fn task_text(&self) -> String {
        match &self.task {
            TaskSlot::Empty | TaskSlot::Loading(None) => TASK_PROMPT.to_string(),
            TaskSlot::Loading(Some(shown)) => shown.clone(),
            TaskSlot::Ready(task) => task.text.clone(),
            TaskSlot::Failed => TASK_FETCH_FAILED.to_string(),
        }
    }

    pub fn answer_form_visible(&self) -> bool {
        matches!(self.task, TaskSlot::Ready(_))
    }

    pub fn task_loading(&self) -> bool {
        matches!(self.task, TaskSlot::Loading(_))
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.is_some()
    }

    pub fn gallery_view(&self) -> GalleryView {
        match &self.gallery {
            GalleryState::Loading => GalleryView::Loading,
            GalleryState::Failed => GalleryView::Failed,
            GalleryState::Loaded(items) if items.is_empty() => GalleryView::Empty,
            GalleryState::Loaded(items) => GalleryView::Items(items.clone()),
        }
    }

    /// Loaded submissions in server order; empty in any other state
    pub fn gallery_items(&self) -> Vec<Submission> {
        match &self.gallery {
            GalleryState::Loaded(items) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn votes_for(&self, id: &SubmissionId) -> Option<i64> {
        match &self.gallery {
            GalleryState::Loaded(items) => items.iter().find(|s| &s.id == id).map(|s| s.votes),
            _ => None,
        }
    }
}
