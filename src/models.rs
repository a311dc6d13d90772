//! Frontend Models
//!
//! Data structures matching backend JSON.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend ids arrive as JSON strings or integers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserialize_id(deserializer).map(Self)
            }
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id!(TaskId);
string_id!(SubmissionId);

/// A generated creative prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
}

/// A user's answer to a task, as listed in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    #[serde(alias = "task_text")]
    pub task: String,
    #[serde(alias = "content")]
    pub user_answer: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST /submit`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSubmission {
    pub task_id: TaskId,
    pub content: String,
}

/// Reply to `POST /submit`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub submission_id: Option<SubmissionId>,
}

/// Reply to `POST /submission/{id}/vote`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VoteCount {
    pub votes: i64,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_accepts_number_and_string() {
        let from_number: Task = serde_json::from_str(r#"{"id": 12, "text": "Write a letter"}"#).unwrap();
        let from_string: Task = serde_json::from_str(r#"{"id": "12", "text": "Write a letter"}"#).unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.id.as_str(), "12");
    }

    #[test]
    fn test_submission_defaults() {
        let s: Submission = serde_json::from_str(
            r#"{"id": 3, "task": "Draw a map", "user_answer": "Toast island"}"#,
        ).unwrap();
        assert_eq!(s.id, SubmissionId::from("3"));
        assert_eq!(s.votes, 0);
        assert_eq!(s.image_url, None);
        assert_eq!(s.created_at, None);
    }

    #[test]
    fn test_submission_accepts_gallery_page_field_names() {
        let s: Submission = serde_json::from_str(
            r#"{"id": 1, "task_text": "Sing", "content": "La la", "votes": 4, "created_at": "2024-05-01T10:00:00"}"#,
        ).unwrap();
        assert_eq!(s.task, "Sing");
        assert_eq!(s.user_answer, "La la");
        assert_eq!(s.votes, 4);
    }

    #[test]
    fn test_new_submission_body() {
        let body = NewSubmission { task_id: TaskId::from("7"), content: "Dear fridge".into() };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"task_id":"7","content":"Dear fridge"}"#
        );
    }

    #[test]
    fn test_vote_count_without_message() {
        let v: VoteCount = serde_json::from_str(r#"{"votes": 7}"#).unwrap();
        assert_eq!(v, VoteCount { votes: 7, message: None });
    }
}
