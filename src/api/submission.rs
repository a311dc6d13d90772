//! Submission Endpoints
//!
//! Posting answers and votes.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::models::{NewSubmission, SubmissionId, SubmitReceipt, VoteCount};
use super::{endpoint, post, RequestError};

/// Vote requests carry no fields
#[derive(Serialize)]
struct EmptyBody {}

pub async fn submit_answer(base: &str, submission: &NewSubmission) -> Result<SubmitReceipt, RequestError> {
    post(&endpoint(base, "submit"), submission).await
}

/// Record one vote; the reply carries the authoritative count
pub async fn vote(base: &str, id: &SubmissionId) -> Result<VoteCount, RequestError> {
    post(&vote_url(base, id), &EmptyBody {}).await
}

fn vote_url(base: &str, id: &SubmissionId) -> String {
    let segment = utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC);
    endpoint(base, &format!("submission/{}/vote", segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_url() {
        assert_eq!(vote_url("/api", &SubmissionId::from("42")), "/api/submission/42/vote");
    }

    #[test]
    fn test_vote_url_encodes_id() {
        assert_eq!(vote_url("/api", &SubmissionId::from("a/b c")), "/api/submission/a%2Fb%20c/vote");
    }

    #[test]
    fn test_empty_body_is_object() {
        assert_eq!(serde_json::to_string(&EmptyBody {}).unwrap(), "{}");
    }
}
