use serde::{Deserialize, Serialize};

const FALLBACK_TITLE: &str = "Lecture reminder";
const FALLBACK_BODY: &str = "One of your lectures is about to start";

/// What the notification facility should present to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
}

impl NotificationRequest {
    pub fn for_subject(subject: &str) -> Self {
        if subject.trim().is_empty() {
            return Self::fallback();
        }
        Self {
            title: subject.to_string(),
            body: format!("Your {} lecture is about to start", subject),
        }
    }

    /// Used when nothing is known about what fired
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.into(),
            body: FALLBACK_BODY.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_the_subject() {
        let n = NotificationRequest::for_subject("Algorithms");
        assert_eq!(n.title, "Algorithms");
        assert!(n.body.contains("Algorithms"));
    }

    #[test]
    fn never_empty() {
        for n in [NotificationRequest::for_subject(""), NotificationRequest::fallback()] {
            assert!(!n.title.is_empty());
            assert!(!n.body.is_empty());
        }
    }
}
