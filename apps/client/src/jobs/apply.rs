#![allow(dead_code)]

//! Apply-to-job flow. The resume is validated locally (size and type)
//! before any upload is attempted, and an in-flight guard ensures a second
//! submit while one is pending issues no second network call.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use tracing::{debug, info};
use uuid::Uuid;

use crate::actions::{self, ActionState};
use crate::api::JobBoardApi;
use crate::errors::ClientError;
use crate::notify::Notifier;

/// Resumes larger than this are rejected locally.
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Accepted resume content types: PDF and Word documents.
pub const ALLOWED_RESUME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Ephemeral submission payload — built per attempt, never retained.
#[derive(Debug, Clone)]
pub struct ApplicationSubmission {
    pub job_id: Uuid,
    pub cover_letter: String,
    pub resume: ResumeFile,
}

pub fn validate_resume(resume: &ResumeFile) -> Result<(), ClientError> {
    if !ALLOWED_RESUME_TYPES.contains(&resume.content_type.as_str()) {
        return Err(ClientError::Validation(
            "Resume must be a PDF or Word document".to_string(),
        ));
    }
    if resume.bytes.len() > MAX_RESUME_BYTES {
        return Err(ClientError::Validation(
            "Resume file is too large (5 MB maximum)".to_string(),
        ));
    }
    Ok(())
}

/// One flow per session; shared with the UI via `Arc`.
pub struct ApplicationFlow {
    api: Arc<dyn JobBoardApi>,
    notifier: Notifier,
    state: Mutex<ActionState>,
}

impl ApplicationFlow {
    pub fn new(api: Arc<dyn JobBoardApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            state: Mutex::new(ActionState::Idle),
        }
    }

    /// Submits an application. Returns true only if the upload completed
    /// successfully; local rejection and duplicate triggers return false.
    pub async fn submit(&self, submission: &ApplicationSubmission) -> bool {
        if let Err(e) = validate_resume(&submission.resume) {
            let (kind, message) = e.user_notice();
            self.notifier.notify(kind, message);
            return false;
        }

        if !actions::try_begin(&self.state) {
            debug!("Application submit already in flight; ignoring");
            return false;
        }

        match self.api.submit_application(submission).await {
            Ok(()) => {
                info!("Application submitted for job {}", submission.job_id);
                actions::finish(&self.state, ActionState::Succeeded);
                self.notifier.success("Application submitted");
                true
            }
            Err(e) => {
                let (kind, message) = e.user_notice();
                actions::finish(&self.state, ActionState::Failed(message.clone()));
                self.notifier.notify(kind, message);
                false
            }
        }
    }

    pub fn state(&self) -> ActionState {
        actions::current(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::session::UserProfile;
    use crate::settings::merge::PartialSettings;
    use crate::settings::models::SettingsDocument;

    #[derive(Default)]
    struct MockApi {
        submit_calls: AtomicUsize,
        fail_submit: bool,
        slow: bool,
    }

    #[async_trait]
    impl JobBoardApi for MockApi {
        async fn get_settings(&self) -> Result<PartialSettings, ClientError> {
            Ok(PartialSettings::default())
        }

        async fn update_settings(
            &self,
            _doc: &SettingsDocument,
        ) -> Result<Option<UserProfile>, ClientError> {
            Ok(None)
        }

        async fn change_password(&self, _current: &str, _new: &str) -> Result<(), ClientError> {
            Ok(())
        }

        async fn delete_candidate_account(&self, _password: &str) -> Result<(), ClientError> {
            Ok(())
        }

        async fn delete_employer_account(&self, _password: &str) -> Result<(), ClientError> {
            Ok(())
        }

        async fn submit_application(
            &self,
            _submission: &ApplicationSubmission,
        ) -> Result<(), ClientError> {
            self.submit_calls.fetch_add(1, Ordering::SeqCst);
            if self.slow {
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
            if self.fail_submit {
                Err(ClientError::Timeout)
            } else {
                Ok(())
            }
        }
    }

    fn submission(size: usize, content_type: &str) -> ApplicationSubmission {
        ApplicationSubmission {
            job_id: Uuid::new_v4(),
            cover_letter: "I would be a great fit.".to_string(),
            resume: ResumeFile {
                file_name: "resume.pdf".to_string(),
                content_type: content_type.to_string(),
                bytes: Bytes::from(vec![0u8; size]),
            },
        }
    }

    #[tokio::test]
    async fn test_oversized_resume_rejected_without_upload() {
        let api = Arc::new(MockApi::default());
        let flow = ApplicationFlow::new(api.clone(), Notifier::new());

        let ok = flow
            .submit(&submission(MAX_RESUME_BYTES + 1, "application/pdf"))
            .await;
        assert!(!ok);
        assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
        let notice = flow.notifier.active().expect("error notice expected");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("too large"));
        // Local rejection never transitions the action state.
        assert_eq!(flow.state(), ActionState::Idle);
    }

    #[tokio::test]
    async fn test_wrong_content_type_rejected_without_upload() {
        let api = Arc::new(MockApi::default());
        let flow = ApplicationFlow::new(api.clone(), Notifier::new());

        let ok = flow.submit(&submission(1024, "image/png")).await;
        assert!(!ok);
        assert_eq!(api.submit_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_exactly_max_size_is_accepted() {
        let api = Arc::new(MockApi::default());
        let flow = ApplicationFlow::new(api.clone(), Notifier::new());

        assert!(flow.submit(&submission(MAX_RESUME_BYTES, "application/pdf")).await);
        assert_eq!(api.submit_calls.load(Ordering::SeqCst), 1);
        assert_eq!(flow.state(), ActionState::Succeeded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_submit_makes_one_call() {
        let api = Arc::new(MockApi {
            slow: true,
            ..Default::default()
        });
        let flow = Arc::new(ApplicationFlow::new(api.clone(), Notifier::new()));

        let sub = submission(1024, "application/pdf");
        let (first, second) = tokio::join!(flow.submit(&sub), flow.submit(&sub));
        assert_eq!(api.submit_calls.load(Ordering::SeqCst), 1);
        // One of the two triggers completed; the other was ignored.
        assert!(first ^ second);
    }

    #[tokio::test]
    async fn test_timeout_surfaces_distinct_message() {
        let api = Arc::new(MockApi {
            fail_submit: true,
            ..Default::default()
        });
        let flow = ApplicationFlow::new(api.clone(), Notifier::new());

        assert!(!flow.submit(&submission(1024, "application/pdf")).await);
        let notice = flow.notifier.active().expect("error notice expected");
        assert!(notice.message.contains("timed out"));
        assert!(matches!(flow.state(), ActionState::Failed(_)));
    }
}
