use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::contact::form::SubmissionForm;

#[derive(Debug, Error)]
pub enum RelayError {
    /// No response came back: connection refused, DNS, CORS, or the body failed to encode.
    #[error("could not reach form relay: {0}")]
    Transport(String),
    #[error("form relay rejected submission with {status} {status_text}")]
    Rejected {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },
}

/// Somewhere a contact form can be delivered to.
#[async_trait(?Send)]
pub trait FormRelay {
    async fn deliver(&self, form: &SubmissionForm) -> Result<(), RelayError>;
}

/// Headers sent with every relay request.
pub const RELAY_HEADERS: &[(&str, &str)] = &[
    ("Content-Type", "application/json"),
    ("Accept", "application/json"),
];

/// One outgoing relay call, built before anything touches the network.
#[derive(Clone, Debug, PartialEq)]
pub struct RelayRequest {
    pub url: String,
    pub headers: &'static [(&'static str, &'static str)],
    pub body: String,
}

/// Hosted relay reached over HTTP with a JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// The POST this relay sends for `form`: flat JSON body, JSON headers.
    pub fn request(&self, form: &SubmissionForm) -> Result<RelayRequest, RelayError> {
        let body = serde_json::to_string(form).map_err(|e| RelayError::Transport(e.to_string()))?;
        Ok(RelayRequest {
            url: self.endpoint.clone(),
            headers: RELAY_HEADERS,
            body,
        })
    }
}

#[async_trait(?Send)]
impl FormRelay for HttpRelay {
    async fn deliver(&self, form: &SubmissionForm) -> Result<(), RelayError> {
        let outgoing = self.request(form)?;
        let request = outgoing
            .headers
            .iter()
            .fold(Request::post(&outgoing.url), |request, (name, value)| {
                request.header(name, value)
            })
            .body(outgoing.body);

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let detail = response.text().await.ok().and_then(|body| relay_error_detail(&body));
        Err(RelayError::Rejected {
            status: response.status(),
            status_text: response.status_text(),
            detail,
        })
    }
}

/// Sends one submission and records what went wrong, if anything.
///
/// The caller only learns success or failure; the cause stays in the log.
pub async fn submit<R: FormRelay + ?Sized>(relay: &R, form: &SubmissionForm) -> Result<(), RelayError> {
    log::debug!("Submitting contact form");
    let outcome = relay.deliver(form).await;
    match &outcome {
        Ok(()) => log::info!("Contact form delivered"),
        Err(RelayError::Transport(cause)) => {
            log::error!("Contact form transport error: {}", cause);
        }
        Err(RelayError::Rejected { status, status_text, detail }) => {
            log::error!(
                "Contact form rejected by relay: {} {} ({})",
                status,
                status_text,
                detail.as_deref().unwrap_or("no detail")
            );
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use yew::Reducible;

    use super::*;
    use crate::contact::form::{ContactAction, ContactSubmission, Field, SubmissionState, FAILURE_MESSAGE};

    enum Reply {
        Ok,
        Status(u16, &'static str),
        Unreachable,
    }

    struct FakeRelay {
        replies: RefCell<Vec<Reply>>,
        seen: RefCell<Vec<SubmissionForm>>,
    }

    impl FakeRelay {
        fn new(replies: Vec<Reply>) -> Self {
            Self {
                replies: RefCell::new(replies.into_iter().rev().collect()),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl FormRelay for FakeRelay {
        async fn deliver(&self, form: &SubmissionForm) -> Result<(), RelayError> {
            self.seen.borrow_mut().push(form.clone());
            match self.replies.borrow_mut().pop().unwrap_or(Reply::Ok) {
                Reply::Ok => Ok(()),
                Reply::Status(status, text) => Err(RelayError::Rejected {
                    status,
                    status_text: text.to_string(),
                    detail: None,
                }),
                Reply::Unreachable => Err(RelayError::Transport("NetworkError".to_string())),
            }
        }
    }

    fn jane() -> Rc<ContactSubmission> {
        let state = Rc::new(ContactSubmission::default());
        let state = state.reduce(ContactAction::Edit(Field::Name, "Jane Doe".to_string()));
        state.reduce(ContactAction::Edit(Field::Email, "jane@x.com".to_string()))
    }

    /// Runs a submission the way the contact section does: begin, deliver, finish.
    fn run(relay: &FakeRelay, state: Rc<ContactSubmission>) -> (Rc<ContactSubmission>, Rc<ContactSubmission>) {
        let form = state.form().clone();
        let submitting = state.reduce(ContactAction::Begin);
        let outcome = block_on(submit(relay, &form));
        let done = submitting.clone().reduce(ContactAction::Finish(outcome));
        (submitting, done)
    }

    #[test]
    fn scenario_success_clears_form() {
        let relay = FakeRelay::new(vec![Reply::Ok]);
        let (submitting, done) = run(&relay, jane());

        assert_eq!(submitting.state(), &SubmissionState::Submitting);
        assert!(!submitting.submit_enabled());
        assert_eq!(done.state(), &SubmissionState::Sent);
        assert!(done.form().is_empty());
        assert_eq!(relay.seen.borrow()[0].name, "Jane Doe");
    }

    #[test]
    fn scenario_server_error_keeps_form() {
        let relay = FakeRelay::new(vec![Reply::Status(500, "Internal Server Error")]);
        let (_, done) = run(&relay, jane());

        assert_eq!(done.state().failure_reason(), Some(FAILURE_MESSAGE));
        assert_eq!(done.form().name, "Jane Doe");
        assert_eq!(done.form().email, "jane@x.com");
        assert!(done.submit_enabled());
    }

    #[test]
    fn scenario_network_failure_shows_same_message() {
        let relay = FakeRelay::new(vec![Reply::Unreachable]);
        let (_, done) = run(&relay, jane());

        assert_eq!(done.state(), &SubmissionState::Failed(FAILURE_MESSAGE.to_string()));
        assert!(!done.form().is_empty());
    }

    #[test]
    fn retry_after_failure_depends_only_on_second_call() {
        let relay = FakeRelay::new(vec![Reply::Status(503, "Service Unavailable"), Reply::Ok]);
        let (_, failed) = run(&relay, jane());
        assert!(failed.state().failure_reason().is_some());

        let (submitting, done) = run(&relay, failed);
        assert_eq!(submitting.state().failure_reason(), None);
        assert_eq!(done.state(), &SubmissionState::Sent);
        assert_eq!(relay.seen.borrow().len(), 2);
        assert_eq!(relay.seen.borrow()[0], relay.seen.borrow()[1]);
    }

    #[test]
    fn every_outcome_leaves_submitting() {
        for reply in [Reply::Ok, Reply::Status(400, "Bad Request"), Reply::Unreachable] {
            let relay = FakeRelay::new(vec![reply]);
            let (_, done) = run(&relay, jane());
            assert!(!done.state().is_submitting());
        }
    }

    #[test]
    fn submit_passes_relay_error_through() {
        let relay = FakeRelay::new(vec![Reply::Status(422, "Unprocessable Entity")]);
        let form = jane().form().clone();

        match block_on(submit(&relay, &form)) {
            Err(RelayError::Rejected { status, .. }) => assert_eq!(status, 422),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn detail_joins_field_errors() {
        let body = r#"{"errors":[{"field":"email","code":"TYPE_EMAIL","message":"should be an email"},{"message":"form not found"}]}"#;
        assert_eq!(
            relay_error_detail(body).as_deref(),
            Some("email: should be an email; form not found")
        );
    }

    #[test]
    fn detail_reads_single_error_field() {
        assert_eq!(
            relay_error_detail(r#"{"error":"Form disabled"}"#).as_deref(),
            Some("Form disabled")
        );
    }

    #[test]
    fn detail_falls_back_to_raw_text() {
        assert_eq!(relay_error_detail("<html>Bad Gateway</html>").as_deref(), Some("<html>Bad Gateway</html>"));
        assert_eq!(relay_error_detail("   "), None);
        assert_eq!(relay_error_detail("{}"), None);
    }

    #[test]
    fn http_relay_keeps_endpoint() {
        let relay = HttpRelay::new("https://relay.example/f/abc");
        assert_eq!(relay, HttpRelay::new("https://relay.example/f/abc".to_string()));
    }

    #[test]
    fn http_relay_posts_flat_json_with_json_headers() {
        let relay = HttpRelay::new("https://relay.example/f/abc");
        let form = SubmissionForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: String::new(),
            message: "Call me".into(),
        };
        let request = relay.request(&form).unwrap();

        assert_eq!(request.url, "https://relay.example/f/abc");
        assert!(request.headers.contains(&("Content-Type", "application/json")));
        assert!(request.headers.contains(&("Accept", "application/json")));

        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        let keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        for key in ["name", "email", "company", "message"] {
            assert!(keys.iter().any(|k| k == key), "missing {}", key);
        }
        assert_eq!(body["company"], "");
    }

    /// Collects every formatted log line in the test process.
    struct CaptureLog;

    static CAPTURED: std::sync::Mutex<Vec<String>> = std::sync::Mutex::new(Vec::new());

    impl log::Log for CaptureLog {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = CAPTURED.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    #[test]
    fn submission_logs_carry_no_visitor_fields() {
        static LOGGER: CaptureLog = CaptureLog;
        // Another test may have installed it first
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        let form = SubmissionForm {
            name: "Quinn Privatename".into(),
            email: "quinn.private@mailbox.test".into(),
            company: "Hushco".into(),
            message: "secret plans".into(),
        };
        for reply in [Reply::Ok, Reply::Status(500, "Internal Server Error"), Reply::Unreachable] {
            let relay = FakeRelay::new(vec![reply]);
            let _ = block_on(submit(&relay, &form));
        }

        let lines = CAPTURED.lock().unwrap();
        assert!(lines.iter().any(|line| line.contains("Submitting contact form")));
        for line in lines.iter() {
            for value in [&form.name, &form.email, &form.company, &form.message] {
                assert!(!line.contains(value.as_str()), "log line leaks {:?}: {}", value, line);
            }
        }
    }
}
