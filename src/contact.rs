mod emailjs;

pub use emailjs::{EmailJsConfig, EmailJsRequest, TemplateParams};
#[cfg(feature = "hydrate")]
pub use emailjs::EmailJs;

use std::{future::Future, sync::LazyLock, time::Duration};

use futures::future::{self, Either};
use regex::Regex;
use thiserror::Error;

/// How long a delivery may stay outstanding before it counts as failed.
pub const DELIVERY_TIMEOUT: Duration = Duration::from_secs(12);

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or email me directly.";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
}

impl FormFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !EMAIL_SHAPE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The values handed to the delivery provider, captured when a submission starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl From<&FormFields> for ContactPayload {
    fn from(fields: &FormFields) -> Self {
        Self {
            from_name: fields.name.trim().to_string(),
            from_email: fields.email.trim().to_string(),
            message: fields.message.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("rejected by provider ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("timeout")]
    Timeout,
}

/// Sends a contact message somewhere a human will read it.
///
/// Implementations report any failure as a [`DeliveryError`]; callers do not
/// branch on the variant.
#[allow(async_fn_in_trait)]
pub trait Delivery {
    async fn deliver(&self, payload: ContactPayload) -> Result<(), DeliveryError>;
}

/// Runs `delivery` against `timer`; whichever settles first decides the outcome.
pub async fn deliver_with_timeout<D, T>(
    delivery: &D,
    payload: ContactPayload,
    timer: T,
) -> Result<(), DeliveryError>
where
    D: Delivery,
    T: Future<Output = ()>,
{
    let send = delivery.deliver(payload);
    futures::pin_mut!(send);
    futures::pin_mut!(timer);
    match future::select(send, timer).await {
        Either::Left((res, _)) => res,
        Either::Right(((), _)) => Err(DeliveryError::Timeout),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Notices on screen, oldest first. Ids are never reused.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<(u64, Notice)>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, notice));
        id
    }

    /// Returns false if `id` was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|(i, _)| *i != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[(u64, Notice)] {
        &self.items
    }
}

/// Lifecycle of the contact form.
///
/// `begin` moves Idle -> Pending and hands back the payload to deliver;
/// `complete` records the outcome and returns to Idle. Only one submission can
/// be outstanding at a time.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFlow {
    fields: FormFields,
    state: SubmissionState,
    last_outcome: Option<SubmissionState>,
    rejection: Option<ValidationError>,
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Updates one field. Any standing validation message is dropped, since
    /// it described the old values.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        self.rejection = None;
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Succeeded or Failed state of the most recent finished submission.
    pub fn last_outcome(&self) -> Option<&SubmissionState> {
        self.last_outcome.as_ref()
    }

    /// Why the last submit attempt was refused, until the next edit or submit.
    pub fn rejection(&self) -> Option<&ValidationError> {
        self.rejection.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Starts a submission.
    ///
    /// Returns `Ok(None)` if one is already in flight. Invalid fields leave the
    /// flow Idle.
    pub fn begin(&mut self) -> Result<Option<ContactPayload>, ValidationError> {
        if self.is_pending() {
            log::debug!("submission already in flight, ignoring");
            return Ok(None);
        }
        if let Err(e) = self.fields.validate() {
            log::warn!("contact form rejected: {e}");
            self.rejection = Some(e.clone());
            return Err(e);
        }
        self.rejection = None;
        self.state = SubmissionState::Pending;
        log::info!("sending contact message from {}", self.fields.email.trim());
        Ok(Some(ContactPayload::from(&self.fields)))
    }

    /// Finishes the in-flight submission. Returns `None` when nothing was pending.
    pub fn complete(&mut self, outcome: Result<(), DeliveryError>) -> Option<Notice> {
        if !self.is_pending() {
            log::warn!("delivery result arrived with no submission pending");
            return None;
        }
        let (state, notice) = match outcome {
            Ok(()) => {
                log::info!("contact message delivered");
                self.fields.clear();
                (SubmissionState::Succeeded, Notice::success(SUCCESS_MESSAGE))
            }
            Err(e) => {
                log::error!("email error: {e}");
                (
                    SubmissionState::Failed(e.to_string()),
                    Notice::error(FAILURE_MESSAGE),
                )
            }
        };
        self.last_outcome = Some(state);
        self.state = SubmissionState::Idle;
        Some(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct MockDelivery {
        calls: Cell<usize>,
        sent: RefCell<Vec<ContactPayload>>,
        result: Result<(), DeliveryError>,
    }

    impl MockDelivery {
        fn resolving() -> Self {
            Self::with_result(Ok(()))
        }

        fn rejecting() -> Self {
            Self::with_result(Err(DeliveryError::Rejected {
                status: 400,
                body: "The template ID is invalid".to_string(),
            }))
        }

        fn with_result(result: Result<(), DeliveryError>) -> Self {
            Self {
                calls: Cell::new(0),
                sent: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl Delivery for MockDelivery {
        async fn deliver(&self, payload: ContactPayload) -> Result<(), DeliveryError> {
            self.calls.set(self.calls.get() + 1);
            self.sent.borrow_mut().push(payload);
            self.result.clone()
        }
    }

    struct NeverSettles;

    impl Delivery for NeverSettles {
        async fn deliver(&self, _payload: ContactPayload) -> Result<(), DeliveryError> {
            future::pending().await
        }
    }

    fn ada() -> FormFields {
        FormFields::new("Ada", "ada@example.com", "Hi")
    }

    fn flow_with(fields: &FormFields) -> SubmissionFlow {
        let mut flow = SubmissionFlow::new();
        for field in [Field::Name, Field::Email, Field::Message] {
            flow.edit(field, fields.get(field));
        }
        flow
    }

    // mirrors what the contact form does on submit
    fn submit<D: Delivery>(flow: &mut SubmissionFlow, delivery: &D) -> Option<Notice> {
        let payload = flow.begin().ok()??;
        let outcome = block_on(deliver_with_timeout(delivery, payload, future::pending()));
        flow.complete(outcome)
    }

    #[test]
    fn test_field_accessors() {
        let mut fields = FormFields::default();
        fields.set(Field::Name, "Ada");
        fields.set(Field::Email, "ada@example.com");
        fields.set(Field::Message, "Hi");
        assert_eq!(fields, ada());
        assert_eq!(fields.get(Field::Email), "ada@example.com");
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert_eq!(ada().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_missing_fields() {
        let cases = [
            (FormFields::new("", "ada@example.com", "Hi"), ValidationError::MissingName),
            (FormFields::new("Ada", "", "Hi"), ValidationError::MissingEmail),
            (FormFields::new("Ada", "ada@example.com", ""), ValidationError::MissingMessage),
            (FormFields::new("   ", "ada@example.com", "Hi"), ValidationError::MissingName),
            (FormFields::new("Ada", "ada@example.com", "\n\t"), ValidationError::MissingMessage),
        ];
        for (fields, expected) in cases {
            assert_eq!(fields.validate(), Err(expected), "{fields:?}");
        }
    }

    #[test]
    fn test_validate_email_shape() {
        for good in ["ada@example.com", "a.b+c@mail.example.org", " ada@example.com "] {
            assert_eq!(FormFields::new("Ada", good, "Hi").validate(), Ok(()), "{good}");
        }
        for bad in ["ada", "ada@", "@example.com", "ada@example", "ada @example.com", "ada@@example.com", "ada@example."] {
            assert_eq!(
                FormFields::new("Ada", bad, "Hi").validate(),
                Err(ValidationError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_invalid_form_never_calls_delivery() {
        let delivery = MockDelivery::resolving();
        for fields in [
            FormFields::new("", "ada@example.com", "Hi"),
            FormFields::new("Ada", "", "Hi"),
            FormFields::new("Ada", "ada@example.com", ""),
            FormFields::default(),
        ] {
            let mut flow = flow_with(&fields);
            assert!(flow.begin().is_err());
            assert_eq!(flow.state(), &SubmissionState::Idle);
            assert_eq!(submit(&mut flow, &delivery), None);
            assert_eq!(flow.fields(), &fields);
        }
        assert_eq!(delivery.calls.get(), 0);
    }

    #[test]
    fn test_begin_captures_trimmed_payload() {
        let mut flow = flow_with(&FormFields::new(" Ada ", " ada@example.com", "Hi there\n"));
        let payload = flow.begin().unwrap().unwrap();
        assert_eq!(payload.from_name, "Ada");
        assert_eq!(payload.from_email, "ada@example.com");
        assert_eq!(payload.message, "Hi there\n");
        assert!(flow.is_pending());
    }

    #[test]
    fn test_second_submit_while_pending_is_noop() {
        let mut flow = flow_with(&ada());
        assert!(flow.begin().unwrap().is_some());
        assert_eq!(flow.begin(), Ok(None));
        assert_eq!(flow.begin(), Ok(None));
        assert!(flow.is_pending());

        assert!(flow.complete(Ok(())).is_some());
        assert_eq!(flow.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_rejection_clears_on_edit() {
        let mut flow = flow_with(&FormFields::new("Ada", "ada@", "Hi"));
        assert_eq!(flow.begin(), Err(ValidationError::InvalidEmail));
        assert_eq!(flow.rejection(), Some(&ValidationError::InvalidEmail));

        flow.edit(Field::Email, "ada@example.com");
        assert_eq!(flow.rejection(), None);
        assert_eq!(flow.state(), &SubmissionState::Idle);

        flow.edit(Field::Message, "");
        assert_eq!(flow.begin(), Err(ValidationError::MissingMessage));
        flow.edit(Field::Message, "Hi");
        assert!(flow.begin().unwrap().is_some());
        assert_eq!(flow.rejection(), None);
    }

    #[test]
    fn test_notice_queue_ids_and_dismissal() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(Notice::success(SUCCESS_MESSAGE));
        let second = queue.push(Notice::error(FAILURE_MESSAGE));
        assert_ne!(first, second);
        assert_eq!(queue.items().len(), 2);

        assert!(queue.dismiss(first));
        // timer firing after a click-away
        assert!(!queue.dismiss(first));
        assert_eq!(queue.items(), &[(second, Notice::error(FAILURE_MESSAGE))]);

        assert!(queue.dismiss(second));
        let third = queue.push(Notice::success(SUCCESS_MESSAGE));
        assert!(third > second);
    }

    #[test]
    fn test_complete_without_pending_is_ignored() {
        let mut flow = flow_with(&ada());
        assert_eq!(flow.complete(Ok(())), None);
        assert_eq!(flow.fields(), &ada());
        assert_eq!(flow.last_outcome(), None);
    }

    #[test]
    fn test_successful_submission_clears_fields() {
        let delivery = MockDelivery::resolving();
        let mut flow = flow_with(&ada());

        let notice = submit(&mut flow, &delivery).expect("should produce a notice");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(notice.message.contains("sent successfully"));
        assert_eq!(flow.fields(), &FormFields::default());
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert_eq!(flow.last_outcome(), Some(&SubmissionState::Succeeded));

        assert_eq!(delivery.calls.get(), 1);
        assert_eq!(
            delivery.sent.borrow()[0],
            ContactPayload {
                from_name: "Ada".to_string(),
                from_email: "ada@example.com".to_string(),
                message: "Hi".to_string(),
            }
        );
    }

    #[test]
    fn test_failed_submission_keeps_fields() {
        let delivery = MockDelivery::rejecting();
        let mut flow = flow_with(&ada());

        let notice = submit(&mut flow, &delivery).expect("should produce a notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.starts_with("Failed"));
        assert!(notice.message.contains("try again"));
        assert_eq!(flow.fields(), &ada());
        assert_eq!(flow.state(), &SubmissionState::Idle);
        assert!(matches!(flow.last_outcome(), Some(SubmissionState::Failed(r)) if r.contains("400")));

        // the user can retry straight away
        let retry = MockDelivery::resolving();
        let notice = submit(&mut flow, &retry).expect("retry should produce a notice");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(retry.calls.get(), 1);
    }

    #[test]
    fn test_all_errors_produce_same_notice() {
        let errors = [
            DeliveryError::Network("connection reset".to_string()),
            DeliveryError::Rejected { status: 412, body: "bad key".to_string() },
            DeliveryError::Config("missing service id".to_string()),
            DeliveryError::Timeout,
        ];
        for e in errors {
            let mut flow = flow_with(&ada());
            flow.begin().unwrap();
            assert_eq!(flow.complete(Err(e)), Some(Notice::error(FAILURE_MESSAGE)));
        }
    }

    #[test]
    fn test_timeout_wins_over_stuck_delivery() {
        let res = block_on(deliver_with_timeout(
            &NeverSettles,
            ContactPayload::from(&ada()),
            future::ready(()),
        ));
        assert_eq!(res, Err(DeliveryError::Timeout));

        let mut flow = flow_with(&ada());
        flow.begin().unwrap();
        flow.complete(res);
        assert_eq!(flow.last_outcome(), Some(&SubmissionState::Failed("timeout".to_string())));
        assert_eq!(flow.fields(), &ada());
    }

    #[test]
    fn test_settled_delivery_beats_pending_timer() {
        let delivery = MockDelivery::resolving();
        let res = block_on(deliver_with_timeout(
            &delivery,
            ContactPayload::from(&ada()),
            future::pending(),
        ));
        assert_eq!(res, Ok(()));
    }
}
