use async_trait::async_trait;
use gloo_net::http::Request;
use log::{debug, error, info};

use crate::config;

use super::error::InquiryError;
use super::inquiry::{InquiryDraft, RelayPayload, ValidInquiry};

/// Where a submission currently stands.
///
/// `Succeeded` and `Failed` both wait for the timed reset; the draft is not
/// accepted for submission again until it has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle { rejection: Option<InquiryError> },
    Submitting,
    Succeeded,
    Failed(InquiryError),
}

/// Delivery seam for validated inquiries. One call, one attempt.
#[async_trait(?Send)]
pub trait Relay {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), InquiryError>;
}

/// Posts inquiries to a hosted form relay as JSON.
#[derive(Clone, PartialEq)]
pub struct FormRelay {
    endpoint: String,
}

impl FormRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

#[async_trait(?Send)]
impl Relay for FormRelay {
    async fn deliver(&self, payload: &RelayPayload) -> Result<(), InquiryError> {
        let request = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(payload)
            .map_err(|e| InquiryError::NetworkFailure(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| InquiryError::NetworkFailure(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        if let Ok(body) = response.json::<serde_json::Value>().await {
            error!("Relay rejected inquiry ({}): {}", status, body);
        }
        Err(InquiryError::RelayRejected(status))
    }
}

/// In-memory state of one widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSession {
    pub draft: InquiryDraft,
    is_open: bool,
    phase: Phase,
}

impl Default for LeadSession {
    fn default() -> Self {
        Self {
            draft: InquiryDraft::default(),
            is_open: false,
            phase: Phase::Idle { rejection: None },
        }
    }
}

impl LeadSession {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn submitted(&self) -> bool {
        matches!(self.phase, Phase::Succeeded)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// Only an idle session takes a new submission. A finished one waits
    /// for its reset first.
    pub fn accepts_submit(&self) -> bool {
        matches!(self.phase(), Phase::Idle { .. })
    }

    /// Delay after which [`LeadSession::reset`] is due, once the relay has
    /// answered either way.
    pub fn reset_due_in(&self) -> Option<u32> {
        match self.phase() {
            Phase::Succeeded | Phase::Failed(_) => Some(config::RESET_DELAY_MS),
            Phase::Idle { .. } | Phase::Submitting => None,
        }
    }

    pub fn error(&self) -> Option<&InquiryError> {
        match &self.phase {
            Phase::Idle { rejection } => rejection.as_ref(),
            Phase::Failed(err) => Some(err),
            Phase::Submitting | Phase::Succeeded => None,
        }
    }

    /// Validates the draft and, when it passes, moves to `Submitting` and
    /// hands back the frozen inquiry for delivery.
    ///
    /// Returns `None` when a submission is already in flight or waiting for
    /// its reset, or when validation rejected the draft (the rejection is
    /// then available from [`LeadSession::error`]).
    pub fn begin_submit(&mut self) -> Option<ValidInquiry> {
        if !self.accepts_submit() {
            debug!("Ignoring submit while {:?}", self.phase);
            return None;
        }

        match self.draft.validate() {
            Ok(inquiry) => {
                self.phase = Phase::Submitting;
                Some(inquiry)
            }
            Err(rejection) => {
                debug!("Inquiry rejected: {:?}", rejection);
                self.phase = Phase::Idle { rejection: Some(rejection) };
                None
            }
        }
    }

    /// Records the relay outcome. On success returns the deep link that
    /// should be opened next.
    pub fn complete(
        &mut self,
        inquiry: &ValidInquiry,
        outcome: Result<(), InquiryError>,
        whatsapp_number: &str,
    ) -> Option<String> {
        if !self.is_submitting() {
            return None;
        }

        match outcome {
            Ok(()) => {
                info!("Inquiry from {} delivered", inquiry.name);
                self.phase = Phase::Succeeded;
                Some(inquiry.whatsapp_link(whatsapp_number))
            }
            Err(err) => {
                error!("Error sending inquiry: {:?}", err);
                self.phase = Phase::Failed(err);
                None
            }
        }
    }

    /// Timed wipe after a finished submission. Clears whatever the fields
    /// hold at that moment and closes the panel.
    pub fn reset(&mut self) {
        self.draft.clear();
        self.phase = Phase::Idle { rejection: None };
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    const NUMBER: &str = "918247392437";

    struct FakeRelay {
        outcome: Result<(), InquiryError>,
        calls: RefCell<Vec<RelayPayload>>,
    }

    impl FakeRelay {
        fn new(outcome: Result<(), InquiryError>) -> Self {
            Self { outcome, calls: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl Relay for FakeRelay {
        async fn deliver(&self, payload: &RelayPayload) -> Result<(), InquiryError> {
            self.calls.borrow_mut().push(payload.clone());
            self.outcome.clone()
        }
    }

    fn filled_session() -> LeadSession {
        let mut session = LeadSession::default();
        session.toggle();
        session.draft.name = "Asha".into();
        session.draft.contact = "8247392437".into();
        session.draft.message = "Hi".into();
        session
    }

    fn run(session: &mut LeadSession, relay: &FakeRelay) -> Option<String> {
        let inquiry = session.begin_submit()?;
        let outcome = block_on(relay.deliver(&inquiry.payload()));
        session.complete(&inquiry, outcome, NUMBER)
    }

    #[test]
    fn missing_field_never_reaches_the_relay() {
        let relay = FakeRelay::new(Ok(()));
        for field in 0..3 {
            let mut session = filled_session();
            match field {
                0 => session.draft.name.clear(),
                1 => session.draft.contact.clear(),
                _ => session.draft.message.clear(),
            }
            assert!(run(&mut session, &relay).is_none());
            assert_eq!(session.error(), Some(&InquiryError::MissingField));
            assert_eq!(session.phase(), &Phase::Idle { rejection: Some(InquiryError::MissingField) });
        }
        assert!(relay.calls.borrow().is_empty());
    }

    #[test]
    fn successful_round_trip_then_reset() {
        let relay = FakeRelay::new(Ok(()));
        let mut session = filled_session();

        let link = run(&mut session, &relay).expect("deep link after success");
        assert!(session.submitted());
        assert!(session.error().is_none());
        assert!(link.contains("Asha"));
        assert!(link.contains("8247392437"));
        assert!(link.contains("%3A%20Hi"));
        assert_eq!(relay.calls.borrow().len(), 1);

        session.reset();
        assert!(!session.is_open());
        assert!(!session.submitted());
        assert_eq!(session.draft, InquiryDraft::default());
    }

    #[test]
    fn rejected_relay_sets_fallback_and_still_resets() {
        let relay = FakeRelay::new(Err(InquiryError::RelayRejected(500)));
        let mut session = filled_session();

        assert!(run(&mut session, &relay).is_none());
        assert!(!session.submitted());
        assert_eq!(
            session.error().map(ToString::to_string).as_deref(),
            Some("Failed to send. Please try WhatsApp directly.")
        );
        assert_eq!(relay.calls.borrow().len(), 1);

        session.reset();
        assert!(!session.is_open());
        assert!(session.error().is_none());
        assert_eq!(session.draft, InquiryDraft::default());
    }

    #[test]
    fn network_failure_is_terminal() {
        let relay = FakeRelay::new(Err(InquiryError::NetworkFailure("offline".into())));
        let mut session = filled_session();

        assert!(run(&mut session, &relay).is_none());
        assert!(matches!(session.phase(), Phase::Failed(InquiryError::NetworkFailure(_))));
        // No second attempt until the reset has run.
        assert!(session.begin_submit().is_none());
        assert_eq!(relay.calls.borrow().len(), 1);
    }

    #[test]
    fn submit_is_not_reentrant_while_in_flight() {
        let mut session = filled_session();
        let first = session.begin_submit();
        assert!(first.is_some());
        assert!(session.is_submitting());
        assert!(session.begin_submit().is_none());
        assert!(session.is_submitting());
    }

    #[test]
    fn reset_wipes_edits_made_while_waiting() {
        let relay = FakeRelay::new(Ok(()));
        let mut session = filled_session();
        run(&mut session, &relay);

        session.close();
        session.toggle();
        session.draft.message = "typed after success".into();
        session.reset();

        assert!(session.draft.message.is_empty());
        assert!(!session.is_open());
    }

    #[test]
    fn validation_error_clears_on_next_valid_submit() {
        let mut session = filled_session();
        session.draft.contact = "a@b".into();
        assert!(session.begin_submit().is_none());
        assert_eq!(session.error(), Some(&InquiryError::InvalidEmail));

        session.draft.contact = "a@b.c".into();
        assert!(session.begin_submit().is_some());
        assert!(session.error().is_none());
    }

    #[test]
    fn reset_is_due_after_four_seconds_on_success() {
        let relay = FakeRelay::new(Ok(()));
        let mut session = filled_session();
        assert_eq!(session.reset_due_in(), None);

        let inquiry = session.begin_submit().unwrap();
        assert_eq!(session.reset_due_in(), None);

        let outcome = block_on(relay.deliver(&inquiry.payload()));
        session.complete(&inquiry, outcome, NUMBER);
        assert_eq!(session.reset_due_in(), Some(4_000));
        assert_eq!(config::RESET_DELAY_MS, 4_000);

        session.reset();
        assert_eq!(session.reset_due_in(), None);
    }

    #[test]
    fn reset_is_due_after_every_delivery_failure() {
        for failure in [
            InquiryError::RelayRejected(422),
            InquiryError::NetworkFailure("offline".into()),
        ] {
            let relay = FakeRelay::new(Err(failure));
            let mut session = filled_session();
            run(&mut session, &relay);
            assert_eq!(session.reset_due_in(), Some(config::RESET_DELAY_MS));
        }
    }

    #[test]
    fn validation_rejection_schedules_no_reset() {
        let mut session = filled_session();
        session.draft.name.clear();
        assert!(session.begin_submit().is_none());
        assert_eq!(session.reset_due_in(), None);
        assert!(session.accepts_submit());
    }

    #[test]
    fn submit_is_closed_until_reset_after_any_outcome() {
        let mut session = filled_session();
        assert!(session.accepts_submit());
        let inquiry = session.begin_submit().unwrap();
        assert!(!session.accepts_submit());

        session.complete(&inquiry, Err(InquiryError::RelayRejected(500)), NUMBER);
        assert!(!session.accepts_submit());

        session.reset();
        assert!(session.accepts_submit());
    }

    #[test]
    fn late_outcome_without_submission_is_ignored() {
        let mut session = filled_session();
        let inquiry = session.draft.validate().unwrap();
        assert!(session.complete(&inquiry, Ok(()), NUMBER).is_none());
        assert!(!session.submitted());
    }
}
