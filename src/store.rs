//! Form submission lifecycle as an explicit state/event/effect cycle
//!
//! Every transition is a deterministic function of the current state and one
//! event. I/O is never performed here; a transition that needs a request
//! issued describes it as an [`Effect`], and the app shell feeds the outcome
//! back in as another event.

use crate::api::{GenerateError, GenerateRequest, Priority};
use tracing::{debug, error, info};

/// Submission lifecycle. Exactly one variant is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// User-entered form fields
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub org_name: String,
    pub org_website: String,
}

/// Editable form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OrgName,
    OrgWebsite,
}

#[derive(Debug, Default)]
pub struct State {
    pub form: FormFields,
    pub status: Status,
    pub priorities: Vec<Priority>,
    /// Monotonically increasing submission counter. Doubles as the id of the
    /// in-flight (or most recently issued) request; responses carrying any
    /// other id are stale and dropped.
    pub request_seq: u64,
}

impl State {
    /// The result block and the export links are shown exactly when this
    /// holds.
    pub fn has_results(&self) -> bool {
        !self.priorities.is_empty()
    }
}

#[derive(Debug)]
pub enum Event {
    FieldChanged(Field, String),
    SubmitRequested,
    ResponseArrived {
        request_id: u64,
        outcome: Result<Vec<Priority>, GenerateError>,
    },
}

/// Side effect requested by a transition
#[derive(Debug)]
pub enum Effect {
    SendRequest {
        request_id: u64,
        request: GenerateRequest,
    },
}

/// Apply one event to the state, returning the effect to execute, if any.
pub fn reduce(state: &mut State, event: Event) -> Option<Effect> {
    match event {
        Event::FieldChanged(field, value) => {
            match field {
                Field::OrgName => state.form.org_name = value,
                Field::OrgWebsite => state.form.org_website = value,
            }
            None
        }

        Event::SubmitRequested => {
            if state.status == Status::Submitting {
                debug!("Submit ignored, request already in flight");
                return None;
            }
            if state.form.org_name.trim().is_empty() {
                debug!("Submit ignored, organization name is empty");
                return None;
            }

            state.request_seq += 1;
            state.status = Status::Submitting;
            info!(
                request_id = state.request_seq,
                org = %state.form.org_name,
                "Submitting generation request"
            );
            Some(Effect::SendRequest {
                request_id: state.request_seq,
                request: GenerateRequest {
                    org_name: state.form.org_name.clone(),
                    org_website: state.form.org_website.clone(),
                },
            })
        }

        Event::ResponseArrived {
            request_id,
            outcome,
        } => {
            if request_id != state.request_seq {
                debug!(
                    request_id,
                    current = state.request_seq,
                    "Discarding stale response"
                );
                return None;
            }
            match outcome {
                Ok(priorities) => {
                    info!(request_id, count = priorities.len(), "Generation succeeded");
                    state.priorities = priorities;
                    state.status = Status::Success;
                }
                Err(e) => {
                    // The prior result set stays untouched on failure.
                    error!(request_id, error = %e, "Generation failed");
                    state.status = Status::Failed;
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Definition;
    use pretty_assertions::assert_eq;

    fn acme_priorities() -> Vec<Priority> {
        vec![Priority {
            priority: "Expand Market".into(),
            description: "Grow share".into(),
            definitions: vec![Definition {
                title: "Launch EU".into(),
                description: "Open EU office".into(),
            }],
        }]
    }

    /// Fill in the form and submit; returns the id of the issued request.
    fn submit(state: &mut State, org_name: &str, org_website: &str) -> Option<u64> {
        reduce(
            state,
            Event::FieldChanged(Field::OrgName, org_name.into()),
        );
        reduce(
            state,
            Event::FieldChanged(Field::OrgWebsite, org_website.into()),
        );
        match reduce(state, Event::SubmitRequested) {
            Some(Effect::SendRequest { request_id, .. }) => Some(request_id),
            None => None,
        }
    }

    #[test]
    fn field_edits_update_form_without_effects() {
        let mut state = State::default();
        let effect = reduce(
            &mut state,
            Event::FieldChanged(Field::OrgName, "Acme".into()),
        );
        assert!(effect.is_none());
        assert_eq!(state.form.org_name, "Acme");
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn submit_transitions_through_submitting_to_success() {
        let mut state = State::default();
        let id = submit(&mut state, "Acme", "acme.com").unwrap();
        assert_eq!(state.status, Status::Submitting);

        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: id,
                outcome: Ok(acme_priorities()),
            },
        );
        assert_eq!(state.status, Status::Success);
        assert_eq!(state.priorities, acme_priorities());
        assert!(state.has_results());
    }

    #[test]
    fn submit_carries_current_field_values() {
        let mut state = State::default();
        reduce(
            &mut state,
            Event::FieldChanged(Field::OrgName, "Acme".into()),
        );
        reduce(
            &mut state,
            Event::FieldChanged(Field::OrgWebsite, "acme.com".into()),
        );
        match reduce(&mut state, Event::SubmitRequested) {
            Some(Effect::SendRequest { request, .. }) => {
                assert_eq!(request.org_name, "Acme");
                assert_eq!(request.org_website, "acme.com");
            }
            None => panic!("expected a request effect"),
        }
    }

    #[test]
    fn empty_org_name_issues_no_request() {
        let mut state = State::default();
        assert!(submit(&mut state, "", "acme.com").is_none());
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.request_seq, 0);
    }

    #[test]
    fn whitespace_org_name_issues_no_request() {
        let mut state = State::default();
        assert!(submit(&mut state, "   ", "").is_none());
        assert_eq!(state.status, Status::Idle);
    }

    #[test]
    fn resubmission_blocked_while_in_flight() {
        let mut state = State::default();
        let id = submit(&mut state, "Acme", "").unwrap();
        assert_eq!(id, 1);

        let second = reduce(&mut state, Event::SubmitRequested);
        assert!(second.is_none());
        assert_eq!(state.request_seq, 1);
        assert_eq!(state.status, Status::Submitting);
    }

    #[test]
    fn failure_sets_failed_and_keeps_previous_results() {
        let mut state = State::default();
        let first = submit(&mut state, "Acme", "acme.com").unwrap();
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: first,
                outcome: Ok(acme_priorities()),
            },
        );

        // Server returns HTTP 500 on the second attempt.
        let second = submit(&mut state, "Acme", "acme.com").unwrap();
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: second,
                outcome: Err(GenerateError::Status(500)),
            },
        );
        assert_eq!(state.status, Status::Failed);
        assert_eq!(state.priorities, acme_priorities());
    }

    #[test]
    fn failed_form_can_submit_again() {
        let mut state = State::default();
        let id = submit(&mut state, "Acme", "").unwrap();
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: id,
                outcome: Err(GenerateError::Status(503)),
            },
        );
        assert_eq!(state.status, Status::Failed);

        // Never locked in Submitting; a fresh submit goes out.
        assert_eq!(submit(&mut state, "Acme", ""), Some(2));
        assert_eq!(state.status, Status::Submitting);
    }

    #[test]
    fn prior_results_stay_visible_while_resubmitting() {
        let mut state = State::default();
        let id = submit(&mut state, "Acme", "").unwrap();
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: id,
                outcome: Ok(acme_priorities()),
            },
        );

        submit(&mut state, "Acme", "").unwrap();
        assert_eq!(state.status, Status::Submitting);
        assert_eq!(state.priorities, acme_priorities());
    }

    #[test]
    fn success_replaces_results_wholesale() {
        let mut state = State::default();
        let first = submit(&mut state, "Acme", "").unwrap();
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: first,
                outcome: Ok(acme_priorities()),
            },
        );

        let replacement = vec![Priority {
            priority: "Governance".into(),
            description: "High performing government".into(),
            definitions: vec![],
        }];
        let second = submit(&mut state, "Acme", "").unwrap();
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: second,
                outcome: Ok(replacement.clone()),
            },
        );
        assert_eq!(state.priorities, replacement);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = State::default();
        let first = submit(&mut state, "Acme", "").unwrap();
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: first,
                outcome: Err(GenerateError::Status(500)),
            },
        );
        let second = submit(&mut state, "Acme", "").unwrap();

        // A late duplicate of the first response must not disturb the
        // in-flight submission or its eventual result.
        let stale = reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: first,
                outcome: Ok(acme_priorities()),
            },
        );
        assert!(stale.is_none());
        assert_eq!(state.status, Status::Submitting);
        assert!(state.priorities.is_empty());

        let fresh = vec![Priority {
            priority: "Current".into(),
            description: "From the newest request".into(),
            definitions: vec![],
        }];
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: second,
                outcome: Ok(fresh.clone()),
            },
        );
        assert_eq!(state.priorities, fresh);
        assert_eq!(state.status, Status::Success);
    }

    #[test]
    fn empty_result_set_hides_results_block() {
        let mut state = State::default();
        let id = submit(&mut state, "Acme", "").unwrap();
        reduce(
            &mut state,
            Event::ResponseArrived {
                request_id: id,
                outcome: Ok(vec![]),
            },
        );
        assert_eq!(state.status, Status::Success);
        assert!(!state.has_results());
    }
}
