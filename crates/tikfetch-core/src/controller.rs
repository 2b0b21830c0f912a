//! The request controller: orchestrates the validate -> submit -> render
//! cycle for one outstanding request at a time.
//!
//! Transitions: Idle -> Loading on a valid submit; Loading -> Result on
//! logical success; Loading -> Error on pre-flight rejection, transport
//! failure, or logical failure; Result/Error -> Idle on edit or clear;
//! Result/Error -> Loading on a new submit. A new submit supersedes an
//! in-flight one: completions carrying a stale token are discarded.

use crate::extract::{Extractor, SubmitError};
use crate::input::{self, ValidationError};
use crate::render::{Render, UiFrame};
use crate::state::{ErrorPayload, RequestState, ResultPayload};

/// Identifies one accepted submission. A completion is applied only while
/// its token is still the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// An accepted submission: the one request the caller must now perform.
#[derive(Debug, Clone)]
pub struct Pending {
    pub token: RequestToken,
    pub url: String,
}

/// Owns the input buffer, the visible state, and the in-flight token;
/// renders through [`Render`] after every mutation.
pub struct RequestController<R: Render> {
    render: R,
    input: String,
    state: RequestState,
    generation: u64,
    in_flight: Option<RequestToken>,
}

impl<R: Render> RequestController<R> {
    /// Creates an idle controller and renders the initial frame.
    pub fn new(render: R) -> Self {
        let mut ctl = Self {
            render,
            input: String::new(),
            state: RequestState::Idle,
            generation: 0,
            in_flight: None,
        };
        ctl.render_frame(false);
        ctl
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Typed edit: replaces the input and hides any visible panel.
    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
        self.state = RequestState::Idle;
        self.render_frame(false);
    }

    /// Paste: strips tracking query suffixes from recognized links, then
    /// behaves as a typed edit.
    pub fn paste(&mut self, text: &str) {
        match input::sanitize_pasted(text) {
            Some(cleaned) => self.set_input(&cleaned),
            None => self.set_input(text),
        }
    }

    /// Resets the input, hides the clear affordance, returns focus to the
    /// input field, and goes back to idle. Idempotent; no network activity.
    /// Any in-flight request is abandoned (its completion will be stale).
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.state = RequestState::Idle;
        self.in_flight = None;
        self.render_frame(true);
    }

    /// Validates the current input and, if it passes, enters Loading and
    /// returns the request the caller must perform. On rejection the error
    /// panel is shown and no network call may be made.
    pub fn begin_submit(&mut self) -> Result<Pending, ValidationError> {
        let trimmed = self.input.trim().to_string();
        if let Err(err) = input::validate(&trimmed) {
            self.state = RequestState::Error(ErrorPayload::from(&SubmitError::Validation(err)));
            self.render_frame(false);
            return Err(err);
        }

        self.generation += 1;
        let token = RequestToken(self.generation);
        self.in_flight = Some(token);
        self.state = RequestState::Loading;
        self.render_frame(false);
        Ok(Pending {
            token,
            url: trimmed,
        })
    }

    /// Applies the outcome of a submission. A completion whose token was
    /// superseded by a newer submit (or abandoned by a clear) is discarded
    /// without touching the state.
    pub fn finish_submit(
        &mut self,
        token: RequestToken,
        outcome: Result<ResultPayload, SubmitError>,
    ) {
        if self.in_flight != Some(token) {
            tracing::debug!("discarding stale completion for token {:?}", token);
            return;
        }
        self.in_flight = None;
        self.state = match outcome {
            Ok(payload) => RequestState::Result(payload),
            Err(err) => RequestState::Error(ErrorPayload::from(&err)),
        };
        self.render_frame(false);
    }

    /// Runs one full cycle against `extractor` for synchronous frontends.
    pub fn submit(&mut self, extractor: &dyn Extractor) {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(_) => return,
        };
        let outcome = extractor.extract(&pending.url);
        self.finish_submit(pending.token, outcome);
    }

    fn render_frame(&mut self, focus_input: bool) {
        let frame = UiFrame {
            input: &self.input,
            clear_visible: !self.input.is_empty(),
            submit_enabled: self.in_flight.is_none(),
            focus_input,
            state: &self.state,
        };
        self.render.render(&frame);
    }
}
