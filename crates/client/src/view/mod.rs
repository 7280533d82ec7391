//! Headless screens.
//!
//! Each view owns its form values, field errors and request state, talks to
//! the services it was handed, and renders itself as text via `Display`.
//! Nothing here touches the terminal directly, so every screen can be driven
//! from tests with fake services.

mod dashboard;
mod header;
mod login;
mod signup;
mod withdraw;
mod withdraw_list;

pub use self::dashboard::DashboardView;
pub use self::header::{Header, NavLink};
pub use self::login::LoginView;
pub use self::signup::SignupView;
pub use self::withdraw::WithdrawView;
pub use self::withdraw_list::WithdrawListView;

use shared::utils::{AppError, FieldErrors};
use std::collections::BTreeSet;
use tracing::warn;

/// Where the app should go next.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    Payments { balance: Option<f64> },
    WithdrawList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting,
}

/// Transient message, the terminal equivalent of a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(String),
    Failed(String),
    /// Validation failed or a request was already in flight; nothing was sent.
    Blocked,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded(_))
    }
}

/// Request lifecycle and field errors shared by every form.
#[derive(Debug, Default)]
pub(crate) struct FormState {
    request: RequestState,
    errors: FieldErrors,
    touched: BTreeSet<&'static str>,
    notice: Option<Notice>,
}

impl FormState {
    pub fn request(&self) -> RequestState {
        self.request
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn touch(&mut self, field: &'static str) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self, fields: &[&'static str]) {
        self.touched.extend(fields.iter().copied());
    }

    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors for fields the user has already interacted with.
    pub fn visible_errors(&self) -> FieldErrors {
        self.errors
            .iter()
            .filter(|(field, _)| self.touched.contains(field.as_str()))
            .map(|(field, msg)| (field.clone(), msg.clone()))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        self.request == RequestState::Idle && self.errors.is_empty()
    }

    /// Enters `Submitting`; refuses when a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.request == RequestState::Submitting {
            warn!("Ignoring duplicate submission while a request is in flight");
            return false;
        }
        self.request = RequestState::Submitting;
        self.notice = None;
        true
    }

    pub fn succeed(&mut self, message: String) -> SubmitOutcome {
        self.request = RequestState::Idle;
        self.notice = Some(Notice::Success(message.clone()));
        SubmitOutcome::Succeeded(message)
    }

    pub fn fail(&mut self, err: &AppError) -> SubmitOutcome {
        let message = err.user_message();
        self.request = RequestState::Idle;
        self.notice = Some(Notice::Error(message.clone()));
        SubmitOutcome::Failed(message)
    }

    pub fn reset(&mut self) {
        self.errors.clear();
        self.touched.clear();
    }

    #[cfg(test)]
    pub fn force_submitting(&mut self) {
        self.request = RequestState::Submitting;
    }
}

/// `2500` -> `2,500`, `2847.5` -> `2,847.5`.
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if negative { "-" } else { "" };

    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

fn write_errors(f: &mut std::fmt::Formatter<'_>, errors: &FieldErrors) -> std::fmt::Result {
    for (field, message) in errors {
        writeln!(f, "  ! {field}: {message}")?;
    }
    Ok(())
}

fn write_notice(f: &mut std::fmt::Formatter<'_>, notice: Option<&Notice>) -> std::fmt::Result {
    match notice {
        Some(Notice::Success(msg)) => writeln!(f, "[ok] {msg}"),
        Some(Notice::Error(msg)) => writeln!(f, "[error] {msg}"),
        None => Ok(()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(2500.0), "2,500");
        assert_eq!(format_amount(2847.5), "2,847.5");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1000.0), "-1,000");
    }

    #[test]
    fn form_state_blocks_overlapping_requests() {
        let mut state = FormState::default();
        assert!(state.begin());
        assert!(!state.begin());
        assert!(!state.can_submit());

        state.succeed("done".to_string());
        assert_eq!(state.request(), RequestState::Idle);
        assert!(state.begin());
    }

    #[test]
    fn only_touched_errors_are_visible() {
        let mut state = FormState::default();
        state.set_errors(FieldErrors::from([
            ("email".to_string(), "Email is required".to_string()),
            ("password".to_string(), "Password is required".to_string()),
        ]));
        state.touch("email");

        let visible = state.visible_errors();
        assert_eq!(visible.len(), 1);
        assert!(visible.contains_key("email"));
        assert!(!state.can_submit());
    }
}
