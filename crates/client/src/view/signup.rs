use shared::{
    abstract_trait::DynAuthService,
    domain::request::SignupRequest,
    utils::{FieldErrors, field_errors},
};
use std::fmt;
use tracing::info;
use validator::Validate;

use super::{FormState, Notice, RequestState, Route, SubmitOutcome, write_errors, write_notice};

pub const SIGNUP_WELCOME: &str = "Account created successfully! Welcome to Discovery!";

const FIELDS: &[&str] = &["name", "email", "password"];

pub struct SignupView {
    auth_service: DynAuthService,
    form: SignupRequest,
    state: FormState,
}

impl SignupView {
    pub fn new(auth_service: DynAuthService) -> Self {
        let mut view = Self {
            auth_service,
            form: SignupRequest::default(),
            state: FormState::default(),
        };
        view.revalidate();
        view
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
        self.state.touch("name");
        self.revalidate();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
        self.state.touch("email");
        self.revalidate();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.form.password = password.into();
        self.state.touch("password");
        self.revalidate();
    }

    pub fn form(&self) -> &SignupRequest {
        &self.form
    }

    pub fn errors(&self) -> FieldErrors {
        self.state.visible_errors()
    }

    pub fn request_state(&self) -> RequestState {
        self.state.request()
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.state.notice()
    }

    /// "Already have an account?" link.
    pub fn login_link(&self) -> Route {
        Route::Login
    }

    fn revalidate(&mut self) {
        let errors = match self.form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => field_errors(&e),
        };
        self.state.set_errors(errors);
    }

    /// Creating an account does not sign the user in.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state.touch_all(FIELDS);
        self.revalidate();
        if self.state.has_errors() || !self.state.begin() {
            return SubmitOutcome::Blocked;
        }

        match self.auth_service.signup_user(&self.form).await {
            Ok(_) => {
                info!("Account created for {}", self.form.email);
                self.form = SignupRequest::default();
                self.state.reset();
                self.revalidate();
                self.state.succeed(SIGNUP_WELCOME.to_string())
            }
            Err(err) => self.state.fail(&err),
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }
}

impl fmt::Display for SignupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Create Account")?;
        writeln!(f, "  Name:     {}", self.form.name)?;
        writeln!(f, "  Email:    {}", self.form.email)?;
        writeln!(f, "  Password: {}", "*".repeat(self.form.password.chars().count()))?;
        write_errors(f, &self.errors())?;
        if self.state.request() == RequestState::Submitting {
            writeln!(f, "Creating Account...")?;
        }
        write_notice(f, self.notice())
    }
}
