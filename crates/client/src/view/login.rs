use shared::{
    abstract_trait::{DynAuthService, DynSessionService},
    domain::request::LoginRequest,
    utils::{AppError, FieldErrors, field_errors},
};
use std::fmt;
use tracing::info;
use validator::Validate;

use super::{FormState, Notice, RequestState, Route, SubmitOutcome, write_errors, write_notice};

pub const LOGIN_WELCOME: &str = "Welcome back to Discovery!";

const FIELDS: &[&str] = &["email", "password"];

pub struct LoginView {
    auth_service: DynAuthService,
    session_service: DynSessionService,
    form: LoginRequest,
    state: FormState,
    redirect: Option<Route>,
}

impl LoginView {
    pub fn new(auth_service: DynAuthService, session_service: DynSessionService) -> Self {
        let mut view = Self {
            auth_service,
            session_service,
            form: LoginRequest::default(),
            state: FormState::default(),
            redirect: None,
        };
        view.revalidate();
        view
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

    pub fn form(&self) -> &LoginRequest {
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

    pub fn redirect(&self) -> Option<&Route> {
        self.redirect.as_ref()
    }

    fn revalidate(&mut self) {
        let errors = match self.form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => field_errors(&e),
        };
        self.state.set_errors(errors);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state.touch_all(FIELDS);
        self.revalidate();
        if self.state.has_errors() || !self.state.begin() {
            return SubmitOutcome::Blocked;
        }

        match self.login().await {
            Ok(()) => {
                info!("Login completed for {}", self.form.email);
                self.form = LoginRequest::default();
                self.state.reset();
                self.revalidate();
                self.redirect = Some(Route::Dashboard);
                self.state.succeed(LOGIN_WELCOME.to_string())
            }
            Err(err) => self.state.fail(&err),
        }
    }

    async fn login(&self) -> Result<(), AppError> {
        let response = self.auth_service.login_user(&self.form).await?;

        let Some(data) = response.data else {
            return Err(AppError::ConnectivityError(
                "login response carried no token".to_string(),
            ));
        };

        self.session_service.login(&data.token).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }
}

impl fmt::Display for LoginView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sign In")?;
        writeln!(f, "  Email:    {}", self.form.email)?;
        writeln!(f, "  Password: {}", "*".repeat(self.form.password.chars().count()))?;
        write_errors(f, &self.errors())?;
        if self.state.request() == RequestState::Submitting {
            writeln!(f, "Signing In...")?;
        }
        write_notice(f, self.notice())
    }
}
