use shared::{
    abstract_trait::{DynSessionService, DynUserService, DynWithdrawService},
    domain::request::{CreateWithdrawRequest, MIN_WITHDRAW_AMOUNT, WITHDRAW_STEP, WithdrawForm},
    utils::{AppError, FieldErrors, field_errors},
};
use std::fmt;
use tracing::info;

use super::{
    FormState, Header, Notice, RequestState, SubmitOutcome, format_amount, write_errors,
    write_notice,
};

pub const WITHDRAW_SUBMITTED: &str = "Withdrawal request submitted";

const FIELDS: &[&str] = &["withdraw_amount", "upi"];

/// Withdrawal request form ("Payments").
pub struct WithdrawView {
    user_service: DynUserService,
    withdraw_service: DynWithdrawService,
    session_service: DynSessionService,
    header: Header,
    balance: Option<f64>,
    form: WithdrawForm,
    state: FormState,
}

impl WithdrawView {
    pub fn new(
        user_service: DynUserService,
        withdraw_service: DynWithdrawService,
        session_service: DynSessionService,
    ) -> Self {
        let mut view = Self {
            user_service,
            withdraw_service,
            session_service,
            header: Header::default(),
            balance: None,
            form: WithdrawForm::default(),
            state: FormState::default(),
        };
        view.revalidate();
        view
    }

    /// Reads the balance from the server. A balance carried over from the
    /// dashboard is never trusted.
    pub async fn open(&mut self) -> Result<(), AppError> {
        let session = self.session_service.load().await?;
        self.header = Header::for_session(&session);

        let dashboard = self
            .user_service
            .get_dashboard()
            .await?
            .data
            .ok_or_else(|| AppError::ConnectivityError("dashboard carried no data".to_string()))?;

        self.balance = Some(dashboard.balance());
        self.revalidate();
        info!("Withdrawal form opened with balance {}", dashboard.balance());
        Ok(())
    }

    pub fn balance(&self) -> Option<f64> {
        self.balance
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.form.withdraw_amount = amount.into();
        self.state.touch("withdraw_amount");
        self.revalidate();
    }

    pub fn set_upi(&mut self, upi: impl Into<String>) {
        self.form.upi = upi.into();
        self.state.touch("upi");
        self.revalidate();
    }

    pub fn form(&self) -> &WithdrawForm {
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

    fn checked(&self) -> Result<CreateWithdrawRequest, FieldErrors> {
        self.form
            .validate(self.balance.unwrap_or(0.0))
            .map_err(|e| field_errors(&e))
    }

    fn revalidate(&mut self) {
        let errors = self.checked().err().unwrap_or_default();
        self.state.set_errors(errors);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state.touch_all(FIELDS);
        let request = match self.checked() {
            Ok(request) => request,
            Err(errors) => {
                self.state.set_errors(errors);
                return SubmitOutcome::Blocked;
            }
        };
        self.state.set_errors(FieldErrors::new());

        if !self.state.begin() {
            return SubmitOutcome::Blocked;
        }

        match self.withdraw_service.create_withdraw(&request).await {
            Ok(response) => {
                info!(
                    "Withdrawal of {} to {} requested",
                    request.withdraw_amount, request.upi
                );
                self.form = WithdrawForm::default();
                self.state.reset();
                self.revalidate();
                self.state.succeed(response.message_or(WITHDRAW_SUBMITTED))
            }
            Err(err) => self.state.fail(&err),
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }
}

impl fmt::Display for WithdrawView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        writeln!(f, "Withdraw Funds")?;
        match self.balance {
            Some(balance) => writeln!(f, "Available balance: Rs {}", format_amount(balance))?,
            None => writeln!(f, "Available balance: loading...")?,
        }
        writeln!(f, "  Amount: {}", self.form.withdraw_amount)?;
        writeln!(f, "  UPI ID: {}", self.form.upi)?;
        write_errors(f, &self.errors())?;
        writeln!(f, "Minimum withdrawal amount: Rs {MIN_WITHDRAW_AMOUNT}")?;
        writeln!(f, "Amount must be in multiples of Rs {WITHDRAW_STEP}")?;
        writeln!(f, "Processing time: 2 hours")?;
        if self.state.request() == RequestState::Submitting {
            writeln!(f, "Processing...")?;
        }
        write_notice(f, self.notice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fakes::{FakeUser, FakeWithdraw};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use shared::{
        domain::response::{ApiResponse, user::DashboardResponse},
        repository::MemorySessionRepository,
        service::SessionService,
    };
    use std::sync::Arc;

    async fn opened(balance: f64) -> (Arc<FakeWithdraw>, WithdrawView) {
        let user = FakeUser::default();
        user.dashboards.lock().unwrap().push(Ok(ApiResponse::success(
            "ok",
            Some(DashboardResponse {
                total_amount: balance,
                ..Default::default()
            }),
        )));
        let withdraw = Arc::new(FakeWithdraw::default());
        let session: DynSessionService =
            Arc::new(SessionService::new(Arc::new(MemorySessionRepository::new())));

        let mut view = WithdrawView::new(Arc::new(user), withdraw.clone(), session);
        view.open().await.unwrap();
        (withdraw, view)
    }

    #[tokio::test]
    async fn amount_not_multiple_of_step_makes_no_call() {
        let (withdraw, mut view) = opened(5000.0).await;

        view.set_amount("1500");
        view.set_upi("user@okaxis");

        assert_eq!(view.submit().await, SubmitOutcome::Blocked);
        assert_eq!(
            view.errors()["withdraw_amount"],
            "Amount must be in multiples of 1000"
        );
        assert!(withdraw.sent_creates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn amount_above_balance_makes_no_call() {
        let (withdraw, mut view) = opened(1000.0).await;

        view.set_amount("2000");
        view.set_upi("user@okaxis");

        assert_eq!(view.submit().await, SubmitOutcome::Blocked);
        assert_eq!(
            view.errors()["withdraw_amount"],
            "Cannot withdraw more than your balance"
        );
        assert!(withdraw.sent_creates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn valid_request_shows_server_message_and_resets() {
        let (withdraw, mut view) = opened(5000.0).await;
        withdraw.creates.lock().unwrap().push(Ok(ApiResponse::<Value>::success(
            "Withdrawal request created",
            None,
        )));

        view.set_amount("2000");
        view.set_upi(" user@okaxis ");
        let outcome = view.submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Succeeded("Withdrawal request created".to_string())
        );
        assert_eq!(
            withdraw.sent_creates.lock().unwrap().as_slice(),
            &[CreateWithdrawRequest {
                withdraw_amount: 2000,
                upi: "user@okaxis".to_string(),
            }]
        );
        assert_eq!(view.form(), &WithdrawForm::default());
        assert!(view.errors().is_empty());
    }

    #[tokio::test]
    async fn server_rejection_keeps_input() {
        let (withdraw, mut view) = opened(5000.0).await;
        withdraw
            .creates
            .lock()
            .unwrap()
            .push(Err(AppError::DomainError("Insufficient balance".to_string())));

        view.set_amount("3000");
        view.set_upi("user@okaxis");

        assert_eq!(
            view.submit().await,
            SubmitOutcome::Failed("Insufficient balance".to_string())
        );
        assert_eq!(view.form().withdraw_amount, "3000");
    }

    #[tokio::test]
    async fn upi_shape_is_checked() {
        let (_withdraw, mut view) = opened(5000.0).await;

        view.set_upi("user@ok");
        assert_eq!(view.errors()["upi"], "Please enter a valid UPI ID");

        view.set_upi("");
        assert_eq!(view.errors()["upi"], "UPI ID is required");
    }

    #[tokio::test]
    async fn balance_comes_from_server_and_renders() {
        let (_withdraw, view) = opened(2847.5).await;
        assert_eq!(view.balance(), Some(2847.5));
        assert!(view.to_string().contains("Rs 2,847.5"));
    }

    #[tokio::test]
    async fn duplicate_submission_is_blocked() {
        let (withdraw, mut view) = opened(5000.0).await;
        view.set_amount("2000");
        view.set_upi("user@okaxis");
        view.state_mut().force_submitting();

        assert_eq!(view.submit().await, SubmitOutcome::Blocked);
        assert!(withdraw.sent_creates.lock().unwrap().is_empty());
    }
}
