use shared::{
    abstract_trait::{DynSessionService, DynWithdrawService},
    domain::{
        request::UpdateWithdrawStatusRequest,
        response::withdraw::{WithdrawStatus, WithdrawalResponse},
    },
    utils::{AppError, format_timestamp},
};
use std::fmt;
use tracing::{info, warn};

use super::{Header, Notice, RequestState, Route, SubmitOutcome, write_notice};

/// Admin review of every withdrawal request.
///
/// The role check here only decides what the screen shows; the server is
/// still the one enforcing who may approve or reject.
pub struct WithdrawListView {
    withdraw_service: DynWithdrawService,
    session_service: DynSessionService,
    header: Header,
    withdrawals: Vec<WithdrawalResponse>,
    loading: bool,
    request: RequestState,
    notice: Option<Notice>,
    redirect: Option<Route>,
}

impl WithdrawListView {
    pub fn new(withdraw_service: DynWithdrawService, session_service: DynSessionService) -> Self {
        Self {
            withdraw_service,
            session_service,
            header: Header::default(),
            withdrawals: Vec::new(),
            loading: true,
            request: RequestState::Idle,
            notice: None,
            redirect: None,
        }
    }

    /// Runs the admin guard, then fetches the list.
    pub async fn open(&mut self) -> Result<(), AppError> {
        let session = self.session_service.load().await?;
        self.header = Header::for_session(&session);

        let Some(user) = session.user.as_ref() else {
            self.redirect = Some(Route::Login);
            return Err(AppError::Unauthenticated);
        };

        if !session.is_admin() {
            warn!("Withdraw list refused for role {:?}", user.role_id());
            let err = AppError::AccessDenied;
            self.notice = Some(Notice::Error(err.user_message()));
            self.redirect = Some(Route::Dashboard);
            return Err(err);
        }

        self.refresh().await
    }

    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.loading = true;
        let result = self.withdraw_service.get_withdrawals().await;
        self.loading = false;

        match result {
            Ok(response) => {
                self.withdrawals = response.data.unwrap_or_default();
                Ok(())
            }
            Err(err) => {
                self.notice = Some(Notice::Error(err.user_message()));
                Err(err)
            }
        }
    }

    pub async fn approve(&mut self, withdrawal_id: i64) -> SubmitOutcome {
        self.update(withdrawal_id, WithdrawStatus::Approved).await
    }

    pub async fn reject(&mut self, withdrawal_id: i64) -> SubmitOutcome {
        self.update(withdrawal_id, WithdrawStatus::Rejected).await
    }

    async fn update(&mut self, withdrawal_id: i64, status: WithdrawStatus) -> SubmitOutcome {
        let actionable = self
            .withdrawals
            .iter()
            .any(|w| w.id == withdrawal_id && w.status.is_pending());

        if !actionable {
            warn!("Withdrawal {withdrawal_id} is not pending; nothing to do");
            return SubmitOutcome::Blocked;
        }

        if self.request == RequestState::Submitting {
            warn!("Ignoring status update while another one is in flight");
            return SubmitOutcome::Blocked;
        }

        self.request = RequestState::Submitting;
        self.notice = None;

        let request = UpdateWithdrawStatusRequest {
            withdrawal_id,
            status,
        };
        let result = self.withdraw_service.update_withdraw_status(&request).await;
        self.request = RequestState::Idle;

        match result {
            Ok(_) => {
                let message = format!("Withdrawal {} successfully", status.verb());
                info!("{message} (id {withdrawal_id})");
                self.notice = Some(Notice::Success(message.clone()));

                if let Err(err) = self.refresh().await {
                    warn!("Re-fetch after status update failed: {err}");
                }

                SubmitOutcome::Succeeded(message)
            }
            Err(err) => {
                let message = err.user_message();
                self.notice = Some(Notice::Error(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }

    pub fn withdrawals(&self) -> &[WithdrawalResponse] {
        &self.withdrawals
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn redirect(&self) -> Option<&Route> {
        self.redirect.as_ref()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    #[cfg(test)]
    pub(crate) fn force_submitting(&mut self) {
        self.request = RequestState::Submitting;
    }
}

impl fmt::Display for WithdrawListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;

        if self.redirect.is_some() {
            return write_notice(f, self.notice.as_ref());
        }

        writeln!(f, "Withdrawal Requests")?;

        if self.loading {
            writeln!(f, "Loading withdrawals...")?;
        } else if self.withdrawals.is_empty() {
            writeln!(f, "No withdrawal requests found")?;
        }

        for w in &self.withdrawals {
            writeln!(f)?;
            writeln!(
                f,
                "#{} [{}] {} (user {})",
                w.id,
                w.status,
                w.user_name(),
                w.user_id.map_or_else(|| "-".to_string(), |id| id.to_string())
            )?;
            writeln!(f, "  Amount: Rs {:.2}", w.withdraw_amount)?;
            writeln!(f, "  Email:  {}", w.user_email())?;
            writeln!(f, "  UPI:    {}", w.upi_or_placeholder())?;
            if let Some(date) = &w.payment_date {
                writeln!(f, "  Date:   {}", format_timestamp(date))?;
            }
            match w.status {
                WithdrawStatus::Pending => writeln!(f, "  Actions: approve {0} | reject {0}", w.id)?,
                WithdrawStatus::Approved => writeln!(f, "  ✓ Approved")?,
                WithdrawStatus::Rejected => writeln!(f, "  ✗ Rejected")?,
                WithdrawStatus::Unknown(_) => {}
            }
        }

        write_notice(f, self.notice.as_ref())
    }
}
