use shared::{
    abstract_trait::{DynSessionService, DynUserService},
    domain::response::user::DashboardResponse,
    utils::AppError,
};
use std::fmt;
use tracing::{error, info};

use super::{Header, Notice, RequestState, Route, format_amount, write_notice};

pub struct DashboardView {
    user_service: DynUserService,
    session_service: DynSessionService,
    header: Header,
    data: Option<DashboardResponse>,
    request: RequestState,
    notice: Option<Notice>,
}

impl DashboardView {
    pub fn new(user_service: DynUserService, session_service: DynSessionService) -> Self {
        Self {
            user_service,
            session_service,
            header: Header::default(),
            data: None,
            request: RequestState::Idle,
            notice: None,
        }
    }

    /// Fetches the summary once. A failure leaves the previous data in place
    /// and surfaces the message as a notice.
    pub async fn load(&mut self) -> Result<(), AppError> {
        let session = self.session_service.load().await?;
        self.header = Header::for_session(&session);

        self.request = RequestState::Submitting;
        let result = self.user_service.get_dashboard().await;
        self.request = RequestState::Idle;

        match result {
            Ok(response) => {
                info!("Dashboard loaded");
                self.data = response.data;
                self.notice = None;
                Ok(())
            }
            Err(err) => {
                error!("Dashboard load failed: {err}");
                self.notice = Some(Notice::Error(err.user_message()));
                Err(err)
            }
        }
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn data(&self) -> Option<&DashboardResponse> {
        self.data.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Submitting
    }

    pub fn referral_code(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.referral_code.as_deref())
    }

    /// "Withdraw Amount" button target.
    pub fn withdraw_route(&self) -> Route {
        Route::Payments {
            balance: self.data.as_ref().map(DashboardResponse::balance),
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;

        if self.is_loading() {
            writeln!(f, "Loading...")?;
        }

        if let Some(data) = &self.data {
            writeln!(f, "Welcome back, {}!", data.name.as_deref().unwrap_or(""))?;
            writeln!(
                f,
                "Referral code:   {}",
                data.referral_code.as_deref().unwrap_or("")
            )?;
            writeln!(f, "Total amount:    RS {}", format_amount(data.total_amount))?;
            writeln!(
                f,
                "Total withdrawn: RS {}",
                format_amount(data.total_withdraw_amount)
            )?;
        }

        write_notice(f, self.notice.as_ref())
    }
}
