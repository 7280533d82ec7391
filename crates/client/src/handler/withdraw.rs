use crate::{
    state::AppState,
    view::{WithdrawListView, WithdrawView},
};

use super::{AppRouter, Output, WithdrawArgs};

pub async fn create_withdraw_handler(state: &AppState, args: WithdrawArgs) -> Output {
    let di = &state.di_container;
    let mut view = WithdrawView::new(
        di.user_service.clone(),
        di.withdraw_service.clone(),
        di.session_service.clone(),
    );

    if let Err(e) = view.open().await {
        return Output::failed(format!("{view}[error] {}\n", e.user_message()));
    }

    view.set_amount(args.amount);
    view.set_upi(args.upi);

    if view.submit().await.is_success() {
        Output::ok(view.to_string())
    } else {
        Output::failed(view.to_string())
    }
}

pub async fn get_withdrawals_handler(state: &AppState) -> Output {
    let mut view = open_list(state);

    match view.open().await {
        Ok(()) => Output::ok(view.to_string()),
        Err(_) => AppRouter::follow(state, Output::failed(view.to_string()), view.redirect()).await,
    }
}

/// `approve` is true for approve, false for reject.
pub async fn update_withdraw_status_handler(
    state: &AppState,
    withdrawal_id: i64,
    approve: bool,
) -> Output {
    let mut view = open_list(state);

    if view.open().await.is_err() {
        return AppRouter::follow(state, Output::failed(view.to_string()), view.redirect()).await;
    }

    let outcome = if approve {
        view.approve(withdrawal_id).await
    } else {
        view.reject(withdrawal_id).await
    };

    if outcome.is_success() {
        Output::ok(view.to_string())
    } else {
        let mut screen = view.to_string();
        if view.notice().is_none() {
            screen.push_str(&format!(
                "[error] Withdrawal {withdrawal_id} is not pending\n"
            ));
        }
        Output::failed(screen)
    }
}

fn open_list(state: &AppState) -> WithdrawListView {
    let di = &state.di_container;
    WithdrawListView::new(di.withdraw_service.clone(), di.session_service.clone())
}
