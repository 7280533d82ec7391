use crate::{state::AppState, view::DashboardView};

use super::Output;

pub async fn dashboard_handler(state: &AppState) -> Output {
    let di = &state.di_container;
    let mut view = DashboardView::new(di.user_service.clone(), di.session_service.clone());

    match view.load().await {
        Ok(()) => Output::ok(view.to_string()),
        Err(_) => Output::failed(view.to_string()),
    }
}
