use crate::{
    state::AppState,
    view::{Header, LoginView, SignupView},
};
use shared::utils::AppError;

use super::{AppRouter, LoginArgs, Output, SignupArgs};

pub async fn login_handler(state: &AppState, args: LoginArgs) -> Output {
    let di = &state.di_container;
    let mut view = LoginView::new(di.auth_service.clone(), di.session_service.clone());

    view.set_email(args.email);
    view.set_password(args.password);
    let outcome = view.submit().await;

    let output = if outcome.is_success() {
        Output::ok(view.to_string())
    } else {
        Output::failed(view.to_string())
    };

    AppRouter::follow(state, output, view.redirect()).await
}

pub async fn signup_handler(state: &AppState, args: SignupArgs) -> Output {
    let mut view = SignupView::new(state.di_container.auth_service.clone());

    view.set_name(args.name);
    view.set_email(args.email);
    view.set_password(args.password);

    if view.submit().await.is_success() {
        Output::ok(view.to_string())
    } else {
        Output::failed(view.to_string())
    }
}

pub async fn logout_handler(state: &AppState) -> Output {
    match Header::logout(&state.di_container.session_service).await {
        Ok((notice, route)) => {
            AppRouter::follow(state, Output::ok(notice.message()), Some(&route)).await
        }
        Err(e) => Output::failed(e.user_message()),
    }
}

pub async fn whoami_handler(state: &AppState) -> Output {
    let session = match state.di_container.session_service.load().await {
        Ok(session) => session,
        Err(e) => return Output::failed(e.user_message()),
    };

    if !session.is_authenticated() {
        return Output::failed(AppError::Unauthenticated.to_string());
    }

    let claims = session
        .user
        .as_ref()
        .and_then(|user| serde_json::to_string_pretty(user).ok())
        .unwrap_or_else(|| "(token payload could not be read)".to_string());

    let role = if session.is_admin() { "admin" } else { "user" };

    Output::ok(format!("{}Role: {role}\n{claims}", Header::for_session(&session)))
}
