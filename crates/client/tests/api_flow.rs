use discovery_client::{
    handler::{AppRouter, Commands, LoginArgs, SignupArgs, WithdrawArgs},
    state::AppState,
    view::{SubmitOutcome, WithdrawListView},
};
use jsonwebtoken::{EncodingKey, Header as JwtHeader, encode};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde::Serialize;
use serde_json::{Value, json};
use shared::{
    abstract_trait::SessionServiceTrait, config::Config, domain::response::withdraw::WithdrawStatus,
    utils::CONNECTIVITY_MESSAGE,
};
use std::time::Duration;
use tempfile::TempDir;

const ADMIN_TOKEN: &str = "h.eyJyb2xlX2lkIjoxfQ==.s";

fn state_for(base_url: &str, dir: &TempDir) -> AppState {
    let config = Config {
        api_base_url: base_url.to_string(),
        session_file: dir.path().join("session.json"),
        log_dir: dir.path().join("logs").display().to_string(),
        request_timeout: Duration::from_secs(5),
    };
    AppState::new(config).unwrap()
}

fn envelope(value: Value) -> String {
    value.to_string()
}

fn login_args(email: &str, password: &str) -> Commands {
    Commands::Login(LoginArgs {
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
async fn login_stores_session_and_shows_admin_navigation() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);

    let login = server
        .mock("POST", "/api/auth/login")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({"email": "a@b.com", "password": "secret"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!({"status": 1, "data": {"token": ADMIN_TOKEN}})))
        .create_async()
        .await;

    let dashboard = server
        .mock("GET", "/api/user/dashboard")
        .match_header("authorization", format!("Bearer {ADMIN_TOKEN}").as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!({
            "status": 1,
            "data": {
                "name": "Asha",
                "referral_code": "DISC-42",
                "total_amount": 2500,
                "total_withdraw_amount": "1000.00"
            }
        })))
        .create_async()
        .await;

    let output = AppRouter::dispatch(&state, login_args("a@b.com", "secret")).await;

    login.assert_async().await;
    dashboard.assert_async().await;

    assert!(output.ok, "{}", output.screen);
    assert!(output.screen.contains("Welcome back to Discovery!"));
    assert!(output.screen.contains("Withdraw List"));
    assert!(output.screen.contains("Welcome back, Asha!"));
    assert!(output.screen.contains("RS 2,500"));

    let session = state.di_container.session_service.load().await.unwrap();
    assert_eq!(session.token.as_deref(), Some(ADMIN_TOKEN));
    assert_eq!(
        serde_json::to_value(session.user.unwrap()).unwrap(),
        json!({"role_id": 1})
    );

    let stored: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("session.json")).unwrap())
            .unwrap();
    assert_eq!(stored["token"], ADMIN_TOKEN);
    assert_eq!(stored["user"], r#"{"role_id":1}"#);
}

#[tokio::test]
async fn server_message_is_shown_verbatim() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);

    server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(envelope(json!({"status": 0, "message": "X"})))
        .create_async()
        .await;

    let output = AppRouter::dispatch(&state, login_args("a@b.com", "wrong")).await;

    assert!(!output.ok);
    assert!(output.screen.contains("[error] X\n"), "{}", output.screen);
    assert!(
        state
            .di_container
            .session_service
            .load()
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn string_status_counts_as_success() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);

    server
        .mock("POST", "/api/auth/signup")
        .with_status(200)
        .with_body(envelope(json!({"status": "1", "data": {"id": 4}})))
        .create_async()
        .await;

    let output = AppRouter::dispatch(
        &state,
        Commands::Signup(SignupArgs {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret1".to_string(),
        }),
    )
    .await;

    assert!(output.ok, "{}", output.screen);
    assert!(
        output
            .screen
            .contains("Account created successfully! Welcome to Discovery!")
    );
}

#[tokio::test]
async fn signup_failure_without_message_is_explicit() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);

    server
        .mock("POST", "/api/auth/signup")
        .with_status(200)
        .with_body(envelope(json!({"status": 0})))
        .create_async()
        .await;

    let output = AppRouter::dispatch(
        &state,
        Commands::Signup(SignupArgs {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret1".to_string(),
        }),
    )
    .await;

    assert!(!output.ok);
    assert!(output.screen.contains("Signup failed. Please try again."));
}

#[tokio::test]
async fn unreadable_body_is_a_connectivity_failure() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);

    server
        .mock("POST", "/api/auth/login")
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let output = AppRouter::dispatch(&state, login_args("a@b.com", "secret")).await;

    assert!(!output.ok);
    assert!(output.screen.contains(CONNECTIVITY_MESSAGE));
    assert!(!output.screen.contains("Bad Gateway"));
}

#[tokio::test]
async fn unreachable_server_is_a_connectivity_failure() {
    let dir = TempDir::new().unwrap();
    // nothing listens on port 1
    let state = state_for("http://127.0.0.1:1", &dir);

    let output = AppRouter::dispatch(&state, login_args("a@b.com", "secret")).await;

    assert!(!output.ok);
    assert!(output.screen.contains(CONNECTIVITY_MESSAGE));
}

#[tokio::test]
async fn invalid_withdrawal_never_reaches_the_server() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);
    state
        .di_container
        .session_service
        .login(ADMIN_TOKEN)
        .await
        .unwrap();

    server
        .mock("GET", "/api/user/dashboard")
        .with_status(200)
        .with_body(envelope(json!({"status": 1, "data": {"total_amount": 5000}})))
        .create_async()
        .await;

    let withdraw = server
        .mock("POST", "/api/user/withdraw")
        .expect(0)
        .create_async()
        .await;

    let output = AppRouter::dispatch(
        &state,
        Commands::Withdraw(WithdrawArgs {
            amount: "1500".to_string(),
            upi: "user@okaxis".to_string(),
        }),
    )
    .await;

    withdraw.assert_async().await;
    assert!(!output.ok);
    assert!(output.screen.contains("Amount must be in multiples of 1000"));
}

#[tokio::test]
async fn withdrawal_request_is_sent_with_bearer_token() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);
    state
        .di_container
        .session_service
        .login(ADMIN_TOKEN)
        .await
        .unwrap();

    server
        .mock("GET", "/api/user/dashboard")
        .with_status(200)
        .with_body(envelope(json!({"status": 1, "data": {"total_amount": "3000.00"}})))
        .create_async()
        .await;

    let withdraw = server
        .mock("POST", "/api/user/withdraw")
        .match_header("authorization", format!("Bearer {ADMIN_TOKEN}").as_str())
        .match_body(Matcher::Json(json!({"withdraw_amount": 2000, "upi": "user@okaxis"})))
        .with_status(200)
        .with_body(envelope(json!({"status": 1, "message": "Withdrawal request created"})))
        .create_async()
        .await;

    let output = AppRouter::dispatch(
        &state,
        Commands::Withdraw(WithdrawArgs {
            amount: "2000".to_string(),
            upi: "user@okaxis".to_string(),
        }),
    )
    .await;

    withdraw.assert_async().await;
    assert!(output.ok, "{}", output.screen);
    assert!(output.screen.contains("[ok] Withdrawal request created"));
}

#[tokio::test]
async fn approve_sends_status_code_and_refetches() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);
    state
        .di_container
        .session_service
        .login(ADMIN_TOKEN)
        .await
        .unwrap();

    let item = |status: i64| {
        json!({
            "id": 7,
            "user_id": 12,
            "withdraw_amount": 2000,
            "upi": "asha@okaxis",
            "status": status,
            "payment_date": "2024-01-05T14:30:00Z",
            "User": {"name": "Asha", "email": "asha@example.com"}
        })
    };

    let pending = server
        .mock("GET", "/api/user/withdrawals-list")
        .with_status(200)
        .with_body(envelope(json!({"status": 1, "data": [item(1)]})))
        .create_async()
        .await;

    let mut view = WithdrawListView::new(
        state.di_container.withdraw_service.clone(),
        state.di_container.session_service.clone(),
    );
    view.open().await.unwrap();
    assert!(view.withdrawals()[0].status.is_pending());

    pending.remove_async().await;

    let update = server
        .mock("POST", "/api/user/withdraw-update-status")
        .match_header("authorization", format!("Bearer {ADMIN_TOKEN}").as_str())
        .match_body(Matcher::Json(json!({"withdrawal_id": 7, "status": 2})))
        .with_status(200)
        .with_body(envelope(json!({"status": 1, "message": "updated"})))
        .create_async()
        .await;

    let approved = server
        .mock("GET", "/api/user/withdrawals-list")
        .with_status(200)
        .with_body(envelope(json!({"status": 1, "data": [item(2)]})))
        .create_async()
        .await;

    let outcome = view.approve(7).await;

    update.assert_async().await;
    approved.assert_async().await;
    assert_eq!(
        outcome,
        SubmitOutcome::Succeeded("Withdrawal approved successfully".to_string())
    );
    assert_eq!(view.withdrawals()[0].status, WithdrawStatus::Approved);
    assert!(view.to_string().contains("[Approved]"));
}

#[tokio::test]
async fn regular_user_cannot_open_withdraw_list() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);
    // {"role_id":2}
    state
        .di_container
        .session_service
        .login("h.eyJyb2xlX2lkIjoyfQ.s")
        .await
        .unwrap();

    let list = server
        .mock("GET", "/api/user/withdrawals-list")
        .expect(0)
        .create_async()
        .await;
    server
        .mock("GET", "/api/user/dashboard")
        .with_status(200)
        .with_body(envelope(json!({"status": 1, "data": {"name": "Ravi", "total_amount": 0}})))
        .create_async()
        .await;

    let output = AppRouter::dispatch(&state, Commands::Withdrawals).await;

    list.assert_async().await;
    assert!(!output.ok);
    assert!(
        output
            .screen
            .contains("Access denied. Admin privileges required.")
    );
    assert!(output.screen.contains("Welcome back, Ravi!"));
}

#[tokio::test]
async fn withdrawals_list_network_failure_names_the_operation() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);
    state
        .di_container
        .session_service
        .login(ADMIN_TOKEN)
        .await
        .unwrap();

    server
        .mock("GET", "/api/user/withdrawals-list")
        .with_status(503)
        .with_header("content-type", "text/html")
        .with_body("<html>Service Unavailable</html>")
        .create_async()
        .await;

    let output = AppRouter::dispatch(&state, Commands::Withdrawals).await;

    assert!(!output.ok);
    assert!(
        output
            .screen
            .contains("Network error while fetching withdrawals"),
        "{}",
        output.screen
    );
    assert!(!output.screen.contains(CONNECTIVITY_MESSAGE));
}

#[tokio::test]
async fn withdrawal_network_failure_asks_to_retry() {
    let mut server = Server::new_async().await;
    let dir = TempDir::new().unwrap();
    let state = state_for(&server.url(), &dir);
    state
        .di_container
        .session_service
        .login(ADMIN_TOKEN)
        .await
        .unwrap();

    server
        .mock("GET", "/api/user/dashboard")
        .with_status(200)
        .with_body(envelope(json!({"status": 1, "data": {"total_amount": 5000}})))
        .create_async()
        .await;
    server
        .mock("POST", "/api/user/withdraw")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let output = AppRouter::dispatch(
        &state,
        Commands::Withdraw(WithdrawArgs {
            amount: "2e3".to_string(),
            upi: "user@okaxis".to_string(),
        }),
    )
    .await;

    assert!(!output.ok);
    assert!(
        output
            .screen
            .contains("Withdrawal request failed. Please try again."),
        "{}",
        output.screen
    );
}

#[derive(Serialize)]
struct Claims {
    role_id: i64,
    name: String,
    exp: usize,
}

#[tokio::test]
async fn whoami_reads_a_signed_token_and_logout_forgets_it() {
    let dir = TempDir::new().unwrap();
    let state = state_for("http://127.0.0.1:1", &dir);

    let token = encode(
        &JwtHeader::default(),
        &Claims {
            role_id: 1,
            name: "Asha".to_string(),
            exp: 4_102_444_800,
        },
        &EncodingKey::from_secret(b"not-checked-client-side"),
    )
    .unwrap();
    state.di_container.session_service.login(&token).await.unwrap();

    let output = AppRouter::dispatch(&state, Commands::Whoami).await;
    assert!(output.ok);
    assert!(output.screen.contains("Role: admin"));
    assert!(output.screen.contains("\"name\": \"Asha\""));

    let output = AppRouter::dispatch(&state, Commands::Logout).await;
    assert!(output.ok);
    assert!(output.screen.starts_with("Logged out successfully"));
    assert!(!dir.path().join("session.json").exists());

    let output = AppRouter::dispatch(&state, Commands::Whoami).await;
    assert!(!output.ok);
    assert_eq!(output.screen, "You are not logged in");
}
