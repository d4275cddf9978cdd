use mikro_events::{ConnectError, EventManager};

use crate::app::{App, LoginPhase};

use super::action_queue::{Action, ActionTx};

pub(super) fn run_action(action: Action, app: &mut App, action_tx: &ActionTx) {
    match action {
        Action::SubmitLogin => handle_submit_login(app, action_tx),
        Action::LoginFinished(result) => handle_login_finished(app, result),
    }
}

/// Idle -> Connecting, then one fresh worker task per attempt. The submit
/// guard serializes attempts: anything but Idle is ignored.
fn handle_submit_login(app: &mut App, action_tx: &ActionTx) {
    if app.login.phase != LoginPhase::Idle {
        return;
    }
    if app.login.username_input.value.trim().is_empty() {
        app.login.error = Some("Username is required".to_string());
        return;
    }
    let credentials = match app.login.credentials() {
        Some(credentials) => credentials,
        None => {
            app.login.error = Some("No service selected".to_string());
            return;
        }
    };

    app.begin_connecting();

    // The connect call blocks on file or network I/O, so it runs off the UI
    // loop and posts its outcome back through the action channel.
    let tx = action_tx.clone();
    tokio::spawn(async move {
        let result = EventManager::connect(credentials).await;
        let _ = tx.send(Action::LoginFinished(result));
    });
}

fn handle_login_finished(app: &mut App, result: Result<EventManager, ConnectError>) {
    match result {
        Ok(manager) => app.complete_login(manager),
        // The cause was already logged by the connector; the user only sees
        // the generic message.
        Err(_) => app.fail_login(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{LoginState, TextInput, View};

    use super::super::action_queue::channel;

    fn local_app(username: &str, path: &str) -> App {
        let mut app = App::new(LoginState::local());
        app.login.username_input = TextInput::from_str(username);
        if let crate::app::LoginVariant::Local { file_input, .. } = &mut app.login.variant {
            *file_input = TextInput::from_str(path);
        }
        app
    }

    #[test]
    fn empty_username_is_rejected_without_a_transition() {
        let (tx, _rx) = channel();
        let mut app = local_app("  ", "/tmp/events.json");
        run_action(Action::SubmitLogin, &mut app, &tx);
        assert_eq!(app.login.phase, LoginPhase::Idle);
        assert!(app.login.error.is_some());
        assert!(!app.is_loading);
    }

    #[tokio::test]
    async fn submit_while_connecting_spawns_no_second_attempt() {
        let (tx, mut rx) = channel();
        let mut app = local_app("terry", "/tmp/events.json");
        app.login.phase = LoginPhase::Connecting;
        run_action(Action::SubmitLogin, &mut app, &tx);
        assert!(rx.try_recv().is_err(), "no worker should have been spawned");
        assert_eq!(app.login.phase, LoginPhase::Connecting);
    }

    #[tokio::test]
    async fn failed_connect_round_trips_back_to_an_editable_form() {
        let (tx, mut rx) = channel();
        let mut app = local_app("terry", "/definitely/not/a/real/file.json");

        run_action(Action::SubmitLogin, &mut app, &tx);
        assert_eq!(app.login.phase, LoginPhase::Connecting);
        assert!(app.is_loading);

        let finished = rx.recv().await.expect("worker should post an outcome");
        assert!(matches!(finished, Action::LoginFinished(Err(_))));
        run_action(finished, &mut app, &tx);

        assert!(matches!(app.login.phase, LoginPhase::Failed(_)));
        assert!(!app.is_loading);
        assert_eq!(app.current_view, View::Login);
        // Field contents survive the failure.
        assert_eq!(app.login.username_input.value, "terry");
    }

    #[tokio::test]
    async fn successful_connect_dismisses_the_form() {
        let path = std::env::temp_dir().join(format!("mikro-tui-login-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"description": "standup"}]"#).unwrap();

        let (tx, mut rx) = channel();
        let mut app = local_app("terry", &path.to_string_lossy());

        run_action(Action::SubmitLogin, &mut app, &tx);
        let finished = rx.recv().await.expect("worker should post an outcome");
        run_action(finished, &mut app, &tx);

        assert_eq!(app.current_view, View::Calendar);
        let session = app.session.expect("session handle should be stored");
        assert_eq!(session.username(), "terry");
        assert_eq!(session.events().len(), 1);
        std::fs::remove_file(&path).ok();
    }
}
