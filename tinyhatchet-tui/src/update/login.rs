//! 登录页面更新逻辑

use super::{ignored, Transition};
use crate::backend::Command;
use crate::message::{AppMessage, FormMessage, Outcome};
use crate::model::state::{ConfirmState, HomeState, LoginAction, LoginState};
use crate::model::{Screen, Session};

pub const MISSING_CREDENTIALS: &str = "please enter credentials";

pub fn update(state: &mut LoginState, session: &mut Session, msg: AppMessage) -> Transition {
    match msg {
        AppMessage::Form(form) => handle_form(state, session, form),
        AppMessage::Outcome(outcome) => handle_outcome(state, session, outcome),
        // 登录页是根页面，Esc 直接退出
        AppMessage::GoBack => Transition::quit(),
        _ => Transition::stay(),
    }
}

fn handle_form(state: &mut LoginState, session: &mut Session, msg: FormMessage) -> Transition {
    match msg {
        FormMessage::NextField => {
            state.focus.next();
            state.sync_focus();
        }
        FormMessage::PrevField => {
            state.focus.prev();
            state.sync_focus();
        }
        FormMessage::Submit => match state.focused_action() {
            Some(action) => return submit(state, session, action),
            // Enter 在输入框上：跳到下一个
            None => {
                state.focus.next();
                state.sync_focus();
            }
        },
        edit => {
            for field in state.fields_mut() {
                field.handle(&edit);
            }
        }
    }
    Transition::stay()
}

fn submit(state: &mut LoginState, session: &mut Session, action: LoginAction) -> Transition {
    state.clear_errors();

    let email = state.email.value().trim().to_string();
    let password = state.password.value().to_string();
    if email.is_empty() || password.is_empty() {
        state.error = Some(MISSING_CREDENTIALS.to_string());
        return Transition::stay();
    }

    if let Some(url) = &state.url {
        session.set_server_url(url.value());
    }
    log::info!("[login] {action:?} as {email}");

    Transition::run(match action {
        LoginAction::Login => Command::Login { email, password },
        LoginAction::Register => Command::Register { email, password },
    })
}

fn handle_outcome(state: &mut LoginState, session: &mut Session, outcome: Outcome) -> Transition {
    match outcome {
        Outcome::Success => {
            session.remember_email(state.email.value());
            Transition::goto(Screen::HomeMenu(HomeState::new()))
                .with_status(format!("Logged in as {}", session.email()))
        }
        Outcome::VerificationRequired => {
            session.remember_email(state.email.value());
            Transition::goto(Screen::ConfirmForm(ConfirmState::new()))
        }
        Outcome::ValidationErrors(errors) => {
            state.apply_errors(errors);
            Transition::stay()
        }
        Outcome::Failure(message) => {
            state.error = Some(message);
            Transition::stay()
        }
        other => ignored("login", &other),
    }
}
