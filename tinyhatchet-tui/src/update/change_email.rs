//! 修改邮箱页面更新逻辑

use super::{ignored, Transition};
use crate::backend::Command;
use crate::message::{AppMessage, FormMessage, Outcome};
use crate::model::state::{AccountState, ChangeEmailState};
use crate::model::Screen;

pub const MISSING_EMAIL: &str = "please enter an email address";

pub fn update(state: &mut ChangeEmailState, msg: AppMessage) -> Transition {
    match msg {
        AppMessage::Form(form) => handle_form(state, form),
        AppMessage::Outcome(outcome) => match outcome {
            Outcome::Success => Transition::goto(Screen::AccountMenu(AccountState::new()))
                .with_status(format!("Email changed to {}", state.email.value().trim())),
            Outcome::ValidationErrors(errors) => {
                state.apply_errors(errors);
                Transition::stay()
            }
            Outcome::Failure(message) => {
                state.error = Some(message);
                Transition::stay()
            }
            other => ignored("change_email", &other),
        },
        AppMessage::GoBack => Transition::goto(Screen::AccountMenu(AccountState::new())),
        _ => Transition::stay(),
    }
}

fn handle_form(state: &mut ChangeEmailState, msg: FormMessage) -> Transition {
    match msg {
        FormMessage::NextField => state.focus.next(),
        FormMessage::PrevField => state.focus.prev(),
        FormMessage::Submit if state.on_submit_button() => return submit(state),
        FormMessage::Submit => state.focus.next(),
        edit => {
            state.email.handle(&edit);
            return Transition::stay();
        }
    }
    state.sync_focus();
    Transition::stay()
}

fn submit(state: &mut ChangeEmailState) -> Transition {
    state.error = None;
    state.email.clear_errors();

    let email = state.email.value().trim().to_string();
    if email.is_empty() {
        state.error = Some(MISSING_EMAIL.to_string());
        return Transition::stay();
    }
    Transition::run(Command::ChangeEmail { email })
}
