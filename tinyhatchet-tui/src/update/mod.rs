//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 接收 Message，修改 Model，并返回需要在后台执行的命令。
//! Update 层本身从不做 I/O。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod home;           // 首页菜单
//!         mod login;          // 登录 / 注册
//!         mod confirm;        // 账号确认
//!         mod account;        // 账号管理菜单
//!         mod change_email;   // 修改邮箱
//!         mod api_tokens;     // API Token 菜单
//!         mod search;         // 检索表单与结果列表
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command>
//!
//!         Quit / Resize / Noop        就地处理
//!         其他消息                     交给当前屏幕的 update 函数
//!
//!     每个屏幕的 update 返回一个 Transition：
//!
//!         Transition {
//!             next: Option<Screen>,   // 要切换到的屏幕
//!             commands: Vec<Command>, // 要执行的后台命令
//!             status: Option<String>, // 状态栏消息
//!             quit: bool,
//!         }
//!
//!     apply() 执行切换：新屏幕的 init() 命令会追加到 commands 后面，
//!     例如进入 ApiTokenMenu 时自动 ListTokens。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 过期结果
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Outcome 总是交给"当前"屏幕。用户在请求完成前离开了发起请求的屏幕时，
//!     新屏幕不认识这个 Outcome，直接忽略（只记日志）。
//!

mod account;
mod api_tokens;
mod change_email;
mod confirm;
mod home;
mod login;
mod search;

use crate::backend::Command;
use crate::message::{AppMessage, Outcome};
use crate::model::state::page_size_for;
use crate::model::{App, Screen, Viewport};

/// What a screen wants to happen after handling a message
#[derive(Debug, Default)]
pub struct Transition {
    next: Option<Screen>,
    commands: Vec<Command>,
    status: Option<String>,
    quit: bool,
}

impl Transition {
    pub fn stay() -> Self {
        Self::default()
    }

    pub fn run(command: Command) -> Self {
        Self {
            commands: vec![command],
            ..Self::default()
        }
    }

    pub fn goto(screen: Screen) -> Self {
        Self {
            next: Some(screen),
            ..Self::default()
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// 处理应用消息，更新状态，返回需要执行的命令
pub fn update(app: &mut App, msg: AppMessage) -> Vec<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::Resize { width, height } => {
            app.viewport = Viewport::new(width, height);
            if let Screen::SearchResults(state) = &mut app.screen {
                state.list.set_page_size(page_size_for(app.viewport));
            }
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),

        msg => {
            let transition = route(app, msg);
            apply(app, transition)
        }
    }
}

/// 把消息交给当前屏幕
fn route(app: &mut App, msg: AppMessage) -> Transition {
    let viewport = app.viewport;
    let session = &mut app.session;
    match &mut app.screen {
        Screen::HomeMenu(state) => home::update(state, msg),
        Screen::LoginForm(state) => login::update(state, session, msg),
        Screen::ConfirmForm(state) => confirm::update(state, session, msg),
        Screen::AccountMenu(state) => account::update(state, msg),
        Screen::ChangeEmailForm(state) => change_email::update(state, msg),
        Screen::ApiTokenMenu(state) => api_tokens::update(state, msg),
        Screen::SearchForm(state) => search::update_form(state, viewport, msg),
        Screen::SearchResults(state) => search::update_results(state, msg),
    }
}

fn apply(app: &mut App, transition: Transition) -> Vec<Command> {
    let Transition {
        next,
        mut commands,
        status,
        quit,
    } = transition;

    if quit {
        app.should_quit = true;
    }

    if let Some(screen) = next {
        log::debug!("[update] {} -> {}", app.screen.title(), screen.title());
        commands.extend(screen.init());
        app.screen = screen;
        app.clear_status();
    }

    if let Some(status) = status {
        app.set_status(status);
    }

    commands
}

/// An outcome meant for a screen the user has already left
fn ignored(screen: &str, outcome: &Outcome) -> Transition {
    log::debug!("[update] {screen} ignores stale {} outcome", outcome.name());
    Transition::stay()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tinyhatchet_client::{ApiToken, FieldErrors, LogEntry, SearchQuery, DEFAULT_SERVER_URL};

    use super::*;
    use crate::message::{FormMessage, ListMessage, MenuMessage};
    use crate::model::state::{
        AccountState, ApiTokenState, ConfirmState, HomeState, LoginState, SearchState,
    };
    use crate::model::Session;

    fn app(url: Option<&str>, email: &str) -> App {
        let Ok(session) = Session::new(url.map(str::to_string), email) else {
            panic!("session should build");
        };
        App::new(session, Viewport::new(80, 24))
    }

    fn form(app: &mut App, msg: FormMessage) -> Vec<Command> {
        update(app, AppMessage::Form(msg))
    }

    fn menu(app: &mut App, msg: MenuMessage) -> Vec<Command> {
        update(app, AppMessage::Menu(msg))
    }

    fn outcome(app: &mut App, outcome: Outcome) -> Vec<Command> {
        update(app, AppMessage::Outcome(outcome))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            form(app, FormMessage::Input(c));
        }
    }

    fn tab(app: &mut App, times: usize) {
        for _ in 0..times {
            form(app, FormMessage::NextField);
        }
    }

    fn login_state(app: &App) -> &LoginState {
        let Screen::LoginForm(state) = &app.screen else {
            panic!("expected login form, got {}", app.screen.title());
        };
        state
    }

    fn entry(text: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc
                .with_ymd_and_hms(2021, 6, 1, 11, 22, 33)
                .single()
                .unwrap_or_default(),
            text: text.to_string(),
            tags: vec!["web".into()],
        }
    }

    /// Log in and land on the home menu
    fn logged_in() -> App {
        let mut app = app(Some("http://localhost:8080"), "me@example.com");
        outcome(&mut app, Outcome::Success);
        assert!(matches!(app.screen, Screen::HomeMenu(_)));
        app
    }

    // ============ Login ============

    #[test]
    fn starts_on_login_form() {
        let app = app(None, "");
        assert!(matches!(app.screen, Screen::LoginForm(_)));
        assert!(!app.should_quit);
    }

    #[test]
    fn empty_credentials_fail_locally() {
        let mut app = app(Some("http://localhost:8080"), "");
        // email stays empty, password gets "x", then [ Login ]
        tab(&mut app, 1);
        type_text(&mut app, "x");
        tab(&mut app, 1);
        let commands = form(&mut app, FormMessage::Submit);

        assert!(commands.is_empty());
        assert_eq!(login_state(&app).password.value(), "x");
        assert_eq!(login_state(&app).error.as_deref(), Some(login::MISSING_CREDENTIALS));
    }

    #[test]
    fn login_sets_server_and_emits_command() {
        let mut app = app(None, "");
        type_text(&mut app, "http://localhost:8080/");
        tab(&mut app, 1);
        type_text(&mut app, "me@example.com");
        tab(&mut app, 1);
        type_text(&mut app, "hunter2");
        tab(&mut app, 1);
        let commands = form(&mut app, FormMessage::Submit);

        assert_eq!(
            commands,
            vec![Command::Login {
                email: "me@example.com".into(),
                password: "hunter2".into(),
            }]
        );
        assert_eq!(app.session.server_url(), Some("http://localhost:8080"));
    }

    #[test]
    fn blank_server_url_uses_default() {
        let mut app = app(None, "");
        tab(&mut app, 1);
        type_text(&mut app, "me@example.com");
        tab(&mut app, 1);
        type_text(&mut app, "pw");
        tab(&mut app, 1);
        let commands = form(&mut app, FormMessage::Submit);

        assert_eq!(commands.len(), 1);
        assert_eq!(app.session.server_url(), Some(DEFAULT_SERVER_URL));
    }

    #[test]
    fn register_button_emits_register() {
        let mut app = app(Some("http://localhost:8080"), "me@example.com");
        // focus starts on password
        type_text(&mut app, "pw");
        tab(&mut app, 2);
        let commands = form(&mut app, FormMessage::Submit);
        assert_eq!(
            commands,
            vec![Command::Register {
                email: "me@example.com".into(),
                password: "pw".into(),
            }]
        );
    }

    #[test]
    fn enter_on_a_field_moves_focus() {
        let mut app = app(Some("http://localhost:8080"), "");
        let commands = form(&mut app, FormMessage::Submit);
        assert!(commands.is_empty());
        assert!(login_state(&app).password.is_focused());
    }

    #[test]
    fn focus_cycles_through_every_slot() {
        let mut app = app(None, "");
        let start = login_state(&app).focus.index();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(login_state(&app).focus.index());
            tab(&mut app, 1);
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(login_state(&app).focus.index(), start);

        form(&mut app, FormMessage::PrevField);
        assert_eq!(login_state(&app).focus.index(), 4);
    }

    #[test]
    fn typing_only_changes_the_focused_field() {
        let mut app = app(Some("http://localhost:8080"), "");
        type_text(&mut app, "abc");
        let state = login_state(&app);
        assert_eq!(state.email.value(), "abc");
        assert_eq!(state.password.value(), "");
    }

    #[test]
    fn login_success_goes_home_and_remembers_email() {
        let mut app = app(Some("http://localhost:8080"), "");
        type_text(&mut app, "me@example.com");
        let commands = outcome(&mut app, Outcome::Success);

        assert!(commands.is_empty());
        assert!(matches!(app.screen, Screen::HomeMenu(_)));
        assert_eq!(app.session.email(), "me@example.com");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn verification_required_goes_to_confirm() {
        let mut app = app(Some("http://localhost:8080"), "");
        type_text(&mut app, "new@example.com");
        outcome(&mut app, Outcome::VerificationRequired);

        assert!(matches!(app.screen, Screen::ConfirmForm(_)));
        assert_eq!(app.session.email(), "new@example.com");
    }

    #[test]
    fn validation_errors_stay_on_form() {
        let mut app = app(Some("http://localhost:8080"), "");
        let mut errors = FieldErrors::new();
        errors.insert("password".into(), vec!["too short".into()]);
        errors.insert("error".into(), vec!["registration failed".into()]);
        outcome(&mut app, Outcome::ValidationErrors(errors));

        let state = login_state(&app);
        assert_eq!(state.password.errors(), ["too short".to_string()]);
        assert_eq!(state.error.as_deref(), Some("registration failed"));
    }

    #[test]
    fn failure_is_shown_on_form() {
        let mut app = app(Some("http://localhost:8080"), "");
        outcome(&mut app, Outcome::Failure("invalid credentials".into()));
        assert_eq!(login_state(&app).error.as_deref(), Some("invalid credentials"));
    }

    #[test]
    fn esc_on_login_quits() {
        let mut app = app(None, "");
        update(&mut app, AppMessage::GoBack);
        assert!(app.should_quit);
    }

    // ============ Confirm ============

    #[test]
    fn confirm_flow() {
        let mut app = app(Some("http://localhost:8080"), "me@example.com");
        outcome(&mut app, Outcome::VerificationRequired);

        assert!(form(&mut app, FormMessage::Submit).is_empty());
        let Screen::ConfirmForm(state) = &app.screen else {
            panic!("expected confirm form");
        };
        assert_eq!(state.error.as_deref(), Some(confirm::MISSING_CODE));

        type_text(&mut app, "ABCD123");
        let commands = form(&mut app, FormMessage::Submit);
        assert_eq!(commands, vec![Command::Confirm { code: "ABCD123".into() }]);

        outcome(&mut app, Outcome::Success);
        assert!(matches!(app.screen, Screen::HomeMenu(_)));
    }

    #[test]
    fn esc_on_confirm_returns_to_login() {
        let mut app = app(Some("http://localhost:8080"), "me@example.com");
        app.screen = Screen::ConfirmForm(ConfirmState::new());
        update(&mut app, AppMessage::GoBack);
        assert_eq!(login_state(&app).email.value(), "me@example.com");
    }

    // ============ Menus ============

    #[test]
    fn home_menu_routes() {
        let mut app = logged_in();
        menu(&mut app, MenuMessage::Confirm);
        assert!(matches!(app.screen, Screen::SearchForm(_)));

        update(&mut app, AppMessage::GoBack);
        menu(&mut app, MenuMessage::SelectNext);
        menu(&mut app, MenuMessage::Confirm);
        assert!(matches!(app.screen, Screen::AccountMenu(_)));
    }

    #[test]
    fn esc_on_home_quits() {
        let mut app = logged_in();
        update(&mut app, AppMessage::GoBack);
        assert!(app.should_quit);
    }

    #[test]
    fn entering_token_menu_lists_tokens() {
        let mut app = logged_in();
        app.screen = Screen::AccountMenu(AccountState::new());
        menu(&mut app, MenuMessage::SelectNext);
        let commands = menu(&mut app, MenuMessage::Confirm);

        assert!(matches!(app.screen, Screen::ApiTokenMenu(_)));
        assert_eq!(commands, vec![Command::ListTokens]);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let mut app = logged_in();
        app.screen = Screen::ApiTokenMenu(ApiTokenState::new());
        update(&mut app, AppMessage::GoBack);
        update(&mut app, AppMessage::GoBack);
        assert_eq!(app.screen, Screen::HomeMenu(HomeState::new()));

        let before = app.screen.clone();
        assert!(outcome(&mut app, Outcome::TokenList(vec![ApiToken::new("t1", "")])).is_empty());
        assert!(outcome(&mut app, Outcome::Failure("late".into())).is_empty());
        assert_eq!(app.screen, before);
    }

    // ============ API tokens ============

    fn token_menu(app: &App) -> &ApiTokenState {
        let Screen::ApiTokenMenu(state) = &app.screen else {
            panic!("expected token menu, got {}", app.screen.title());
        };
        state
    }

    #[test]
    fn create_and_delete_tokens() {
        let mut app = logged_in();
        app.screen = Screen::ApiTokenMenu(ApiTokenState::new());

        // only the create row exists
        assert_eq!(menu(&mut app, MenuMessage::Confirm), vec![Command::CreateToken]);
        assert!(menu(&mut app, MenuMessage::DeleteSelected).is_empty());

        outcome(&mut app, Outcome::TokenCreated(ApiToken::new("t1", "s1")));
        let state = token_menu(&app);
        assert_eq!(state.tokens, vec![ApiToken::new("t1", "s1")]);
        assert_eq!(state.items().len(), 2);

        // cursor is on the new token now
        let commands = menu(&mut app, MenuMessage::DeleteSelected);
        assert_eq!(commands, vec![Command::DeleteToken { id: "t1".into() }]);
        assert!(menu(&mut app, MenuMessage::Confirm).is_empty());

        outcome(&mut app, Outcome::TokenDeleted("t1".into()));
        assert!(token_menu(&app).tokens.is_empty());
    }

    #[test]
    fn token_list_replaces_tokens_unless_empty() {
        let mut app = logged_in();
        app.screen = Screen::ApiTokenMenu(ApiTokenState::new());

        outcome(
            &mut app,
            Outcome::TokenList(vec![ApiToken::new("a", ""), ApiToken::new("b", "")]),
        );
        assert_eq!(token_menu(&app).tokens.len(), 2);

        outcome(&mut app, Outcome::TokenList(Vec::new()));
        assert_eq!(token_menu(&app).tokens.len(), 2);
    }

    #[test]
    fn failed_delete_keeps_token_and_shows_error() {
        let mut app = logged_in();
        app.screen = Screen::ApiTokenMenu(ApiTokenState::new());
        outcome(&mut app, Outcome::TokenList(vec![ApiToken::new("a", "")]));
        menu(&mut app, MenuMessage::DeleteSelected);
        outcome(&mut app, Outcome::Failure("server returned HTTP 500".into()));

        let state = token_menu(&app);
        assert_eq!(state.tokens.len(), 1);
        assert_eq!(state.error.as_deref(), Some("server returned HTTP 500"));
    }

    // ============ Change email ============

    #[test]
    fn change_email_flow() {
        let mut app = logged_in();
        app.screen = Screen::AccountMenu(AccountState::new());
        menu(&mut app, MenuMessage::Confirm);
        assert!(matches!(app.screen, Screen::ChangeEmailForm(_)));

        type_text(&mut app, "new@example.com");
        // Enter on the field moves to [ Submit ]
        assert!(form(&mut app, FormMessage::Submit).is_empty());
        let commands = form(&mut app, FormMessage::Submit);
        assert_eq!(
            commands,
            vec![Command::ChangeEmail {
                email: "new@example.com".into()
            }]
        );

        outcome(&mut app, Outcome::Success);
        assert!(matches!(app.screen, Screen::AccountMenu(_)));
    }

    #[test]
    fn change_email_failure_stays() {
        let mut app = logged_in();
        app.screen = Screen::ChangeEmailForm(crate::model::state::ChangeEmailState::new());
        outcome(&mut app, Outcome::Failure("server returned HTTP 400".into()));
        let Screen::ChangeEmailForm(state) = &app.screen else {
            panic!("expected change email form");
        };
        assert_eq!(state.error.as_deref(), Some("server returned HTTP 400"));
    }

    // ============ Search ============

    #[test]
    fn search_emits_query() {
        let mut app = logged_in();
        app.screen = Screen::SearchForm(SearchState::new());
        type_text(&mut app, "2021-06-01T00:00:00Z");
        tab(&mut app, 2);
        type_text(&mut app, "a,b");
        tab(&mut app, 1);
        let commands = form(&mut app, FormMessage::Submit);

        assert_eq!(
            commands,
            vec![Command::SearchEntries(SearchQuery {
                start: Some("2021-06-01T00:00:00Z".into()),
                end: None,
                tags: Some("a,b".into()),
            })]
        );
    }

    #[test]
    fn invalid_timestamp_blocks_search() {
        let mut app = logged_in();
        app.screen = Screen::SearchForm(SearchState::new());
        type_text(&mut app, "last tuesday");
        tab(&mut app, 3);
        assert!(form(&mut app, FormMessage::Submit).is_empty());
    }

    #[test]
    fn results_round_trip_keeps_form() {
        let mut app = logged_in();
        app.screen = Screen::SearchForm(SearchState::new());
        type_text(&mut app, "2021-06-01T00:00:00Z");

        outcome(&mut app, Outcome::LogEntries(vec![entry("boot"), entry("ready")]));
        let Screen::SearchResults(results) = &app.screen else {
            panic!("expected results");
        };
        assert_eq!(results.list.len(), 2);
        assert_eq!(results.list.page_size(), page_size_for(Viewport::new(80, 24)));

        update(&mut app, AppMessage::GoBack);
        let Screen::SearchForm(state) = &app.screen else {
            panic!("expected search form");
        };
        assert_eq!(state.start.value(), "2021-06-01T00:00:00Z");
    }

    #[test]
    fn esc_clears_filter_before_leaving_results() {
        let mut app = logged_in();
        app.screen = Screen::SearchForm(SearchState::new());
        outcome(&mut app, Outcome::LogEntries(vec![entry("boot"), entry("ready")]));

        update(&mut app, AppMessage::List(ListMessage::StartFilter));
        update(&mut app, AppMessage::List(ListMessage::FilterInput('r')));
        update(&mut app, AppMessage::List(ListMessage::FilterInput('e')));
        let Screen::SearchResults(results) = &app.screen else {
            panic!("expected results");
        };
        assert_eq!(results.list.len(), 1);

        update(&mut app, AppMessage::GoBack);
        let Screen::SearchResults(results) = &app.screen else {
            panic!("esc should only clear the filter");
        };
        assert_eq!(results.list.len(), 2);

        update(&mut app, AppMessage::GoBack);
        assert!(matches!(app.screen, Screen::SearchForm(_)));
    }

    #[test]
    fn resize_updates_page_size() {
        let mut app = logged_in();
        app.screen = Screen::SearchForm(SearchState::new());
        outcome(&mut app, Outcome::LogEntries(vec![entry("boot")]));

        update(
            &mut app,
            AppMessage::Resize {
                width: 100,
                height: 40,
            },
        );
        assert_eq!(app.viewport, Viewport::new(100, 40));
        let Screen::SearchResults(results) = &app.screen else {
            panic!("expected results");
        };
        assert_eq!(results.list.page_size(), 11);
    }

    #[test]
    fn quit_message_quits_anywhere() {
        let mut app = logged_in();
        app.screen = Screen::SearchForm(SearchState::new());
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
