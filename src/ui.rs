// UI layer: the interactive loop, built on `dialoguer`. Each pass clears
// the terminal and draws whatever `router::route` picks for the current
// session and sidebar selection, so a login or logout shows up on the very
// next pass without any extra input.

use crate::api::{ApiClient, Credentials};
use crate::router::{self, MenuOption, Screen};
use crate::session::Session;
use crate::view;
use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use dialoguer::{Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::stdout;
use std::time::Duration;

/// What the user asked for at the end of a pass.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Stay,
    Quit,
}

/// Run the dashboard until the user picks "Salir".
pub fn run(api: &ApiClient) -> Result<()> {
    let mut session = Session::new();
    let mut option = MenuOption::default();
    // Banner carried over to the next pass (login result).
    let mut notice: Option<String> = None;

    loop {
        clear_screen()?;
        let screen = router::route(&session, option);
        let action = match screen {
            Screen::Login => {
                println!("{}\n", view::title(view::LOGIN_TITLE));
                if let Some(msg) = notice.take() {
                    println!("{}\n", msg);
                }
                login_screen(api, &mut session, &mut notice)?
            }
            screen => {
                println!("{}\n", view::title(view::APP_TITLE));
                if let Some(msg) = notice.take() {
                    println!("{}\n", msg);
                }
                draw(api, screen)?;
                sidebar(&mut session, &mut option)?
            }
        };
        if let Action::Quit = action {
            break;
        }
    }
    Ok(())
}

/// Login form. On success the session transitions and the next pass draws
/// the dashboard; on failure the session is left as it was.
fn login_screen(
    api: &ApiClient,
    session: &mut Session,
    notice: &mut Option<String>,
) -> Result<Action> {
    let items = ["Iniciar Sesión", "Salir"];
    let selection = Select::new().items(&items).default(0).interact()?;
    if selection == 1 {
        return Ok(Action::Quit);
    }

    // Empty values are sent as typed.
    let username: String = Input::new()
        .with_prompt("Usuario")
        .allow_empty(true)
        .interact_text()?;
    let password: String = Password::new()
        .with_prompt("Contraseña")
        .allow_empty_password(true)
        .interact()?;
    let credentials = Credentials { username, password };

    let spinner = spinner("Iniciando sesión...")?;
    let outcome = api.login(&credentials);
    spinner.finish_and_clear();
    drop(credentials);

    *notice = Some(view::login_banner(&outcome));
    session.apply_login(outcome);
    Ok(Action::Stay)
}

/// Draw an authenticated screen. Fetching happens here, once per pass.
fn draw(api: &ApiClient, screen: Screen<'_>) -> Result<()> {
    let width = terminal::size().ok().map(|(w, _)| w);
    let body = match screen {
        Screen::Dashboard => view::dashboard(),
        Screen::Products { token } => {
            let spinner = spinner("Cargando productos...")?;
            let result = api.fetch_products(token);
            spinner.finish_and_clear();
            view::products(&result, width)
        }
        Screen::InventoryAnalysis { token } => {
            let spinner = spinner("Cargando análisis...")?;
            let result = api.fetch_inventory_analysis(token);
            spinner.finish_and_clear();
            view::analysis(&result, width)
        }
        Screen::Login => String::new(),
    };
    println!("{}", body);
    Ok(())
}

/// Sidebar menu: the three views, then logout and exit.
fn sidebar(session: &mut Session, option: &mut MenuOption) -> Result<Action> {
    let mut items: Vec<&str> = MenuOption::ALL.iter().map(|o| o.label()).collect();
    items.push("Cerrar Sesión");
    items.push("Salir");

    println!("{}", view::title("Menú"));
    let selection = Select::new()
        .with_prompt("Seleccione una opción")
        .items(&items)
        .default(option.index())
        .interact()?;

    Ok(apply_selection(selection, session, option))
}

/// Map a sidebar index onto the session and current view. Logging out also
/// drops the view, so the next login starts on the dashboard and no fetch
/// runs before the user picks a data screen again.
fn apply_selection(selection: usize, session: &mut Session, option: &mut MenuOption) -> Action {
    match MenuOption::from_index(selection) {
        Some(selected) => *option = selected,
        None if selection == MenuOption::ALL.len() => {
            session.logout();
            *option = MenuOption::default();
        }
        None => return Action::Quit,
    }
    Action::Stay
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

fn clear_screen() -> Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
