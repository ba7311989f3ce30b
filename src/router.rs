// Screen selection. `route` is a pure function of the session and the
// sidebar selection; data screens borrow the token they will fetch with.

use crate::session::Session;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuOption {
    #[default]
    Dashboard,
    Products,
    InventoryAnalysis,
}

impl MenuOption {
    /// Sidebar order.
    pub const ALL: [MenuOption; 3] = [
        MenuOption::Dashboard,
        MenuOption::Products,
        MenuOption::InventoryAnalysis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Dashboard => "Dashboard",
            MenuOption::Products => "Productos",
            MenuOption::InventoryAnalysis => "Análisis de Inventario",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Login,
    Dashboard,
    Products { token: &'a str },
    InventoryAnalysis { token: &'a str },
}

pub fn route(session: &Session, option: MenuOption) -> Screen<'_> {
    let Some(token) = session.token() else {
        return Screen::Login;
    };
    match option {
        MenuOption::Dashboard => Screen::Dashboard,
        MenuOption::Products => Screen::Products { token },
        MenuOption::InventoryAnalysis => Screen::InventoryAnalysis { token },
    }
}
