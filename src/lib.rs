// Library root
// ------------
// Terminal dashboard for the Stock Live inventory API. The binary
// (`main.rs`) wires configuration and logging, then hands over to `ui`.
//
// Module responsibilities:
// - `config`: backend base address.
// - `error`: `ApiError`, the reason a backend call produced nothing.
// - `api`: blocking HTTP client (login, products, inventory analysis).
// - `session`: authentication state for one run.
// - `router`: picks the screen from the session and the menu selection.
// - `table` / `view`: turn backend payloads into printable screens.
// - `ui`: the interactive loop.
pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod session;
pub mod table;
pub mod ui;
pub mod view;
