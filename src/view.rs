// Screen bodies as plain strings. Nothing here touches the terminal or the
// network, so every screen can be checked without either.

use crate::api::{InventoryAnalysis, ProductRecord};
use crate::error::Result;
use crate::table;
use console::style;

pub const APP_TITLE: &str = "📦 Stock Live - Sistema de Gestión de Inventario";
pub const LOGIN_TITLE: &str = "🔐 Login";
pub const LOGIN_OK: &str = "Login exitoso!";
pub const LOGIN_FAILED: &str = "Usuario o contraseña incorrectos";
pub const DASHBOARD_HEADER: &str = "📊 Dashboard";
pub const PRODUCTS_HEADER: &str = "📝 Productos";
pub const PRODUCTS_FAILED: &str = "Error al cargar los productos";
pub const ANALYSIS_HEADER: &str = "📈 Análisis de Inventario";
pub const ANALYSIS_FAILED: &str = "Error al cargar el análisis de inventario";
pub const SUMMARY_SECTION: &str = "Resumen";
pub const LOW_STOCK_SECTION: &str = "Productos de bajo stock";
pub const TOP_SELLING_SECTION: &str = "Productos más vendidos";

/// Banner shown after a login attempt. Every failure reads the same.
pub fn login_banner(outcome: &Result<String>) -> String {
    match outcome {
        Ok(_) => style(LOGIN_OK).green().to_string(),
        Err(_) => error_banner(LOGIN_FAILED),
    }
}

pub fn error_banner(message: &str) -> String {
    style(message).red().bold().to_string()
}

pub fn title(text: &str) -> String {
    style(text).bold().underlined().to_string()
}

/// The dashboard is a placeholder: just its header.
pub fn dashboard() -> String {
    format!("{}\n", header(DASHBOARD_HEADER))
}

pub fn products(result: &Result<Vec<ProductRecord>>, width: Option<u16>) -> String {
    let body = match result {
        Ok(records) => table::render_records(records, width),
        Err(_) => error_banner(PRODUCTS_FAILED),
    };
    format!("{}\n{}\n", header(PRODUCTS_HEADER), body)
}

/// Each section is rendered only when its key was present in the payload.
pub fn analysis(result: &Result<InventoryAnalysis>, width: Option<u16>) -> String {
    let mut out = format!("{}\n", header(ANALYSIS_HEADER));
    let analysis = match result {
        Ok(analysis) => analysis,
        Err(_) => {
            out.push_str(&error_banner(ANALYSIS_FAILED));
            out.push('\n');
            return out;
        }
    };
    if let Some(summary) = table::render_summary(&analysis.extra, width) {
        out.push_str(&section(SUMMARY_SECTION, &summary));
    }
    if let Some(low_stock) = &analysis.low_stock {
        out.push_str(&section(
            LOW_STOCK_SECTION,
            &table::render_section(low_stock, width),
        ));
    }
    if let Some(top_selling) = &analysis.top_selling {
        out.push_str(&section(
            TOP_SELLING_SECTION,
            &table::render_section(top_selling, width),
        ));
    }
    out
}

fn header(text: &str) -> String {
    style(text).bold().to_string()
}

fn section(name: &str, body: &str) -> String {
    format!("\n{}\n{}\n", style(name).cyan().bold(), body)
}
