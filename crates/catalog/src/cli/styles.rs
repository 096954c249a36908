//! Styles for the catalog CLI.
//!
//! Rendering code asks for styles by what the text *is* (an id, a category, an
//! error) rather than by color, so the palette can change in one place. All styles
//! are built once through `once_cell::sync::Lazy`.
//!
//! `console` drops the escape codes on its own when stdout is not a terminal or
//! `NO_COLOR` is set.

use console::Style;
use once_cell::sync::Lazy;

pub static ID: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static CATEGORY: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static DESCRIPTION: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());

pub static INFO: Lazy<Style> = Lazy::new(Style::new);
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());
