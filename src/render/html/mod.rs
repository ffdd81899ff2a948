//! HTML output.
//!
//! Page, card and chart markup live in askama templates under `templates/`.
//! Every interpolated value is HTML-escaped by the template engine; the only
//! `|safe` values are fragments that were themselves rendered from templates.

pub mod card;
pub mod page;

pub use card::{ErrorCardTemplate, QuotaCardTemplate, render_card};
pub use page::{PageTemplate, render_page};
