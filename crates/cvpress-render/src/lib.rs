pub mod builder;
pub mod date;
pub mod error;
pub mod html;
pub mod markup;
pub mod sections;

pub use builder::DocumentBuilder;
pub use date::{format_date, format_date_range};
pub use error::{Error, Result};
pub use html::to_html;
pub use markup::{MarkdownMarkup, Markup, PlainMarkup, Span};
pub use sections::{render, render_markdown, render_plain};
