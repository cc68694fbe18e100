use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RenderVariant {
    Markdown,
    Plain,
}

impl fmt::Display for RenderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderVariant::Markdown => write!(f, "markdown"),
            RenderVariant::Plain => write!(f, "plain"),
        }
    }
}
