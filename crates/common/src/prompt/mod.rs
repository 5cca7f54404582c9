mod select;
mod theme;

pub use select::PromptSelect;
pub use theme::{init_prompt_theme, CliclackTheme};
