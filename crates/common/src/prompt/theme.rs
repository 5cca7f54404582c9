use cliclack::{set_theme, Theme, ThemeState};
use console::Style;

pub struct CliclackTheme;

impl Theme for CliclackTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().cyan(),
            ThemeState::Error(_) => Style::new().red(),
            _ => Style::new().cyan().dim(),
        }
    }

    fn state_symbol_color(&self, _state: &ThemeState) -> Style {
        Style::new().cyan()
    }
}

pub fn init_prompt_theme() {
    set_theme(CliclackTheme);
}
