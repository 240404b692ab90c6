use colored::Colorize;

use crate::theme::Theme;

pub fn run() {
    for name in Theme::builtin_names() {
        let theme = Theme::from_name(name);
        println!(
            "{:<10} gradient {} -> {}  accent {}  text {} on {}",
            name.bold(),
            theme.primary,
            theme.secondary,
            theme.accent,
            theme.text,
            theme.background,
        );
    }
}
