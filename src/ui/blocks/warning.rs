use psdkeep::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Unknown config keys and rejected environment values.
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = String::new();
    for warning in warnings {
        match warning {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                let location = match line {
                    Some(line) => format!("{}:{}", file.display(), line),
                    None => file.display().to_string(),
                };
                out.push_str(&format!("{} Unknown config key '{}' in {}", icon, key, location));
                if let Some(suggestion) = suggestion {
                    out.push_str(
                        &ColoredText::dim(format!(" (did you mean '{}'?)", suggestion))
                            .render(supports_color),
                    );
                }
            }
            ConfigWarning::InvalidEnvValue {
                var,
                value,
                expected,
            } => {
                out.push_str(&format!("{} Invalid {} value '{}', ignored", icon, var, value));
                out.push_str(
                    &ColoredText::dim(format!(" (expected {})", expected)).render(supports_color),
                );
            }
        }
        out.push('\n');
    }
    out
}
