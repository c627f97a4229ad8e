use psdkeep::PsdkeepError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Suggested remedy for errors that stop a command.
fn fix_hint(err: &PsdkeepError) -> Option<&'static str> {
    match err {
        PsdkeepError::DirectoryNotFound { .. } => {
            Some("Pass an existing directory, or run psdkeep from inside one.")
        }
        PsdkeepError::InvalidConfig { .. } => {
            Some("Fix the TOML syntax, or delete the file to use the defaults.")
        }
        PsdkeepError::ToolNotFound { .. } => {
            Some("Install the tool or point PSDKEEP_ARCHIVER / PSDKEEP_PREVIEW_PROGRAM at it.")
        }
        _ => None,
    }
}

pub fn format_error_with(
    err: &anyhow::Error,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }

    if let Some(hint) = err.downcast_ref::<PsdkeepError>().and_then(fix_hint) {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            hint
        ));
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    if crate::ui::ci::is_github_actions() {
        let file = err
            .downcast_ref::<PsdkeepError>()
            .and_then(PsdkeepError::path)
            .map(|p| p.display().to_string());
        println!(
            "{}",
            crate::ui::ci::github_actions_annotation(
                crate::ui::ci::AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                Some("psdkeep"),
            )
        );
    }

    eprint!("{}", format_error(err));
}
