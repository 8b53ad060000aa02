use std::io::{self, Write};

use crate::config::ConfigWarning;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::icons;

/// Report unknown config keys; never fatal.
pub fn write_config_warnings<W: Write + ?Sized>(
    out: &mut W,
    warnings: &[ConfigWarning],
    color: bool,
) -> io::Result<()> {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        writeln!(
            out,
            "{} Unknown config key '{}' in {}",
            ColoredText::warning(icons::WARNING).render(color),
            w.key,
            location
        )?;

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?", suggestion)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_with_line_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "colour".to_string(),
            file: PathBuf::from("/home/me/.config/prchecks/config.toml"),
            line: Some(3),
            suggestion: Some("color".to_string()),
        }];
        let mut out = Vec::new();

        write_config_warnings(&mut out, &warnings, false).unwrap();

        insta::assert_snapshot!(String::from_utf8(out).unwrap().trim_end(), @r"
        ! Unknown config key 'colour' in /home/me/.config/prchecks/config.toml:3
           Did you mean 'color'?
        ");
    }

    #[test]
    fn warning_without_line() {
        let warnings = vec![ConfigWarning {
            key: "zzz".to_string(),
            file: PathBuf::from("config.toml"),
            line: None,
            suggestion: None,
        }];
        let mut out = Vec::new();

        write_config_warnings(&mut out, &warnings, false).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "! Unknown config key 'zzz' in config.toml\n"
        );
    }
}
