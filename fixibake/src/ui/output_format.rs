// fixibake/src/ui/output_format.rs
//! Themed one-line status messages, written to any `Write` sink (usually stderr).

use std::io::{self, Write};

use crate::ui::theme::{paint, ThemeEntry, ThemeMap};

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let line = format!("{}{}", prefix, msg);
    writeln!(writer, "{}", paint(&line, entry, theme, enable_colors))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "", msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", msg, ThemeEntry::Warn, theme, enable_colors)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, enable_colors: bool) -> io::Result<()> {
    print_message(writer, "Error: ", msg, ThemeEntry::Error, theme, enable_colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn error_message_is_prefixed() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Error: boom\n");
    }
}
