//! User-facing progress lines. These are always shown, independent of the log level.

use crossterm::{
    QueueableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::debug;
use std::io::{self, Write};
use std::path::Path;

fn colored_line<W: Write>(out: &mut W, color: Color, text: &str) -> io::Result<()> {
    out.queue(SetForegroundColor(color))?;
    write!(out, "{}", text)?;
    out.queue(ResetColor)?;
    writeln!(out)?;
    out.flush()
}

pub fn print_welcome_message<W: Write>(out: &mut W) -> io::Result<()> {
    colored_line(out, Color::Cyan, "🚀 Codebase to Text Converter")?;
    writeln!(out, "{}", "=".repeat(50))?;
    debug!("Debug logging enabled");
    Ok(())
}

pub fn print_scanning<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "🔍 Analyzing codebase structure...")
}

pub fn print_converting<W: Write>(out: &mut W, output: &Path) -> io::Result<()> {
    writeln!(out, "📝 Converting codebase to text file: {}", output.display())
}

pub fn print_success<W: Write>(out: &mut W, output: &Path, files_processed: usize) -> io::Result<()> {
    colored_line(
        out,
        Color::Green,
        &format!("✅ Conversion complete! Output saved to: {}", output.display()),
    )?;
    writeln!(out, "📊 Processed {} files", files_processed)?;
    writeln!(out)?;
    writeln!(out, "🎉 Success! Your codebase has been converted to: {}", output.display())?;
    writeln!(out, "📚 You can now upload this file to NotebookLM for analysis!")
}

pub fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    colored_line(out, Color::Red, &format!("❌ {}", message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_success_message() {
        let text = captured(|out| print_success(out, Path::new("out.txt"), 4));
        assert!(text.contains("Conversion complete! Output saved to: out.txt"));
        assert!(text.contains("📊 Processed 4 files"));
    }

    #[test]
    fn test_error_message() {
        let text = captured(|out| print_error(out, "Error: Directory 'x' does not exist!"));
        assert!(text.contains("❌ Error: Directory 'x' does not exist!"));
    }
}
