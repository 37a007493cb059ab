//! Output trait for rendering reports to different formats.

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a title/header.
    fn title(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a horizontal rule.
    fn rule(&mut self);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

const RULE_WIDTH: usize = 60;

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn title(&mut self, text: &str) {
        println!("{}", text);
        println!("{}", "=".repeat(RULE_WIDTH));
    }

    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        println!("{}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn rule(&mut self) {
        println!("{}", "=".repeat(RULE_WIDTH));
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines into a string, warnings inline.
#[cfg(test)]
#[derive(Default)]
pub struct StringOutput {
    buf: String,
}

#[cfg(test)]
impl StringOutput {
    pub fn render(report: &dyn Report) -> String {
        let mut out = Self::default();
        report.render(&mut out);
        out.buf
    }

    /// Everything rendered so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }
}

#[cfg(test)]
impl Output for StringOutput {
    fn title(&mut self, text: &str) {
        self.line(text);
        self.rule();
    }

    fn section(&mut self, name: &str) {
        self.line(&format!("{}:", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(&format!("{}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.line(&format!("  - {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.line(&format!("warning: {}", msg));
    }

    fn rule(&mut self) {
        self.line(&"=".repeat(RULE_WIDTH));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(text);
    }

    fn newline(&mut self) {
        self.line("");
    }
}
