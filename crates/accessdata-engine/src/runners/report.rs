/// Collects report lines and logs each one as it is added
#[derive(Debug, Default)]
pub(crate) struct ReportLog {
    lines: Vec<String>,
}

impl ReportLog {
    pub(crate) fn line(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!("{}", line);
        self.lines.push(line);
    }

    /// Header followed by a dashed underline of the same width
    pub(crate) fn heading(&mut self, title: impl Into<String>) {
        let title = title.into();
        let underline = "-".repeat(title.chars().count());
        self.line(title);
        self.line(underline);
    }

    pub(crate) fn entries<T: std::fmt::Display>(&mut self, items: &[T]) {
        for item in items {
            self.line(item.to_string());
        }
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
