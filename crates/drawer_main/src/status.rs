use colored::Colorize;

pub enum StatusKind {
    Success,
    Failed,
}

impl StatusKind {
    fn icon(&self) -> &'static str {
        match self {
            StatusKind::Success => "✓",
            StatusKind::Failed => "✗",
        }
    }
}

/// One line of command feedback: an icon, a message and, for failures, the
/// error details.
pub struct StatusDisplay<'a> {
    pub kind: StatusKind,
    pub message: &'a str,
    pub error_details: Option<&'a str>,
}

impl<'a> StatusDisplay<'a> {
    pub fn success(message: &'a str) -> Self {
        Self { kind: StatusKind::Success, message, error_details: None }
    }

    pub fn failed(message: &'a str, details: &'a str) -> Self {
        Self { kind: StatusKind::Failed, message, error_details: Some(details) }
    }

    pub fn format(&self) -> String {
        match self.kind {
            StatusKind::Success => {
                format!("{} {}", self.kind.icon().green(), self.message.bold().green())
            }
            StatusKind::Failed => {
                let suffix = self
                    .error_details
                    .map(|details| format!(" ({})", details))
                    .unwrap_or_default();
                format!(
                    "{} {}{}",
                    self.kind.icon().red(),
                    self.message.bold().red(),
                    suffix.red()
                )
            }
        }
    }
}
