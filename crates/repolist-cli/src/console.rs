use crossterm::style::Stylize;
use repolist::Feedback;

/// Prints feedback to stdout, interleaved with the wordlist.
///
/// Info is only shown in verbose mode; warnings and errors always are.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn info(&self, msg: impl Into<String>) {
        self.report(&Feedback::info(msg));
    }

    pub fn error(&self, msg: impl Into<String>) {
        self.report(&Feedback::error(msg));
    }

    pub fn report(&self, feedback: &Feedback) {
        if !self.shows(feedback) {
            return;
        }

        let line = feedback.to_string();
        match feedback {
            Feedback::Info(_) => println!("{}", line.blue().bold()),
            Feedback::Warning(_) => println!("{}", line.yellow()),
            Feedback::Error(_) => println!("{}", line.red().bold()),
        }
    }

    pub fn shows(&self, feedback: &Feedback) -> bool {
        self.verbose || !feedback.is_info()
    }
}
