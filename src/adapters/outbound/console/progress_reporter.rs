use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} apps - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Messages go to stderr so they never interleave with a host's stdout.
/// Per-application progress is drawn as an indicatif bar, created on the
/// first `report_progress` call and cleared on error or completion.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    draw_target: fn() -> ProgressDrawTarget,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            draw_target: ProgressDrawTarget::stderr,
        }
    }

    /// A reporter whose bar is never drawn; messages still go to stderr
    pub fn without_bar() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            draw_target: ProgressDrawTarget::hidden,
        }
    }

    fn bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            if pb.length() == Some(total as u64) {
                return pb.clone();
            }
            pb.finish_and_clear();
        }

        let pb = ProgressBar::with_draw_target(Some(total as u64), (self.draw_target)());
        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        *slot = Some(pb.clone());
        pb
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.progress_bar.borrow().as_ref() {
            Some(pb) => pb.suspend(|| eprintln!("{}", message)),
            None => eprintln!("{}", message),
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_is_reused_for_same_total() {
        let reporter = StderrProgressReporter::without_bar();
        reporter.report_progress(1, 3, Some("a/go.mod"));
        reporter.report_progress(2, 3, Some("b/go.mod"));

        let bar = reporter.progress_bar.borrow();
        let pb = bar.as_ref().unwrap();
        assert_eq!(pb.position(), 2);
        assert_eq!(pb.length(), Some(3));
    }

    #[test]
    fn test_completion_clears_bar() {
        let reporter = StderrProgressReporter::without_bar();
        reporter.report_progress(1, 1, None);
        reporter.report_completion("done");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_error_clears_bar() {
        let reporter = StderrProgressReporter::without_bar();
        reporter.report_progress(1, 2, None);
        reporter.report("still running");
        reporter.report_error("⚠️  Warning: enrichment aborted");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_default_reporter() {
        let reporter = StderrProgressReporter::default();
        reporter.report("Test message");
    }
}
