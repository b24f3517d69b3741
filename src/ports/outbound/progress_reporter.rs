/// ProgressReporter port for reporting progress during an analysis
///
/// This port abstracts user-facing progress output (e.g. to stderr) so it
/// never mixes with whatever the host writes to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a position out of a total
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
