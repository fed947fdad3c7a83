/// ProgressReporter port for reporting progress during startup
///
/// This port abstracts progress reporting (e.g., to stderr) to give the user
/// feedback while the edge list is being read.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate activity (e.g., a spinner) with a message
    ///
    /// The activity ends with the next `report_error` or `report_completion`.
    fn begin(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
