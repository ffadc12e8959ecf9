pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,
    /// Output reduction level, 0 prints the full report.
    ///
    /// Headers and separators vanish at level 1 and above; the report
    /// lines themselves are always printed.
    pub quiet: u8,
}
