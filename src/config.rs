/// Compile-time settings. Nothing here is read from disk or the command line.
#[derive(Clone, Debug)]
pub struct Config {
    /// X display to connect to. `None` uses `$DISPLAY`.
    pub display: Option<String>,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: None,
            log_filter: String::from("monowm=info"),
        }
    }
}
