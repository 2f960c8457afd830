//! CLI configuration

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - debug events
    Verbose,
    /// Trace - every pattern decision
    Trace,
}

impl Verbosity {
    /// Map the `-q` flag and `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Trace,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Trace)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Trace => "trace",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_checks() {
        assert!(Verbosity::Quiet.is_quiet());
        assert!(!Verbosity::Normal.is_verbose());
        assert!(Verbosity::Verbose.is_verbose());
        assert!(Verbosity::Trace.is_verbose());
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(Verbosity::Quiet.filter_directive(), "error");
        assert_eq!(Verbosity::Normal.filter_directive(), "warn");
        assert_eq!(Verbosity::Verbose.filter_directive(), "debug");
        assert_eq!(Verbosity::Trace.filter_directive(), "trace");
    }

    #[test]
    fn test_config_builder() {
        let config = CliConfig::new().with_verbosity(Verbosity::Verbose);
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert_eq!(CliConfig::default().verbosity, Verbosity::Normal);
    }
}
