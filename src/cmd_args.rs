use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Verbose mode
    /// Optional. Raise the default log level to debug.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,

    /// Disable colored output
    /// Optional. Color is also disabled automatically when stdout is not a terminal.
    #[clap(long, help = "Disable ANSI colors", default_value = "false")]
    no_color: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    verbose: bool,
    no_color: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            verbose: args.verbose,
            no_color: args.no_color,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            verbose: args.verbose,
            no_color: args.no_color,
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn no_color(&self) -> bool {
        self.no_color
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_args_verbose() {
        let args = CommandLineArgs::parse_from(["program", "--verbose"]);
        assert!(args.verbose());
        assert!(!args.no_color());
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-v"]);
        assert!(args.verbose());
    }

    #[test]
    fn test_parse_args_no_color() {
        let args = CommandLineArgs::parse_from(["program", "--no-color"]);
        assert!(args.no_color());
        assert!(!args.verbose());
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert!(!args.verbose());
        assert!(!args.no_color());
    }
}
