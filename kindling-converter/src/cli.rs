use std::path::PathBuf;

use clap::Parser;

use crate::configuration::Configuration;
use crate::errors::ConvertError;

#[derive(Debug, Clone, Parser)]
#[clap(
    name = "kindling-convert",
    version,
    about = "Convert recorded tracing-engine events into kindling events"
)]
pub struct Args {
    #[clap(long, value_name = "FILE", help = "Capture file (JSON or YAML)")]
    pub capture: PathBuf,

    #[clap(long, value_name = "FILE", help = "Configuration file (JSON, YAML or TOML)")]
    pub config: Option<PathBuf>,

    #[clap(short, long, help = "Show verbose output")]
    pub verbose: bool,

    #[clap(short, long, help = "Only print converted events and warnings")]
    pub quiet: bool,

    #[clap(long, help = "Pretty-print converted events")]
    pub pretty: bool,

    #[clap(long, help = "Drop events with unrecognized type codes")]
    pub drop_unrecognized: bool,

    #[clap(long, help = "Shorten container ids to 12 characters")]
    pub short_container_id: bool,
}

impl Args {
    /// Flags in the form `ConfigurationBuilder::from_cli_args` understands.
    pub fn config_flags(&self) -> Vec<&'static str> {
        [
            (self.verbose, "--verbose"),
            (self.quiet, "--quiet"),
            (self.pretty, "--pretty"),
            (self.drop_unrecognized, "--drop-unrecognized"),
            (self.short_container_id, "--short-container-id"),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect()
    }

    /// Configuration file first, CLI flags on top.
    pub fn configuration(&self) -> Result<Configuration, ConvertError> {
        let mut builder = Configuration::builder();
        if let Some(path) = &self.config {
            builder = builder.from_config_file(path)?;
        }
        builder.from_cli_args(&self.config_flags())?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::UnrecognizedPolicy;
    use std::io::Write;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kindling-convert").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn should_require_capture() {
        assert!(Args::try_parse_from(["kindling-convert"]).is_err());
    }

    #[test]
    fn should_translate_flags_into_configuration() {
        let args = parse(&["--capture", "events.yaml", "--drop-unrecognized", "--pretty"]);

        let config = args.configuration().unwrap();

        assert_eq!(config.converter.unrecognized, UnrecognizedPolicy::Drop);
        assert!(config.output.pretty);
        assert!(!config.output.verbose);
    }

    #[test]
    fn should_let_flags_override_config_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "output:\n  pretty: false\nconverter:\n  unrecognized: emit").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let args = parse(&["--capture", "c.json", "--config", &path, "--pretty"]);

        let config = args.configuration().unwrap();

        assert!(config.output.pretty);
        assert_eq!(config.converter.unrecognized, UnrecognizedPolicy::Emit);
    }

    #[test]
    fn should_reject_verbose_with_quiet() {
        let args = parse(&["--capture", "c.json", "-v", "-q"]);

        assert!(args.configuration().is_err());
    }
}
