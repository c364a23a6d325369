use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Makefile synthesizer for C/assembly source trees
#[derive(Parser, Debug)]
#[command(
    name = "makegen",
    about = "Generate a dependency-aware Makefile for a C/assembly source tree",
    version,
    author,
    long_about = "makegen walks a project tree, classifies .c, .h and .asm files, extracts \
                  each file's #include <...> dependencies and writes a complete Makefile: \
                  link rule, per-file dependency lines, clean target, compile pattern rules \
                  and run/test/makefile utility targets.\n\n\
                  Running makegen without a subcommand is the same as `makegen generate`."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

impl CliArgs {
    /// The subcommand to run; a bare invocation generates with defaults.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(
        about = "Write the Makefile for a project tree",
        long_about = "Scans the project tree and overwrites its Makefile.\n\n\
                      Examples:\n  \
                      makegen generate\n  \
                      makegen generate /path/to/kernel\n  \
                      makegen generate --stdout"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Show how the tree is classified without writing anything",
        long_about = "Lists compiled sources, headers and assembly sources together with \
                      the dependencies extracted from each header and compiled source.\n\n\
                      Examples:\n  \
                      makegen scan\n  \
                      makegen scan --format json"
    )]
    Scan(ScanArgs),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[arg(
        value_name = "PATH",
        help = "Project root (defaults to current directory)"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Descriptor path (defaults to <PATH>/Makefile)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Print the descriptor to stdout instead of writing it")]
    pub stdout: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ScanArgs {
    #[arg(
        value_name = "PATH",
        help = "Project root (defaults to current directory)"
    )]
    pub root: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_generates() {
        let args = CliArgs::try_parse_from(["makegen"]).unwrap();
        match args.effective_command() {
            Commands::Generate(generate) => {
                assert!(generate.root.is_none());
                assert!(generate.output.is_none());
                assert!(!generate.stdout);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_args() {
        let args =
            CliArgs::try_parse_from(["makegen", "generate", "kernel", "-o", "out.mk", "--stdout"])
                .unwrap();
        let Commands::Generate(generate) = args.effective_command() else {
            panic!("expected generate");
        };
        assert_eq!(generate.root, Some(PathBuf::from("kernel")));
        assert_eq!(generate.output, Some(PathBuf::from("out.mk")));
        assert!(generate.stdout);
    }

    #[test]
    fn test_scan_format() {
        let args = CliArgs::try_parse_from(["makegen", "scan", "--format", "yaml"]).unwrap();
        let Commands::Scan(scan) = args.effective_command() else {
            panic!("expected scan");
        };
        assert_eq!(scan.format, OutputFormatArg::Yaml);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(CliArgs::try_parse_from(["makegen", "-v", "-q"]).is_err());
    }
}
