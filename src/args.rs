use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

/// Options shared by `verify` and `repair`
fn scan_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("file")
                .help("File of concatenated codewords")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("npar")
                .short('n')
                .long("npar")
                .help("Parity symbols per codeword")
                .value_name("NPAR")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .help("Symbol width in bits; 16-bit symbols are little-endian")
                .value_name("BITS")
                .value_parser(["8", "16"])
                .default_value("8"),
        )
        .arg(
            Arg::new("block")
                .short('b')
                .long("block")
                .help("Symbols per codeword (default: largest the field allows)")
                .value_name("SYMBOLS")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Quiet mode - minimal output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print every damaged block as it is found")
                .action(ArgAction::SetTrue)
                .conflicts_with("quiet"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for computation (0 = auto-detect)")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .action(ArgAction::SetTrue),
        )
}

pub fn build_cli() -> Command {
    Command::new("rsdecode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon codeword verification and repair")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(scan_args(
            Command::new("verify")
                .visible_alias("v")
                .about("Check every codeword; exit 1 if repairable, 2 if not"),
        ))
        .subcommand(
            scan_args(
                Command::new("repair")
                    .visible_alias("r")
                    .about("Correct every repairable codeword"),
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .help("Write the repaired data here instead of over FILE")
                    .value_name("OUT"),
            ),
        )
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}
