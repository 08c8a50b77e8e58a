use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use flaskit::report;

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("mvp")
                .about("Scaffolds a single-module Flask app skeleton")
                .arg(
                    Arg::new("destination")
                        .help("The destination directory where the project will be created")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("saas")
                .about("Scaffolds a multi-blueprint Flask app skeleton")
                .arg(
                    Arg::new("destination")
                        .help("The destination directory where the project will be created")
                        .required(true),
                )
                .arg(
                    Arg::new("database")
                        .help("Database kind token for the project")
                        .short('d')
                        .long("database")
                        .default_value("sqlite"),
                ),
        )
        .get_matches();

    init_logger(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("mvp", args)) => handle_mvp(args),
        Some(("saas", args)) => handle_saas(args),
        _ => unreachable!(),
    }
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();

    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}

fn handle_mvp(args: &ArgMatches) -> miette::Result<()> {
    let destination = args
        .get_one::<String>("destination")
        .expect("destination required");

    let actions = flaskit::generate_mvp(destination)?;

    report::print_actions(&actions);

    Ok(())
}

fn handle_saas(args: &ArgMatches) -> miette::Result<()> {
    let destination = args
        .get_one::<String>("destination")
        .expect("destination required");
    let database = args
        .get_one::<String>("database")
        .expect("database has a default");

    let actions = flaskit::generate_saas(destination, database)?;

    report::print_actions(&actions);

    Ok(())
}
