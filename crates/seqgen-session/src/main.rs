use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as Cli};
use seqgen_core::FrequencyTally;
use seqgen_session::logging::{self, LogFormat};
use seqgen_session::{view, Command, Osc52Clipboard, Session, SessionConfig, Shell};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

fn session_args(cmd: Cli) -> Cli {
    cmd.arg(
        Arg::new("length")
            .long("length")
            .short('n')
            .default_value("10")
            .value_parser(value_parser!(usize))
            .help("Number of entries per generated sequence"),
    )
    .arg(
        Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .help("Random seed for reproducible sequences"),
    )
    .arg(
        Arg::new("mapping")
            .long("mapping")
            .short('m')
            .action(ArgAction::Append)
            .value_name("SOURCE=TARGET")
            .help("Start from these mappings instead of the defaults (repeatable)"),
    )
}

fn cli() -> Cli {
    Cli::new("seqgen")
        .version(seqgen_session::VERSION)
        .about("Draw random sequences from source → target mappings")
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(
            session_args(Cli::new("shell").about("Interactive mapping session")).arg(
                Arg::new("delay-ms")
                    .long("delay-ms")
                    .default_value("400")
                    .value_parser(value_parser!(u64))
                    .help("Pause before showing generated results, 0 to disable"),
            ),
        )
        .subcommand(
            session_args(Cli::new("generate").about("Generate one sequence and exit")).arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .help("Output as JSON"),
            ),
        )
}

fn session_config(args: &ArgMatches) -> SessionConfig {
    let mut config = SessionConfig::new().with_sequence_length(
        args.get_one::<usize>("length").copied().unwrap_or(seqgen_core::DEFAULT_SEQUENCE_LENGTH),
    );
    if let Some(seed) = args.get_one::<u64>("seed") {
        config = config.with_seed(*seed);
    }
    config
}

fn apply_mappings(session: &mut Session, args: &ArgMatches) -> anyhow::Result<()> {
    if let Some(pairs) = args.get_many::<String>("mapping") {
        session
            .replace_mappings(pairs.map(String::as_str))
            .context("reading --mapping")?;
    }
    Ok(())
}

fn run_generate(args: &ArgMatches) -> anyhow::Result<()> {
    let mut session = Session::new(session_config(args));
    apply_mappings(&mut session, args)?;

    let Some(result) = session.generate_sequence()? else {
        bail!("no mappings to draw from");
    };

    if args.get_flag("json") {
        let report = serde_json::json!({
            "sequence": result,
            "tokens": result.token_text(),
            "frequencies": FrequencyTally::compute(result),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", view::render_results(Some(result)));
    }
    Ok(())
}

async fn run_shell(args: &ArgMatches) -> anyhow::Result<()> {
    let delay = args.get_one::<u64>("delay-ms").copied().unwrap_or(0);
    let config = session_config(args).with_generation_delay(Duration::from_millis(delay));

    let mut session = Session::new(config);
    apply_mappings(&mut session, args)?;
    let mut shell = Shell::new(session, Osc52Clipboard::stdout());

    println!("seqgen {} (type 'help' for commands)", seqgen_session::VERSION);
    print!("{}", view::render_mappings(shell.session().store()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next_line().await.context("reading command")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                eprintln!("error: {e}");
                continue;
            }
        };
        if command == Command::Generate && delay > 0 {
            println!("Generating...");
        }

        match shell.execute(command).await {
            Ok(reply) => {
                print!("{}", reply.output);
                if reply.quit {
                    break;
                }
            }
            Err(e) => eprintln!("error: {e}"),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    let format = if matches.get_flag("log-json") {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    if let Err(e) = logging::init(format) {
        eprintln!("logging disabled: {e}");
    }

    match matches.subcommand() {
        Some(("generate", args)) => run_generate(args),
        Some(("shell", args)) => run_shell(args).await,
        _ => {
            // no subcommand: interactive shell with default settings
            let defaults = cli().get_matches_from(["seqgen", "shell"]);
            let Some(("shell", args)) = defaults.subcommand() else {
                return Ok(());
            };
            run_shell(args).await
        }
    }
}
