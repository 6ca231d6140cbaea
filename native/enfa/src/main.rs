use anyhow::{Context, bail};
use enfa::{TraceTable, TransitionTable, read_definition, simulate};
use std::io::{self, BufRead, Write};

const USAGE: &str = "usage: enfa [FILE] [-w WORD | --word=WORD] [-q | --quiet]";

#[derive(Debug, Default)]
struct Config {
    /// definition file
    /// None if it should be prompted for
    path: Option<String>,

    /// -w WORD / --word=WORD
    word: Option<String>,

    /// -q / --quiet
    /// Print only the verdicts
    quiet: bool,

    /// -h / --help
    help: bool,
}

impl Config {
    fn init<I: Iterator<Item = String>>(mut args: I) -> anyhow::Result<Self> {
        let _executable = args.next();

        let mut config = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-q" | "--quiet" => config.quiet = true,

                "-h" | "--help" => config.help = true,

                "-w" | "--word" => match args.next() {
                    Some(word) => config.word = Some(word),
                    None => bail!("option {arg} needs a word"),
                },

                arg if arg.starts_with("--word=") => {
                    config.word = Some(arg["--word=".len()..].to_owned())
                }

                arg if arg.starts_with('-') && arg.len() > 1 => bail!("invalid option: {arg}"),

                _ if config.path.is_some() => bail!("unexpected argument: {arg}"),

                _ => config.path = Some(arg),
            }
        }

        Ok(config)
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("cannot read from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::init(std::env::args())?;
    if config.help {
        println!("{USAGE}");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let path = match config.path {
        Some(path) => path,
        None => prompt(&mut input, "Definition file: ")?,
    };
    let enfa = read_definition(&path).with_context(|| format!("cannot load {path}"))?;
    let nfa = enfa.to_nfa();

    if !config.quiet {
        println!("{}", TransitionTable::new(&enfa, "ε-NFA"));
        println!("{}", TransitionTable::new(&nfa, "NFA without ε-transitions"));
    }

    let word = match config.word {
        Some(word) => word,
        None => prompt(&mut input, "Word to check: ")?,
    };

    let enfa_trace = simulate(&enfa, &word);
    let nfa_trace = simulate(&nfa, &word);

    if config.quiet {
        println!("ε-NFA: {}", enfa_trace.verdict);
        println!("NFA: {}", nfa_trace.verdict);
    } else {
        println!("--- ε-NFA ---");
        println!("{}", TraceTable::new(&enfa_trace, enfa.names()));
        println!("--- NFA without ε-transitions ---");
        println!("{}", TraceTable::new(&nfa_trace, nfa.names()));
    }

    Ok(())
}
