use anyhow::{Context, Result, anyhow, bail};
use ini_blocks_config::Config;
use ini_blocks_engine::{Document, LineSource, load_and_parse};
use std::{
    env,
    io::{Write, stdout},
    path::PathBuf,
    process,
};

const USAGE: &str = "Usage: ini-blocks [FILE] [--raw | --stripped | --blocks | --block NAME | --get BLOCK KEY] [--crlf | --no-crlf]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    /// Every block with its entries.
    Summary,
    Raw,
    Stripped,
    /// Block names only.
    Blocks,
    Block(String),
    Get { block: String, key: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    file: Option<PathBuf>,
    action: Action,
    normalize_line_endings: Option<bool>,
}

fn set_action(action: &mut Option<Action>, next: Action) -> Result<()> {
    if action.replace(next).is_some() {
        bail!("only one of --raw, --stripped, --blocks, --block, --get may be given");
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut file = None;
    let mut action = None;
    let mut normalize_line_endings = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--raw" => set_action(&mut action, Action::Raw)?,
            "--stripped" => set_action(&mut action, Action::Stripped)?,
            "--blocks" => set_action(&mut action, Action::Blocks)?,
            "--block" => {
                let name = iter.next().ok_or_else(|| anyhow!("--block requires a NAME"))?;
                set_action(&mut action, Action::Block(name.clone()))?;
            }
            "--get" => {
                let (Some(block), Some(key)) = (iter.next(), iter.next()) else {
                    bail!("--get requires a BLOCK and a KEY");
                };
                set_action(
                    &mut action,
                    Action::Get {
                        block: block.clone(),
                        key: key.clone(),
                    },
                )?;
            }
            "--crlf" => normalize_line_endings = Some(true),
            "--no-crlf" => normalize_line_endings = Some(false),
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path if file.is_none() => file = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument {extra}"),
        }
    }

    Ok(Args {
        file,
        action: action.unwrap_or(Action::Summary),
        normalize_line_endings,
    })
}

fn render(doc: &Document, action: &Action, out: &mut impl Write) -> Result<()> {
    match action {
        Action::Summary => {
            for (i, block) in doc.blocks().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "[{}]", block.name())?;
                for (key, value) in block.entries() {
                    writeln!(out, "{key}={value}")?;
                }
            }
        }
        Action::Raw => {
            for line in doc.lines(LineSource::Raw) {
                out.write_all(line)?;
            }
        }
        Action::Stripped => {
            for line in doc.lines(LineSource::Stripped) {
                out.write_all(line)?;
            }
        }
        Action::Blocks => {
            for block in doc.blocks() {
                writeln!(out, "{}", block.name())?;
            }
        }
        Action::Block(name) => {
            let entries = doc
                .block_data(name)
                .ok_or_else(|| anyhow!("no block named [{name}]"))?;
            for (key, value) in entries {
                writeln!(out, "{key}={value}")?;
            }
        }
        Action::Get { block, key } => {
            let value = doc
                .get(block, key)
                .ok_or_else(|| anyhow!("no key {key:?} in block [{block}]"))?;
            writeln!(out, "{value}")?;
        }
    }
    Ok(())
}

fn run(args: Args, config: Config) -> Result<()> {
    let file = args
        .file
        .or(config.default_file.clone())
        .ok_or_else(|| anyhow!("no FILE given and no default_file configured"))?;

    let mut options = config.load_options();
    if let Some(normalize) = args.normalize_line_endings {
        options.normalize_line_endings = normalize;
    }

    log::debug!("reading {} with {options:?}", file.display());
    let doc = load_and_parse(&file, &options)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let mut stdout = stdout().lock();
    render(&doc, &args.action, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            log::warn!("ignoring config file {}: {e}", Config::config_path().display());
            Config::default()
        }
    };

    if let Err(e) = run(args, config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
