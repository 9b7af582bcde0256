use anyhow::{Context, Result};
use spanning_css_config::Config;
use spanning_css_engine::{
    get_spanning_css_text, replace_css_env_variables, replace_spanning_media_blocks,
};
use std::{env, fs, path::PathBuf, process};

enum Command {
    Split,
    Strip,
    Env { name: String, value: String },
}

fn usage(program: &str) -> ! {
    eprintln!("Usage:");
    eprintln!("  {program} split [STYLESHEET...]");
    eprintln!("  {program} strip [STYLESHEET...]");
    eprintln!("  {program} env NAME VALUE [STYLESHEET...]");
    eprintln!(
        "Without stylesheets, the patterns in {} are used",
        Config::config_path().display()
    );
    process::exit(1);
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("spanning-css", String::as_str)
}

fn parse_args(args: &[String]) -> (Command, Vec<PathBuf>) {
    let program = program_name(args);
    let Some(command) = args.get(1) else {
        usage(program);
    };

    let (command, rest) = match command.as_str() {
        "split" => (Command::Split, &args[2..]),
        "strip" => (Command::Strip, &args[2..]),
        "env" if args.len() >= 4 => (
            Command::Env {
                name: args[2].clone(),
                value: args[3].clone(),
            },
            &args[4..],
        ),
        _ => usage(program),
    };

    (command, rest.iter().map(PathBuf::from).collect())
}

fn process_stylesheet(command: &Command, config: &Config, css: &str) -> String {
    match command {
        Command::Split => {
            let grouped = get_spanning_css_text(css);
            let mut out = String::new();
            for (value, text) in grouped.iter() {
                out.push_str(&format!("/* {value} */\n"));
                if !text.is_empty() {
                    out.push_str(text);
                    out.push('\n');
                }
            }
            out
        }
        Command::Strip => {
            let stripped = replace_spanning_media_blocks(css, "");
            config.apply_env(&stripped)
        }
        Command::Env { name, value } => replace_css_env_variables(css, name, value),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let (command, mut stylesheets) = parse_args(&args);

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    if stylesheets.is_empty() {
        stylesheets = config.resolve_stylesheets()?;
        log::info!(
            "Resolved {} stylesheets from {}",
            stylesheets.len(),
            Config::config_path().display()
        );
    }
    if stylesheets.is_empty() {
        usage(program_name(&args));
    }

    for path in &stylesheets {
        let css = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stylesheet {}", path.display()))?;
        if stylesheets.len() > 1 {
            println!("/* {} */", path.display());
        }
        print!("{}", process_stylesheet(&command, &config, &css));
    }

    Ok(())
}
