use pokemon_type_analyzer::i18n::Language;
use pokemon_type_analyzer::{run, Command};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn usage() -> ! {
    eprintln!(
        "Usage: pokemon-type-analyzer <command>\n\
  effectiveness <attacker> <defender> [defender2]\n\
  analyze <type> [type2] [--name NAME] [--lang fr|en|de|es|it|jp]\n\
  team --team team.json [--lang CODE]\n\
  chart [--output type_chart.csv]"
    );
    std::process::exit(1);
}

fn parse_lang(val: Option<String>) -> anyhow::Result<Language> {
    val.ok_or_else(|| anyhow::anyhow!("--lang requires a language code (e.g. --lang fr)"))?
        .parse()
}

fn parse_args() -> anyhow::Result<Command> {
    let mut args = env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("effectiveness") => {
            let attacker = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("effectiveness requires an attacking type"))?;
            let defenders: Vec<String> = args.collect();
            Command::Effectiveness {
                attacker,
                defenders,
            }
        }
        Some("analyze") => {
            let mut types = Vec::new();
            let mut name = None;
            let mut language = Language::default();
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--name" => {
                        name = Some(
                            args.next()
                                .ok_or_else(|| anyhow::anyhow!("--name requires a value"))?,
                        );
                    }
                    "--lang" => language = parse_lang(args.next())?,
                    other if other.starts_with("--") => {
                        anyhow::bail!("Unknown argument {other} for analyze")
                    }
                    other => types.push(other.to_string()),
                }
            }
            Command::Analyze {
                types,
                name,
                language,
            }
        }
        Some("team") => {
            let mut team_path = PathBuf::from("team.json");
            let mut language = Language::default();
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--team" => {
                        team_path = args.next().map(PathBuf::from).ok_or_else(|| {
                            anyhow::anyhow!("--team requires a path (e.g. --team team.json)")
                        })?;
                    }
                    "--lang" => language = parse_lang(args.next())?,
                    other => anyhow::bail!("Unknown argument {other} for team"),
                }
            }
            Command::Team {
                team_path,
                language,
            }
        }
        Some("chart") => {
            let mut output_path = PathBuf::from("type_chart.csv");
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--output" => {
                        output_path = args.next().map(PathBuf::from).ok_or_else(|| {
                            anyhow::anyhow!("--output requires a path (e.g. --output chart.csv)")
                        })?;
                    }
                    other => anyhow::bail!("Unknown argument {other} for chart"),
                }
            }
            Command::Chart { output_path }
        }
        Some("--help") | Some("-h") | None => usage(),
        Some(other) => anyhow::bail!("Unknown command {other}"),
    };
    Ok(command)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pokemon_type_analyzer=info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let command = parse_args()?;
    run(command)
}
