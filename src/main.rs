use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use conjucat::{Config, Dirs, Language, Lookup, Person, VerbDetails};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Path to the verb dataset. Defaults to the configured dataset, or the
    /// one in the data directory.
    #[arg(long)]
    database: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List supported languages.
    Languages,
    /// List verbs in a language.
    List {
        /// Language to list verbs for.
        #[arg(long)]
        lang: Option<String>,
        /// Only include verbs containing the given text, ignoring case.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the full conjugation table of a verb.
    Show {
        /// The verb to show.
        verb: String,
        /// Language of the verb.
        #[arg(long)]
        lang: Option<String>,
        /// Print the table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Find the translation of a verb in the other language.
    Translate {
        /// The verb to translate.
        verb: String,
        /// Language of the verb.
        #[arg(long)]
        from: Option<String>,
        /// Language to translate into. Defaults to the other language.
        #[arg(long)]
        to: Option<String>,
    },
}

fn language(arg: Option<&str>, default: Language) -> Result<Language> {
    let Some(arg) = arg else {
        return Ok(default);
    };

    Language::parse_keyword(arg).with_context(|| anyhow!("Unsupported language `{arg}`"))
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    if let Command::Languages = args.command {
        for language in Language::VALUES {
            println!("{} - {}", language.ident(), language.help());
        }

        return Ok(());
    }

    let dirs = Dirs::open()?;
    let config = Config::load(&dirs)?;

    let database_path = match args.database {
        Some(path) => path,
        None => config.database_path(&dirs),
    };

    let lookup = Lookup::open(&database_path)?;

    match args.command {
        Command::Languages => {}
        Command::List { lang, search } => {
            let lang = language(lang.as_deref(), config.language)?;

            let verbs = match search.as_deref() {
                Some(search) => lookup.search_verbs(lang, search),
                None => lookup.list_verbs(lang),
            };

            for verb in verbs {
                println!("{verb}");
            }
        }
        Command::Show { verb, lang, json } => {
            let lang = language(lang.as_deref(), config.language)?;

            let Some(details) = lookup.verb_details(&verb, lang) else {
                println!("nothing for `{verb}` in {lang}");
                return Ok(());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&details)?);
            } else {
                print_details(&details);
            }
        }
        Command::Translate { verb, from, to } => {
            let from = language(from.as_deref(), config.language)?;
            let to = language(to.as_deref(), from.other())?;

            match lookup.translation_counterpart(&verb, from, to) {
                Some(counterpart) => println!("{counterpart}"),
                None => println!("nothing for `{verb}` in {to}"),
            }
        }
    }

    Ok(())
}

fn print_details(details: &VerbDetails) {
    let verb = &details.verb;

    println!("{} ({})", verb.verb, verb.language);
    println!("  Translation: {}", verb.translation);
    println!("  Gerund: {}", verb.gerund);
    println!("  Participle: {}", verb.participle);
    println!("  Regularity: {}", verb.regularity);

    let width = Person::VALUES
        .iter()
        .map(|p| p.label(verb.language).chars().count())
        .max()
        .unwrap_or_default();

    for (bucket, table) in details.iter() {
        println!("# {}:", bucket.title());

        for (person, conjugation) in table.iter() {
            let label = person.label(verb.language);
            let mark = if conjugation.irregular { " *" } else { "" };
            println!("  {label:width$} {}{mark}", conjugation.text);
        }
    }

    if details.has_irregular() {
        println!();
        println!("* irregular form");
    }
}
