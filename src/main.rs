//! SHEra - Main CLI Entry Point

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use shera::{
    cli::{display, Args, Commands, Config, Input, Prompt, Verbosity},
    logging,
    onboarding::{self, hidden_answers, OnboardingFlow, Step},
    questions::{Category, QuestionTable},
    risk::RiskScorer,
    store::FileStore,
    AnswerSet, SheraError,
};
use std::path::Path;

/// Question table from --questions, the config file, or the built-in set
fn load_question_table(args: &Args, config: &Config) -> Result<QuestionTable> {
    let path = args.questions.clone().or_else(|| config.question_table());
    match path {
        Some(path) => QuestionTable::load(&path)
            .with_context(|| format!("Failed to load question table {}", path.display())),
        None => Ok(QuestionTable::builtin()),
    }
}

fn open_store(args: &Args, config: &Config) -> Result<FileStore> {
    let dir = args.data_dir.clone().unwrap_or_else(|| config.data_dir());
    FileStore::open(&dir).with_context(|| format!("Failed to open data directory {}", dir.display()))
}

/// List questions, optionally restricted to one category
fn run_questions(table: &QuestionTable, category: Option<&str>) -> Result<()> {
    match category {
        Some(label) => {
            let Some(category) = Category::from_label(label) else {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
                bail!("Unknown category {:?}. Known categories: {}", label, known.join(", "));
            };
            display::show_question_list(table.in_category(category));
        }
        None => display::show_question_list(table),
    }
    Ok(())
}

/// Score an answers file without touching stored state
fn run_score(table: &QuestionTable, config: &Config, file: &Path, json: bool) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read answers file {}", file.display()))?;
    let answers: AnswerSet = serde_json::from_str(&contents)
        .with_context(|| format!("Answers file {} is not a JSON object", file.display()))?;

    for (id, _) in answers.iter() {
        if table.get(id).is_none() {
            tracing::warn!(question = id, "answer for unknown question ignored");
        }
    }

    let result = RiskScorer::new(table)
        .with_labels(config.indicator_labels())
        .score(&answers);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display::show_result(&result);
    }
    Ok(())
}

/// Interactive onboarding; progress is saved after every answer
fn run_onboard(table: &QuestionTable, config: &Config, store: FileStore, verbosity: Verbosity) -> Result<()> {
    let mut flow = OnboardingFlow::resume(table, store)?.with_labels(config.indicator_labels());

    if flow.is_complete() {
        match flow.stored_result()? {
            Some(record) => display::show_record(&record),
            None => display::show_info("Onboarding is complete but no result was stored."),
        }
        display::show_info(&format!("Run {} to start over.", "shera reset".green()));
        return Ok(());
    }

    display::show_banner(env!("CARGO_PKG_VERSION"));
    if !flow.answers().is_empty() {
        display::show_info(&format!("Resuming with {} answers saved.", flow.answers().len()));
    }

    let mut prompt = Prompt::new()?;

    while let Some(question) = flow.current() {
        if verbosity.show_progress() {
            let (position, total) = flow.position();
            display::show_progress(position, total, flow.progress());
        }
        display::show_question(question);

        let Some(line) = prompt.read_line()? else {
            display::show_info("Progress saved. Run `shera onboard` to continue.");
            return Ok(());
        };

        match shera::cli::prompt::interpret(question, &line) {
            Input::Quit => {
                display::show_info("Progress saved. Run `shera onboard` to continue.");
                return Ok(());
            }
            Input::Back => {
                if !flow.back()? {
                    display::show_info("Already at the first question.");
                }
            }
            Input::Answer(value) => match flow.answer(&value) {
                Ok(Step::Next) => {}
                Ok(Step::Completed(record)) => {
                    println!("\n{}", "Onboarding complete!".bold().magenta());
                    display::show_record(&record);
                    return Ok(());
                }
                Err(SheraError::InvalidAnswer { .. }) => {
                    display::show_error("Please pick one of the listed options.");
                }
                Err(e) => return Err(e.into()),
            },
        }
    }

    Ok(())
}

fn run_result(table: &QuestionTable, store: FileStore, json: bool) -> Result<()> {
    let flow = OnboardingFlow::resume(table, store)?;
    match flow.stored_result()? {
        Some(record) if json => println!("{}", serde_json::to_string_pretty(&record)?),
        Some(record) => {
            display::show_record(&record);
            display::show_hidden_answers(&hidden_answers(table, flow.answers()));
        }
        None => display::show_info(&format!(
            "No assessment yet. Run {} to take the questionnaire.",
            "shera onboard".green()
        )),
    }
    Ok(())
}

fn run_config(args: &Args, config: &Config, save: bool) -> Result<()> {
    if save {
        let Some(path) = args.config.clone().or_else(Config::default_path) else {
            bail!("No config path given and no home directory found");
        };
        config.save(&path)?;
        display::show_info(&format!("Configuration written to {}", path.display()));
        return Ok(());
    }

    let source = args
        .config
        .clone()
        .or_else(|| Config::default_path().filter(|p| p.exists()));
    match source {
        Some(path) => println!("{}", format!("# {}", path.display()).dimmed()),
        None => println!("{}", "# built-in defaults".dimmed()),
    }
    println!("{}", toml::to_string_pretty(config).context("Failed to serialize config")?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        display::show_error(&e);
        std::process::exit(2);
    }

    let config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    let verbosity = args.verbosity_or(config.default_verbosity());
    logging::init(verbosity)?;

    if !config.display.color_output {
        colored::control::set_override(false);
    }

    tracing::debug!(verbosity = verbosity.as_str(), "starting");

    let table = load_question_table(&args, &config)?;

    match &args.command {
        Commands::Questions { category } => run_questions(&table, category.as_deref()),
        Commands::Score { file, json } => run_score(&table, &config, file, *json),
        Commands::Onboard => {
            let store = open_store(&args, &config)?;
            run_onboard(&table, &config, store, verbosity)
        }
        Commands::Result { json } => {
            let store = open_store(&args, &config)?;
            run_result(&table, store, *json)
        }
        Commands::Reset => {
            let mut store = open_store(&args, &config)?;
            onboarding::reset(&mut store)?;
            display::show_info("Onboarding progress and stored assessment cleared.");
            Ok(())
        }
        Commands::Config { save } => run_config(&args, &config, *save),
    }
}
