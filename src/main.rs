use clap::Parser;
use contact_form::app::Runtime;
use contact_form::terminal::Terminal;
use contact_form::{ContactForm, FormConfig, Result, logging};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "contact-form", about = "Interactive contact form")]
struct Cli {
    /// YAML file overriding the form's header, button text and rules.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the initial document as JSON and exit.
    #[arg(long)]
    dump_json: bool,

    /// Write logs here instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let log_file = cli.log_file.as_ref().map(File::create).transpose()?;
    logging::init("warn", log_file);

    let config = match &cli.config {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::default(),
    };
    let form = ContactForm::with_config(config)?;

    if cli.dump_json {
        println!("{}", form.render().to_json()?);
        return Ok(());
    }

    let mut runtime = Runtime::new(form, Terminal::new()?);
    runtime.run()?;

    if let Some(values) = runtime.form().submitted() {
        println!("{}", serde_json::to_string_pretty(values)?);
    }
    Ok(())
}
