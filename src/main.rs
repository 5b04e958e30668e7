use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::{Input, Select};
use docsage::{
    catalog::Action,
    chat::GeminiBackend,
    config::Config,
    pipeline::PipelineController,
};
use indicatif::ProgressBar;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "docsage")]
#[command(about = "Document AI pipeline: summarize, translate, question and compare your documents with Gemini")]
#[command(version)]
struct Cli {
    /// Document file to load (pdf, txt or html)
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    file: Option<PathBuf>,
    /// Web page to load instead of a file
    #[arg(long, value_name = "URL")]
    url: Option<String>,
    /// Path to a settings.toml (overrides the default locations)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load().unwrap_or_default(),
    };

    // The credential is resolved once at startup; without it there is
    // nothing useful to run
    let api_key = config
        .gemini_api_key()
        .context("No Gemini API key configured. Set GEMINI_API_KEY or add it to settings.toml")?;

    let backend = Arc::new(GeminiBackend::new(&config.gemini, api_key));
    let mut controller = PipelineController::new(backend);

    // Load the initial document from the CLI arguments, or interactively
    if let Some(file) = &cli.file {
        controller
            .load_file(file)
            .await
            .with_context(|| format!("Failed to load {}", file.display()))?;
    } else if let Some(url) = &cli.url {
        controller
            .load_url(url)
            .await
            .with_context(|| format!("Failed to load {}", url))?;
    } else {
        load_interactive(&mut controller).await?;
    }
    print_preview(&controller, config.display.preview_chars);

    // Action loop: keep offering the menu until the user exits
    loop {
        let mut items: Vec<&str> = Action::all().iter().map(|a| a.label()).collect();
        items.push("Load a different document");
        items.push("Exit");

        let choice = Select::new()
            .with_prompt("Choose an action")
            .items(&items)
            .default(0)
            .interact()?;

        if choice == Action::all().len() + 1 {
            break;
        }

        if choice == Action::all().len() {
            load_interactive(&mut controller).await?;
            print_preview(&controller, config.display.preview_chars);
            continue;
        }

        let action = Action::all()[choice];
        run_action(&mut controller, action).await?;
    }

    Ok(())
}

/// Prompt for a document source until one loads successfully
async fn load_interactive(controller: &mut PipelineController) -> Result<()> {
    loop {
        let source = Select::new()
            .with_prompt("Choose document source")
            .items(&["Load file", "Enter URL"])
            .default(0)
            .interact()?;

        let result = if source == 0 {
            let path: String = Input::new()
                .with_prompt("Path to PDF, TXT or HTML file")
                .interact_text()?;
            controller.load_file(Path::new(&path)).await.map(|_| ())
        } else {
            let url: String = Input::new().with_prompt("URL").interact_text()?;
            controller.load_url(&url).await.map(|_| ())
        };

        match result {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

/// Collect parameters for one action, run it and print the outcome
async fn run_action(controller: &mut PipelineController, action: Action) -> Result<()> {
    controller.select_action(action)?;
    let action = controller.begin_parameters()?;

    let mut parameters = HashMap::new();
    for name in action.required_parameters() {
        let value: String = match action.parameter_choices(name) {
            Some(choices) => {
                let index = Select::new()
                    .with_prompt(prompt_for(name))
                    .items(choices)
                    .default(0)
                    .interact()?;
                choices[index].to_string()
            }
            None => Input::new().with_prompt(prompt_for(name)).interact_text()?,
        };
        parameters.insert(name.to_string(), value);
    }

    if action.needs_second_document() {
        if let Err(e) = load_companion(controller).await {
            eprintln!("Error: {}", e);
            return Ok(());
        }
    }

    let spinner = spinner("Waiting for Gemini...");
    let result = controller.execute(parameters).await;
    spinner.finish_and_clear();

    match result {
        Ok(response) => {
            println!("\n{}\n", response);
            if action == Action::InteractiveQa {
                follow_up_loop(controller).await?;
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}

/// Interactive follow-up sub-loop; an empty question exits
async fn follow_up_loop(controller: &mut PipelineController) -> Result<()> {
    loop {
        let question: String = Input::new()
            .with_prompt("Follow-up question (empty to finish)")
            .allow_empty(true)
            .interact_text()?;

        if question.trim().is_empty() {
            controller.end_follow_up();
            return Ok(());
        }

        let spinner = spinner("Waiting for Gemini...");
        let result = controller.follow_up(&question).await;
        spinner.finish_and_clear();

        match result {
            Ok(response) => println!("\n{}\n", response),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}

/// Load the second document for a comparison
async fn load_companion(controller: &mut PipelineController) -> Result<()> {
    let source = Select::new()
        .with_prompt("Second document source")
        .items(&["Load file", "Enter URL"])
        .default(0)
        .interact()?;

    if source == 0 {
        let path: String = Input::new()
            .with_prompt("Path to second PDF, TXT or HTML file")
            .interact_text()?;
        controller.load_companion_file(Path::new(&path)).await?;
    } else {
        let url: String = Input::new()
            .with_prompt("URL of the second document")
            .interact_text()?;
        controller.load_companion_url(&url).await?;
    }

    Ok(())
}

fn print_preview(controller: &PipelineController, preview_chars: usize) {
    if let Some(document) = controller.document() {
        println!(
            "\nLoaded {} ({} bytes)",
            document.source, document.size_bytes
        );
        println!("--- Extracted text preview ---");
        println!("{}", document.preview(preview_chars));
        println!("------------------------------\n");
    }
}

fn prompt_for(name: &str) -> String {
    match name {
        "length" => "Summary length",
        "format" => "Format",
        "questions" => "Questions (separated by semicolons ';')",
        "style" => "Target style (formal, informal, poetic, journalistic)",
        "audience" => "Target audience (children, students, professionals, etc.)",
        "section" => "Section text to expand",
        "target_language" => "Target language (e.g., French, Arabic, Hebrew)",
        "user_profile" => "User profile (interests, preferences, background)",
        "code" => "Code snippet",
        "question" => "Your question",
        other => other,
    }
    .to_string()
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
