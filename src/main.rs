use chipbox::adapters::session_replay::{load_script, SessionReplay};
use chipbox::adapters::text_renderer::TextRenderer;
use chipbox::cli::{Cli, Command};
use chipbox::config::Settings;
use chipbox::domain::{filter_candidates, CandidateItem, CandidateList, HighlightedLabel};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let catalog = settings.catalog()?;
    let renderer = TextRenderer::new(settings.widget.placeholder.clone());

    match &cli.command {
        Command::Check => check(&catalog),
        Command::Filter { query, exclude } => filter(&catalog, &renderer, query, exclude),
        Command::Replay { script, json } => replay(catalog, &renderer, script, *json)?,
    }

    Ok(())
}

fn check(catalog: &CandidateList) {
    println!("{} candidates", catalog.len());
    for candidate in catalog {
        match &candidate.sub_text {
            Some(sub_text) => println!("  {:<8} {}  {}", candidate.id, candidate.label, sub_text),
            None => println!("  {:<8} {}", candidate.id, candidate.label),
        }
    }
}

fn filter(catalog: &CandidateList, renderer: &TextRenderer, query: &str, exclude: &[String]) {
    let selected: Vec<CandidateItem> = exclude
        .iter()
        .filter_map(|id| {
            let candidate = catalog.get(id).cloned();
            if candidate.is_none() {
                warn!("Ignoring unknown candidate id in --exclude: {}", id);
            }
            candidate
        })
        .collect();

    let matches = filter_candidates(catalog.as_slice(), &selected, query);
    info!("{} of {} candidates match '{}'", matches.len(), catalog.len(), query);

    for m in matches {
        let label = HighlightedLabel::new(&m.candidate.label, Some(m.span));
        println!("{:<8} {}", m.candidate.id, renderer.render_label(&label));
    }
}

fn replay(catalog: CandidateList, renderer: &TextRenderer, script: &Path, json: bool) -> anyhow::Result<()> {
    let script = load_script(script)?;
    let steps = SessionReplay::run(catalog, &script);

    if json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    for step in &steps {
        println!("#{} {}", step.index, serde_json::to_string(&step.step)?);
        println!("{}", renderer.render(&step.view));
    }
    Ok(())
}
