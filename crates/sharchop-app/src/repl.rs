use std::io::{self, BufRead, Write};
use std::time::Duration;

use sharchop_config::Config;
use sharchop_core::{MediaLocator, PhraseTable};
use sharchop_voice::Transcriber;

use crate::session::{RequestOutcome, Session, handle_query};

const DEFAULT_SAMPLE_COUNT: usize = 5;

/// Interactive loop: one request handled to completion per line
pub fn run(
    table: &PhraseTable,
    locator: &MediaLocator,
    config: &Config,
    transcriber: &dyn Transcriber,
) -> anyhow::Result<()> {
    let mut session = Session::new();

    println!(
        "Bidirectional Tshangla-English phrase lookup ({} entries). Type :help for commands.",
        table.len()
    );
    print_prompt(&session)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            "" => {}
            ":q" | ":quit" => break,
            ":help" => print_help(),
            ":swap" => {
                session.swap();
                println!("Direction: {} -> {}", session.source(), session.target());
            }
            ":history" => print_history(&session, locator),
            ":clear" => {
                session.history.clear();
                println!("History cleared.");
            }
            ":export" => print_export(&session)?,
            ":count" => println!("Total entries: {}", table.len()),
            ":voice" => capture_voice(&mut session, table, locator, config, transcriber),
            _ if input.starts_with(":sample") => print_samples(table, input),
            _ if input.starts_with(':') => {
                println!("Unknown command: {input}. Type :help for commands.");
            }
            query => render(handle_query(query, &mut session, table, locator, config.matcher)),
        }

        print_prompt(&session)?;
    }

    Ok(())
}

fn print_prompt(session: &Session) -> anyhow::Result<()> {
    print!("{}> ", session.source());
    io::stdout().flush()?;
    Ok(())
}

fn print_help() {
    println!("Enter a phrase to translate, or:");
    println!("  :swap       flip the translation direction");
    println!("  :voice      capture a phrase from the microphone");
    println!("  :sample [n] show random example phrases");
    println!("  :history    show this session's translations");
    println!("  :export     dump the history as JSON");
    println!("  :clear      discard the history");
    println!("  :count      show the table size");
    println!("  :quit       exit");
}

fn render(outcome: RequestOutcome) {
    let view = match outcome {
        RequestOutcome::Translated(view) => view,
        RequestOutcome::NoMatch => {
            println!("No matching translation found. Try rephrasing your input.");
            return;
        }
    };

    println!("Match found ({}% similarity)", view.resolved.confidence);

    println!("  {}: {}", view.resolved.source_language, view.resolved.source_text);
    match &view.source_audio {
        Some(path) => println!("    audio: {}", path.display()),
        None => println!("    audio not available for this phrase"),
    }

    println!("  {}: {}", view.resolved.target_language, view.resolved.target_text);
    match &view.target_audio {
        Some(path) => println!("    audio: {}", path.display()),
        None => println!("    audio not available for this phrase"),
    }

    if !view.alternates.is_empty() {
        println!("  Alternatives:");
        for alt in &view.alternates {
            println!(
                "    - {} -> {} ({}% similarity)",
                alt.source_text, alt.target_text, alt.score
            );
        }
    }
}

fn capture_voice(
    session: &mut Session,
    table: &PhraseTable,
    locator: &MediaLocator,
    config: &Config,
    transcriber: &dyn Transcriber,
) {
    let timeout = Duration::from_secs(config.voice.listen_timeout_secs);
    println!("Listening (up to {}s)...", config.voice.listen_timeout_secs);

    match transcriber.transcribe(timeout) {
        Ok(text) => {
            println!("Recognized: {text}");
            render(handle_query(&text, session, table, locator, config.matcher));
        }
        // Every capture failure is informational; back to the prompt
        Err(e) => println!("{e}"),
    }
}

fn print_history(session: &Session, locator: &MediaLocator) {
    if session.history.is_empty() {
        println!("No translations yet.");
        return;
    }

    for (i, item) in session.history.all().enumerate() {
        println!("{}. {}: {}", i + 1, item.source_language, item.source_text);
        println!("   {}: {}", item.target_language, item.target_text);
        for language in [item.source_language, item.target_language] {
            if let Some(path) = locator.locate(language, &item.match_id) {
                println!("   {language} audio: {}", path.display());
            }
        }
    }
}

fn print_export(session: &Session) -> anyhow::Result<()> {
    let entries: Vec<_> = session.history.all().collect();
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

fn print_samples(table: &PhraseTable, input: &str) {
    let n = input
        .strip_prefix(":sample")
        .map(str::trim)
        .filter(|rest| !rest.is_empty())
        .and_then(|rest| rest.parse().ok())
        .unwrap_or(DEFAULT_SAMPLE_COUNT);

    let samples = table.sample(n);
    if samples.is_empty() {
        println!("The table is empty.");
        return;
    }
    for row in samples {
        println!("  Tshangla: {}", row.tshangla);
        println!("  English:  {}", row.english);
        println!("  ---");
    }
}
