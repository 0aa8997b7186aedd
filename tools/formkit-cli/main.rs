use clap::Parser;
use formkit::prelude::*;
use itertools::Itertools;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Replays form builder gesture scripts and prints the resulting schema
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a gesture script JSON file
    script_path: Option<String>,

    /// Seed for field id generation, for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the schema on a single line
    #[arg(short, long)]
    compact: bool,

    /// Run in interactive mode to build a form command by command
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    interactive: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut editor = build_editor(cli.seed);

    if cli.interactive {
        run_interactive(&mut editor);
    } else {
        run_non_interactive(&cli, &mut editor);
    }
}

fn build_editor(seed: Option<u64>) -> FormEditor {
    let factory = match seed {
        Some(seed) => FieldFactory::builder().with_seed(seed).build(),
        None => FieldFactory::default(),
    };
    FormEditor::with_parts(factory, Palette::default())
}

/// Replays the script given on the command line and prints the schema.
fn run_non_interactive(cli: &Cli, editor: &mut FormEditor) {
    let script_path = cli.script_path.as_deref().unwrap_or_else(|| {
        exit_with_error("Script path is required in non-interactive mode.");
    });
    let script = Script::from_file(script_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load script: {}", e)));

    let report = ScriptRunner::new(editor)
        .run(&script)
        .unwrap_or_else(|e| exit_with_error(&format!("Replay failed: {}", e)));

    if cli.compact {
        println!("{}", SchemaPreview::render_compact(editor.store().fields()));
    } else {
        println!("{}", editor.schema_preview());
    }
    eprintln!(
        "{} gestures applied, {} ignored, {} fields",
        report.applied,
        report.ignored,
        editor.store().len()
    );
}

/// Runs the CLI as a tiny line-based form builder.
fn run_interactive(editor: &mut FormEditor) {
    println!("--- Formkit Interactive Mode ---");
    print_help(editor.palette());

    loop {
        let line = prompt_for_input("formkit");
        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "" => continue,
            "add" => {
                let Some(index) = editor.palette().position(rest) else {
                    println!("Unknown palette entry '{}'.", rest);
                    continue;
                };
                editor.begin_palette_drag(index);
                report(editor.drop_on(DropTarget::Canvas));
            }
            "move" => match parse_pair(rest) {
                Some((from, to)) => {
                    editor.begin_item_drag(from);
                    report(editor.drop_on(DropTarget::Item(to)));
                }
                None => println!("Usage: move <from> <to>"),
            },
            "select" => match rest.parse::<usize>().ok().and_then(|i| row_id(editor, i)) {
                Some(id) => editor.click(&id),
                None => println!("No field at '{}'.", rest),
            },
            "label" => report_change(editor.set_label(rest)),
            "required" => report_change(editor.set_required(matches!(rest, "on" | "yes" | "true"))),
            "options" => report_change(editor.set_options(rest)),
            "delete" => report_change(editor.delete_selected()),
            "show" => println!("{}", editor.schema_preview()),
            "help" => print_help(editor.palette()),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }

    println!("{}", editor.schema_preview());
}

fn print_help(palette: &Palette) {
    let entries = palette
        .entries()
        .iter()
        .map(|entry| entry.field_type.as_str())
        .join("|");
    println!("Commands:");
    println!("  add <{}>", entries);
    println!("  move <from> <to>     reorder canvas rows");
    println!("  select <index>       select a row for the inspector");
    println!("  label <text> | required <on|off> | options <a,b,c> | delete");
    println!("  show | help | quit");
}

fn parse_pair(input: &str) -> Option<(usize, usize)> {
    let (from, to) = input.split_once(' ')?;
    Some((from.trim().parse().ok()?, to.trim().parse().ok()?))
}

fn row_id(editor: &FormEditor, index: usize) -> Option<FieldId> {
    editor
        .store()
        .fields()
        .get(index)
        .map(|field| field.id().clone())
}

fn report(outcome: DropOutcome) {
    match outcome {
        DropOutcome::Appended(id) => println!("  -> Added field '{}'", id),
        DropOutcome::Moved { from, to } => println!("  -> Moved row {} to {}", from, to),
        DropOutcome::Ignored => println!("  -> Nothing changed"),
    }
}

fn report_change(changed: bool) {
    if !changed {
        println!("  -> Nothing changed (is a field selected?)");
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();
    print!("{}> ", prompt_text);
    if io::stdout().flush().is_err() {
        exit_with_error("Failed to write to stdout");
    }
    match io::stdin().read_line(&mut line) {
        Ok(0) => "quit".to_string(),
        Ok(_) => line.trim().to_string(),
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
