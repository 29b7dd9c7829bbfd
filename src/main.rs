// Tarjuma: ye/bol script to Go translator with a stepping TUI

use std::fs;
use std::io;
use std::path::Path;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tarjuma::codegen::{self, GenOptions};
use tarjuma::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;
use tarjuma::interpreter::engine::Interpreter;
use tarjuma::parser::ast::Program;
use tarjuma::parser::parse::Parser;
use tarjuma::ui::App;

/// Command-line settings
#[derive(Debug, Default)]
struct Options {
    input: String,
    tokens: bool,
    ast: bool,
    run: bool,
    tui: bool,
    output: Option<String>,
    generation: GenOptions,
}

fn usage(program_name: &str) {
    eprintln!("Usage: {} <file.ye> [options]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tokens           Print the token stream");
    eprintln!("  --ast              Print the parsed AST");
    eprintln!("  --run              Run the demonstration interpreter");
    eprintln!("  --package          Emit a complete Go file (package, imports, main)");
    eprintln!("  -o, --output PATH  Write the generated Go to PATH");
    eprintln!("  --tui              Step through the program in a terminal UI");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} demos/showcase.ye --package", program_name);
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut input = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tokens" => options.tokens = true,
            "--ast" => options.ast = true,
            "--run" => options.run = true,
            "--tui" => options.tui = true,
            "--package" => options.generation.wrap_in_main = true,
            "-o" | "--output" => match iter.next() {
                Some(path) => options.output = Some(path.clone()),
                None => return Err(format!("'{}' needs a path", arg)),
            },
            flag if flag.starts_with('-') => return Err(format!("Unknown option '{}'", flag)),
            file => {
                if input.replace(file.to_string()).is_some() {
                    return Err("Only one input file is supported".to_string());
                }
            }
        }
    }

    options.input = input.ok_or_else(|| "No input file provided".to_string())?;
    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("tarjuma");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            usage(program_name);
            process::exit(1);
        }
    };

    if !Path::new(&options.input).exists() {
        eprintln!("Error: File '{}' not found", options.input);
        process::exit(1);
    }

    let source = fs::read_to_string(&options.input)?;

    eprintln!("Parsing {}...", options.input);
    let mut parser = Parser::new(&source);

    for skipped in parser.skipped_characters() {
        eprintln!("Warning: {} skipped", skipped);
    }

    if options.tokens {
        for token in parser.tokens() {
            println!("{:>4}:{:<3} {}", token.location.line, token.location.column, token);
        }
    }

    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    for token in parser.ignored_tokens() {
        eprintln!("Warning: ignored {} at {}", token, token.location);
    }

    eprintln!(
        "Parsed successfully. Found {} top-level statements.",
        program.statements.len()
    );

    if options.ast {
        println!("{:#?}", program);
    }

    if options.tui {
        return run_tui(program, source, &options.generation);
    }

    if options.run {
        run_demo(program.clone());
    }

    let generated = codegen::generate(&program, &options.generation);
    match &options.output {
        Some(path) => {
            fs::write(path, format!("{}\n", generated.trim_end()))?;
            eprintln!("Wrote {}", path);
        }
        None if !options.tokens && !options.ast && !options.run => println!("{}", generated),
        None => {}
    }

    Ok(())
}

/// Run the demonstration interpreter and print what `bol` printed
fn run_demo(program: Program) {
    eprintln!("Executing program...");
    let mut interpreter = Interpreter::new(program, DEFAULT_SNAPSHOT_LIMIT);

    if let Err(e) = interpreter.run() {
        eprintln!("Runtime error: {}", e);
    }

    for line in interpreter.terminal().get_output() {
        println!("{}", line);
    }

    for failure in interpreter.evaluation_errors() {
        eprintln!(
            "Warning: 'bol {}' at {} printed 0: {}",
            failure.expression, failure.location, failure.error
        );
    }
    eprintln!("Total snapshots: {}", interpreter.total_snapshots());
}

fn run_tui(
    program: Program,
    source: String,
    generation: &GenOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut interpreter = Interpreter::new(program, DEFAULT_SNAPSHOT_LIMIT);

    eprintln!("Executing program...");
    match interpreter.run() {
        Ok(()) => eprintln!("Total snapshots: {}", interpreter.total_snapshots()),
        Err(e) => {
            eprintln!("Runtime error: {}", e);
            eprintln!("Entering TUI with partial execution history...");
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter, source, generation);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}
