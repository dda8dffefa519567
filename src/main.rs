use {
    argh::FromArgs,
    culpa::{throw, throws},
    liso::{liso, OutputOnly, Response},
    lox_scan::{scan, DriverError, Report as ErrorReport, Reporter, ScanError, Token},
    miette::{NamedSource, Report},
    std::process::ExitCode,
    tracing_subscriber::EnvFilter,
};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a lox script and print its tokens, or run an interactive prompt.
#[derive(FromArgs)]
struct Args {
    /// print version information
    #[argh(switch, short = 'v')]
    version: bool,

    /// log scanner activity to stderr
    #[argh(switch)]
    verbose: bool,

    /// script file
    #[argh(positional)]
    script: Vec<String>,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    match run_cli(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            if let Some(cause) = std::error::Error::source(&error) {
                eprintln!("  caused by: {}", cause);
            }
            ExitCode::from(error.exit_code())
        }
    }
}

#[throws(DriverError)]
fn run_cli(args: Args) -> ExitCode {
    if args.version {
        println!("{} {}", APP_NAME, APP_VERSION);
        return ExitCode::SUCCESS;
    }

    if args.script.len() > 1 {
        throw!(DriverError::Usage("lox [script file]".into()));
    }

    init_logging(args.verbose);

    let interactive = args.script.is_empty();
    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(!interactive) // liso doesn't wrapln! unicode output well..
                .color(!interactive) // liso doesn't handle color codes well..
                .context_lines(3)
                .build(),
        )
    }))?;

    match args.script.first() {
        Some(script) => run_script(script)?,
        None => {
            run_repl();
            ExitCode::SUCCESS
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[throws(DriverError)]
fn run_script(script: &str) -> ExitCode {
    let contents = std::fs::read_to_string(script).map_err(|source| DriverError::Io {
        path: script.into(),
        source,
    })?;
    tracing::debug!(script, bytes = contents.len(), "scanning script");

    let mut reporter = ConsoleReporter::new(Console::Stdout);
    reporter.set_source(script, &contents);
    for token in scan(&contents, &mut reporter) {
        println!("{}", token);
    }

    if reporter.had_error() {
        ExitCode::from(65)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_repl() {
    let mut io = liso::InputOutput::new();
    let mut reporter = ConsoleReporter::new(Console::Liso(io.clone_output()));

    io.prompt(liso!(fg = green, bold, "> ", reset), true, false);
    loop {
        match io.read_blocking() {
            Response::Input(line) => {
                let source = line.as_str();
                io.echoln(liso!(fg = green, dim, "> ", fg = none, source));
                reporter.set_source("<stdin>", source);
                let tokens = scan(source, &mut reporter);
                print_tokens(&io.clone_output(), &tokens);
                reporter.reset();
            }
            Response::Discarded(line) => {
                io.echoln(liso!(bold + dim, "X ", -bold, line));
            }
            Response::Dead => break,
            Response::Quit => break,
            Response::Finish => break,
            _ => {}
        }
    }
}

fn print_tokens(out: &OutputOnly, tokens: &[Token]) {
    for token in tokens {
        out.wrapln(liso!(fg = blue, token.to_string(), fg = none));
    }
}

enum Console {
    Stdout,
    Liso(OutputOnly),
}

impl Console {
    fn error(&self, text: String) {
        match self {
            Console::Stdout => eprintln!("{}", text),
            Console::Liso(out) => out.println(liso!(fg = red, bold, text, fg = none)),
        }
    }
}

/// Prints lexical errors as they are found and remembers that one happened.
struct ConsoleReporter {
    console: Console,
    name: String,
    source: String,
    had_error: bool,
}

impl ConsoleReporter {
    fn new(console: Console) -> Self {
        Self {
            console,
            name: String::new(),
            source: String::new(),
            had_error: false,
        }
    }

    fn set_source(&mut self, name: &str, text: &str) {
        self.name = name.into();
        self.source = text.into();
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        let summary = ErrorReport {
            line,
            location: location.into(),
            message: message.into(),
        };
        self.console.error(summary.to_string());
        self.had_error = true;
    }

    fn had_error(&self) -> bool {
        self.had_error
    }

    fn reset(&mut self) {
        self.had_error = false;
    }

    fn report_scan_error(&mut self, error: &ScanError) {
        let report = Report::new(error.clone())
            .with_source_code(NamedSource::new(&self.name, self.source.clone()));
        self.console.error(format!("{:?}", report));
        self.report(error.line(), "", &error.to_string());
    }
}
