// bsearch-viz: step-through binary search visualizer

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bsearch_viz::config::Config;
use bsearch_viz::logging;
use bsearch_viz::report::{self, PrintStatus};
use bsearch_viz::session::Controller;
use bsearch_viz::ui::App;

#[derive(Debug, Parser)]
#[command(name = "bsearch-viz", version, about = "Step through binary search in the terminal")]
struct Args {
    /// Comma-separated array values, e.g. "1,3,5,7,9"
    #[arg(long)]
    array: Option<String>,

    /// Value to search for
    #[arg(long, allow_hyphen_values = true)]
    target: Option<String>,

    /// Seed for random arrays (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Initial playback speed, 500 (slow) to 3000 (fast)
    #[arg(long)]
    speed: Option<u64>,

    /// Config file (default: <config dir>/bsearch-viz/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the trace to stdout instead of starting the TUI
    #[arg(long)]
    print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_tracing();

    let mut config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(seed) = args.seed {
        config.generator.seed = Some(seed);
    }
    if let Some(speed) = args.speed {
        config.playback.speed = speed;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut controller = Controller::new(&config);
    // An invalid target shows up as the alert once the TUI opens
    controller.prefill(args.array.as_deref(), args.target.as_deref());

    if args.print {
        let random_array = args.array.is_none();
        let mut out = io::stdout().lock();
        let status = report::print_search(&mut controller, random_array, &mut out)?;
        if let PrintStatus::InvalidTarget(e) = &status {
            eprintln!("Error: {}", e);
            std::process::exit(status.exit_code());
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
