mod app;
mod tui;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::thread::JoinHandle;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    tty::IsTty,
};
use nuke_core::{Entry, ScanConfig, ScanMessage, Scanner, validate_root};
use ratatui::{Terminal, backend::CrosstermBackend, style::Style, widgets::Widget};

use app::{Action, AppMode, AppState};
use tui::{AppEvent, EventHandler, handle_key};
use ui::{AppLayout, Footer, Header, ListView, ScanView, SearchBar, Theme};

const KEY_BINDINGS: &str = "\
Interactive Controls:
  ↑/↓ or k/j      Move
  Space           Select/deselect
  Enter           Confirm deletion
  /               Search
  Esc             Exit search
  q               Quit";

/// NUKE - Interactive node_modules cleaner
#[derive(Parser, Debug)]
#[command(name = "nuke")]
#[command(about = "Find and delete node_modules folders under a directory")]
#[command(version)]
#[command(after_help = KEY_BINDINGS)]
struct Args {
    /// Root directory to scan
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Preview deletions without removing anything
    #[arg(short, long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    // Validate path
    let path = match validate_root(&args.path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if !io::stdin().is_tty() {
        eprintln!("This app must be run in a terminal with interactive input.");
        std::process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run app
    let result = run_app(&mut terminal, path, args.dry_run);

    // Restore terminal
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    // The report has to outlive the alternate screen
    if let Ok(state) = &result {
        for line in ui::report_lines(state) {
            println!("{line}");
        }
    }

    result.map(|_| ())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    path: PathBuf,
    dry_run: bool,
) -> Result<AppState> {
    let theme = Theme::default();
    let mut state = AppState::new(path.clone(), dry_run);
    let event_handler = EventHandler::new(50); // 50ms tick rate

    // Start the scan in the background; the loop stays responsive and the
    // completed entry list arrives through the join handle
    let scanner = Scanner::new(ScanConfig::default());
    let (progress_rx, scan_handle) = scanner.scan(path);
    let mut scan_handle: Option<JoinHandle<Vec<Entry>>> = Some(scan_handle);

    loop {
        // Check for scan progress/completion
        while let Ok(msg) = progress_rx.try_recv() {
            match msg {
                ScanMessage::Progress(progress) => {
                    state.update_progress(progress);
                }
                ScanMessage::Completed => {
                    if let Some(handle) = scan_handle.take()
                        && let Ok(entries) = handle.join()
                    {
                        state.set_entries(entries);
                    }
                    break;
                }
            }
        }

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();
            let layout = AppLayout::new(area, state.mode == AppMode::Searching);

            // Background
            frame
                .buffer_mut()
                .set_style(area, Style::default().bg(theme.bg));

            // Header
            Header::new(&state, &theme).render(layout.header, frame.buffer_mut());

            // Search input
            if state.mode == AppMode::Searching {
                SearchBar::new(&state.search_term, &theme)
                    .render(layout.search, frame.buffer_mut());
            }

            // Main content
            match state.mode {
                AppMode::Scanning => {
                    ScanView::new(&state.progress, state.spinner_frame, &theme)
                        .render(layout.list, frame.buffer_mut());
                }
                AppMode::Browsing | AppMode::Searching => {
                    ListView::new(&state, &theme).render(layout.list, frame.buffer_mut());
                }
                AppMode::Report => {}
            }

            // Footer
            Footer::new(state.mode, &theme).render(layout.footer, frame.buffer_mut());
        })?;

        // Handle events
        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = handle_key(key, state.mode);
                handle_action(&mut state, action);
            }
            AppEvent::Resize(_, _) => {
                // Terminal will redraw on next loop
            }
            AppEvent::Tick => {
                state.tick_spinner();
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(state)
}

fn handle_action(state: &mut AppState, action: Action) {
    match action {
        Action::MoveUp => state.move_up(),
        Action::MoveDown => state.move_down(),
        Action::Toggle => state.toggle_selected(),
        Action::Confirm => state.confirm_purge(),
        Action::EnterSearch => state.enter_search(),
        Action::SearchChar(c) => state.search_push(c),
        Action::SearchBackspace => state.search_backspace(),
        Action::SearchCancel => state.cancel_search(),
        Action::SearchAccept => state.accept_search(),
        Action::Quit => state.quit(),
        Action::Tick => {}
    }
}
