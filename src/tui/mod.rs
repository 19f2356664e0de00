//! Terminal settings panel: a folder chooser bound to the plugin's one
//! persisted setting, the new-file directory.

mod app;
mod constants;
mod draw;
mod handlers;

pub use app::Panel;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::path::PathBuf;

use crate::core::settings::Settings;

use handlers::HandleResult;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the settings panel loop. `start_dir` overrides where browsing begins;
/// the stored setting is the default.
pub fn run(settings: Settings, start_dir: Option<PathBuf>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut panel = Panel::new(settings, start_dir);

    loop {
        terminal.draw(|f| draw::draw(f, &mut panel, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? && let Event::Key(key) = event::read()?
        {
            if handlers::handle_key(key, &mut panel) == HandleResult::Break {
                break;
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
