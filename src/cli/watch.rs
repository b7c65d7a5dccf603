use super::{chart, markets, movers, ui};
use crate::core::market::{ChartRange, MarketProvider};
use crate::core::metrics::split_movers;
use crate::core::poll::Poller;
use crate::core::state::DashboardState;
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::debug;

/// Live dashboard loop. A background poller refreshes the listing on a
/// fixed interval while this task handles keyboard input; pausing stops
/// the poller's fetches without tearing the timer down. Input is
/// line-based: Enter toggles pause, `s` flips the sort, `q` quits, and
/// any other word selects the charted asset by id.
pub async fn run(provider: Arc<dyn MarketProvider>, refresh: Duration) -> Result<()> {
    let (pause_tx, pause_rx) = watch::channel(false);
    let (mut snapshots, poll_handle) = Poller::new(provider, refresh).spawn(pause_rx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut state = DashboardState::new();

    println!(
        "{}",
        ui::style_text("Waiting for the first refresh...", ui::StyleType::Subtle)
    );

    loop {
        tokio::select! {
            maybe_assets = snapshots.recv() => {
                let Some(assets) = maybe_assets else { break };
                state = state.with_refresh(assets, Utc::now());
                render(&state);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "q" | "quit" => break,
                    "" => {
                        let paused = !state.paused();
                        state = state.with_paused(paused);
                        // A send only fails when the poller is gone.
                        let _ = pause_tx.send(paused);
                        debug!(paused, "Pause toggled");
                        render(&state);
                    }
                    "s" => {
                        let sort = state.sort().toggle();
                        state = state.with_sort(sort);
                        render(&state);
                    }
                    id => {
                        state = state.with_selection(id);
                        render(&state);
                    }
                }
            }
        }
    }

    poll_handle.abort();
    Ok(())
}

fn render(state: &DashboardState) {
    let term = console::Term::stdout();
    let _ = term.clear_screen();
    println!("{}", render_dashboard(state));
}

/// Builds the whole dashboard from one state snapshot.
pub fn render_dashboard(state: &DashboardState) -> String {
    let refreshed = state
        .refreshed_at()
        .map_or("never".to_string(), |at| at.format("%H:%M:%S UTC").to_string());
    let pause_badge = if state.paused() {
        ui::style_text(" [PAUSED]", ui::StyleType::Error)
    } else {
        String::new()
    };

    let mut output = format!(
        "{}{}  {}\n\n",
        ui::style_text("Coin Radar", ui::StyleType::Title),
        pause_badge,
        ui::style_text(
            &format!("refreshed {refreshed} · sorted by {}", state.sort()),
            ui::StyleType::Subtle
        )
    );

    output.push_str(&markets::render_table(state.assets(), state.sort()));
    output.push('\n');

    if let Some(selected) = state.selected() {
        output.push('\n');
        output.push_str(&chart::render_chart(selected, ChartRange::Week));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&movers::render_panels(&split_movers(state.assets())));
    output.push('\n');

    output.push_str(&ui::style_text(
        "\nEnter: pause/resume · s: sort · <coin-id>: chart · q: quit",
        ui::StyleType::Subtle,
    ));
    output
}
