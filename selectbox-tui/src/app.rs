//! Event loop hosting one select widget.

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, error, info, trace};

use selectbox::{SelectWidget, Signal};

use crate::error::AppError;
use crate::input::{Action, translate};
use crate::layout::Layout;
use crate::render::{self, Status};
use crate::terminal::TerminalGuard;

/// Run the widget until the user quits.
///
/// Returns the selected value at exit, if any.
pub async fn run(mut select: SelectWidget<String>) -> Result<Option<String>, AppError> {
    let mut terminal = TerminalGuard::new()?;
    let mut signals = select.subscribe();
    let mut events = EventStream::new();
    let mut status = Status::default();

    // The only widget on screen starts with focus
    select.handle(selectbox::Event::Focus);
    info!(
        "Starting with {} options, terminal {:?}",
        select.options().len(),
        terminal.size()?
    );

    loop {
        let layout = Layout::for_widget(&select);
        render::draw(
            terminal.stdout(),
            &select.view(),
            select.is_focused(),
            &layout,
            &status,
        )?;

        tokio::select! {
            // Branch 1: terminal input
            Some(event_result) = events.next() => {
                let raw = match event_result {
                    Ok(raw) => raw,
                    Err(e) => {
                        error!("Event stream error: {}", e);
                        return Err(e.into());
                    }
                };
                trace!("Crossterm event: {:?}", raw);

                match translate(&raw, &layout, select.is_focused()) {
                    Action::Dispatch(widget_events) => {
                        for event in widget_events {
                            let result = select.handle(event);
                            debug!("{:?} -> {:?}", event, result);
                        }
                    }
                    Action::Quit => break,
                    Action::Redraw | Action::None => {}
                }
            }

            // Branch 2: signals committed by an earlier event
            Some(signal) = signals.recv() => {
                info!("Signal: {:?}", signal);
                match signal {
                    Signal::ValueChanged(value) => status.last_value = Some(value),
                    Signal::SelectionConfirmed(value) => {
                        status.confirmed = Some(value);
                        status.commits += 1;
                    }
                }
            }

            else => break,
        }
    }

    info!("Exiting after {} commits", status.commits);
    Ok(select.selected_value().cloned())
}
