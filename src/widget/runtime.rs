//! Single-task event loop for a widget.

use crate::phone::PhoneNumberLibrary;
use crate::widget::controller::PhoneInputWidget;
use crate::widget::events::WidgetEvent;
use crate::widget::view::WidgetView;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

/// Drive `widget` from `events` until the channel closes.
///
/// Events are handled strictly in order; each handler completes before the
/// next event is read. The pending search deadline is awaited alongside the
/// channel, and a newer search keystroke replaces it. After every event or
/// applied search the fresh view is published on `views`.
///
/// # Returns
/// The widget, once every event sender has been dropped. A search still
/// waiting on its debounce at that point is dropped.
pub async fn run_widget<L>(
    mut widget: PhoneInputWidget<L>,
    mut events: mpsc::Receiver<WidgetEvent>,
    views: watch::Sender<WidgetView>,
) -> PhoneInputWidget<L>
where
    L: PhoneNumberLibrary,
{
    views.send_replace(widget.view());

    loop {
        let deadline = widget.search_deadline();

        tokio::select! {
            event = events.recv() => match event {
                Some(event) => widget.handle(event, Instant::now()),
                None => break,
            },
            _ = wait_until(deadline) => {
                widget.flush_search(Instant::now());
            }
        }

        views.send_replace(widget.view());
    }

    tracing::debug!("Event channel closed, stopping widget loop");
    widget.cancel_pending_search();
    widget
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
