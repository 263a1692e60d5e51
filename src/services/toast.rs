use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::broadcast;

use crate::models::BookingEvent;

#[derive(Debug, Default)]
struct ToastState {
    last_generation: u64,
    visible: Option<u64>,
}

/// The "booking created" notification.
///
/// Every `show` starts a new generation and schedules a dismiss for it. A
/// dismiss only hides the toast when its generation is still the visible
/// one, so a timer left over from an earlier booking fires harmlessly.
pub struct Toast {
    state: Mutex<ToastState>,
    dismiss_after: Duration,
    events: broadcast::Sender<BookingEvent>,
}

impl Toast {
    pub fn new(dismiss_after: Duration, events: broadcast::Sender<BookingEvent>) -> Self {
        Self {
            state: Mutex::new(ToastState::default()),
            dismiss_after,
            events,
        }
    }

    /// Show the toast and schedule its auto-dismiss. Must run inside a tokio
    /// runtime.
    pub fn show(self: &Arc<Self>) -> u64 {
        let generation = self.begin();

        let toast = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(toast.dismiss_after).await;
            toast.dismiss(generation);
        });

        generation
    }

    /// Hide the toast if `generation` is the one on screen. Returns whether
    /// anything was hidden.
    pub fn dismiss(&self, generation: u64) -> bool {
        {
            let mut state = self.state.lock().unwrap();
            if state.visible != Some(generation) {
                tracing::debug!(generation, "stale toast dismiss ignored");
                return false;
            }
            state.visible = None;
        }
        let _ = self.events.send(BookingEvent::ToastDismissed { generation });
        true
    }

    pub fn visible(&self) -> Option<u64> {
        self.state.lock().unwrap().visible
    }

    pub fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    fn begin(&self) -> u64 {
        let generation = {
            let mut state = self.state.lock().unwrap();
            state.last_generation += 1;
            state.visible = Some(state.last_generation);
            state.last_generation
        };
        // No receivers is fine: nobody has the page open.
        let _ = self.events.send(BookingEvent::ToastShown { generation });
        generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(dismiss_after: Duration) -> (Arc<Toast>, broadcast::Receiver<BookingEvent>) {
        let (tx, rx) = broadcast::channel(16);
        (Arc::new(Toast::new(dismiss_after, tx)), rx)
    }

    #[test]
    fn test_newer_show_supersedes_older_dismiss() {
        let (toast, _rx) = toast(Duration::from_secs(3));
        let first = toast.begin();
        let second = toast.begin();
        assert_eq!(second, first + 1);

        assert!(!toast.dismiss(first));
        assert_eq!(toast.visible(), Some(second));

        assert!(toast.dismiss(second));
        assert_eq!(toast.visible(), None);
        assert!(!toast.dismiss(second));
    }

    #[test]
    fn test_events_follow_show_and_dismiss() {
        let (toast, mut rx) = toast(Duration::from_secs(3));
        let generation = toast.begin();
        toast.dismiss(generation);

        assert!(matches!(
            rx.try_recv().unwrap(),
            BookingEvent::ToastShown { generation: g } if g == generation
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            BookingEvent::ToastDismissed { generation: g } if g == generation
        ));
    }

    #[tokio::test]
    async fn test_show_auto_dismisses() {
        let (toast, _rx) = toast(Duration::from_millis(10));
        let generation = toast.show();
        assert_eq!(toast.visible(), Some(generation));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(toast.visible(), None);
    }

    #[tokio::test]
    async fn test_stale_timer_leaves_newer_toast_visible() {
        let (toast, _rx) = toast(Duration::from_millis(200));
        toast.show();
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = toast.show();

        // First timer has fired by now, the second has not.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(toast.visible(), Some(second));
    }
}
