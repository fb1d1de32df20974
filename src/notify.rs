//! Notifications pushed from the engine to its display collaborator.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

use crate::sync::{self, Mutex};

/// A message from the engine to whoever renders the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Notification {
    /// A line for the event log.
    Log(String),
    /// Table contents changed and should be redrawn.
    Repaint,
    /// The event log should be cleared.
    ResetLog,
}

impl Notification {
    /// Returns the log text, if this is a log line.
    #[must_use]
    pub fn as_log(&self) -> Option<&str> {
        match self {
            Self::Log(text) => Some(text),
            _ => None,
        }
    }
}

/// Fan-out point for notifications.
///
/// Every notification is appended to a bounded queue, drained with
/// [`Notifier::drain`], and under `std` also sent to each subscribed channel.
#[derive(Debug)]
pub struct Notifier {
    backlog: usize,
    queue: Mutex<VecDeque<Notification>>,
    #[cfg(feature = "std")]
    subscribers: Mutex<Vec<std::sync::mpsc::Sender<Notification>>>,
}

impl Notifier {
    /// Creates a notifier that keeps at most `backlog` undrained notifications.
    #[must_use]
    pub const fn new(backlog: usize) -> Self {
        Self {
            backlog,
            queue: Mutex::new(VecDeque::new()),
            #[cfg(feature = "std")]
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Publishes a notification.
    pub fn publish(&self, notification: Notification) {
        #[cfg(feature = "std")]
        sync::with(&self.subscribers, |subscribers| {
            subscribers.retain(|tx| tx.send(notification.clone()).is_ok());
        });

        if self.backlog == 0 {
            return;
        }
        sync::with(&self.queue, |queue| {
            while queue.len() >= self.backlog {
                queue.pop_front();
            }
            queue.push_back(notification);
        });
    }

    /// Publishes a log line.
    pub fn log(&self, text: impl Into<String>) {
        self.publish(Notification::Log(text.into()));
    }

    /// Takes every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        sync::with(&self.queue, |queue| queue.drain(..).collect())
    }

    /// Opens a channel that receives every notification published from now on.
    ///
    /// Dropping the receiver unsubscribes it.
    #[cfg(feature = "std")]
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<Notification> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.subscribers.lock().push(tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drops_oldest_past_backlog() {
        let notifier = Notifier::new(2);
        notifier.log("one");
        notifier.log("two");
        notifier.publish(Notification::Repaint);

        assert_eq!(
            notifier.drain(),
            vec![Notification::Log("two".into()), Notification::Repaint]
        );
        assert!(notifier.drain().is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn subscribers_see_everything_and_prune_on_drop() {
        let notifier = Notifier::new(0);
        let first = notifier.subscribe();
        let second = notifier.subscribe();
        notifier.publish(Notification::ResetLog);
        drop(second);
        notifier.log("after");

        assert_eq!(first.try_recv().unwrap(), Notification::ResetLog);
        assert_eq!(first.try_recv().unwrap().as_log(), Some("after"));
        assert_eq!(notifier.subscribers.lock().len(), 1);
        assert!(notifier.drain().is_empty());
    }
}
