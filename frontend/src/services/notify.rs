//! Transient notification banners.
//!
//! [`Notifier`] is provided as context at startup; any component can raise
//! a banner with [`Notifier::error`] or [`Notifier::success`]. Each banner
//! runs its own timer chain: slide in, slide out, removal.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::config::{
    NOTIFICATION_DISMISS_AFTER_MS, NOTIFICATION_ENTER_DELAY_MS, NOTIFICATION_REMOVE_DELAY_MS,
};
use crate::types::{Notification, NotificationKind, NotificationPhase};

/// Banners currently in the document, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationList {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a banner in the `Entering` phase and return its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            phase: NotificationPhase::Entering,
        });
        id
    }

    /// Returns `false` when the banner is already gone.
    pub fn set_phase(&mut self, id: u64, phase: NotificationPhase) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.phase = phase;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One timed change in a banner's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerStep {
    Phase(NotificationPhase),
    Remove,
}

/// Steps applied to a new banner, each with its delay after the previous
/// step (the first one counts from insertion).
pub fn banner_schedule() -> [(u32, BannerStep); 3] {
    [
        (
            NOTIFICATION_ENTER_DELAY_MS,
            BannerStep::Phase(NotificationPhase::Visible),
        ),
        (
            NOTIFICATION_DISMISS_AFTER_MS.saturating_sub(NOTIFICATION_ENTER_DELAY_MS),
            BannerStep::Phase(NotificationPhase::Leaving),
        ),
        (NOTIFICATION_REMOVE_DELAY_MS, BannerStep::Remove),
    ]
}

/// Handle for raising banners.
#[derive(Clone, Copy)]
pub struct Notifier {
    list: RwSignal<NotificationList>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            list: create_rw_signal(NotificationList::new()),
        }
    }

    /// Create a notifier and register it as context.
    pub fn provide() -> Self {
        let notifier = Self::new();
        provide_context(notifier);
        notifier
    }

    /// Notifier registered by [`Notifier::provide`].
    pub fn use_notifier() -> Self {
        expect_context::<Notifier>()
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message.into());
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message.into());
    }

    /// Banners to render.
    pub fn notifications(&self) -> Signal<Vec<Notification>> {
        let list = self.list;
        Signal::derive(move || list.with(|l| l.items().to_vec()))
    }

    fn show(&self, kind: NotificationKind, message: String) {
        match kind {
            NotificationKind::Error => log::warn!("❌ {}", message),
            NotificationKind::Success => log::info!("✅ {}", message),
        }

        let list = self.list;
        let Some(id) = list.try_update(|l| l.push(kind, message)) else {
            return;
        };

        spawn_local(async move {
            for (delay_ms, step) in banner_schedule() {
                TimeoutFuture::new(delay_ms).await;
                list.update(|l| match step {
                    BannerStep::Phase(phase) => {
                        l.set_phase(id, phase);
                    }
                    BannerStep::Remove => l.remove(id),
                });
            }
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut list = NotificationList::new();
        let a = list.push(NotificationKind::Error, "first");
        let b = list.push(NotificationKind::Error, "first");

        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
        assert!(list.items().iter().all(|n| n.phase == NotificationPhase::Entering));
    }

    #[test]
    fn test_lifecycle_only_touches_one_banner() {
        let mut list = NotificationList::new();
        let error = list.push(NotificationKind::Error, "Please choose a valid file first.");
        let success = list.push(NotificationKind::Success, "Report analyzed successfully!");

        assert!(list.set_phase(error, NotificationPhase::Visible));
        assert!(list.set_phase(error, NotificationPhase::Leaving));
        assert_eq!(list.items()[1].phase, NotificationPhase::Entering);

        list.remove(error);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, success);
    }

    #[test]
    fn test_phase_change_after_removal() {
        let mut list = NotificationList::new();
        let id = list.push(NotificationKind::Success, "done");
        list.remove(id);

        assert!(!list.set_phase(id, NotificationPhase::Leaving));
        assert!(list.is_empty());
    }

    #[test]
    fn test_banner_schedule_timing() {
        let mut elapsed = 0;
        let timeline: Vec<(u32, BannerStep)> = banner_schedule()
            .into_iter()
            .map(|(delay, step)| {
                elapsed += delay;
                (elapsed, step)
            })
            .collect();

        assert_eq!(
            timeline,
            vec![
                (100, BannerStep::Phase(NotificationPhase::Visible)),
                (4000, BannerStep::Phase(NotificationPhase::Leaving)),
                (4300, BannerStep::Remove),
            ]
        );
    }

    #[test]
    fn test_banner_schedule_drives_list_to_removal() {
        let mut list = NotificationList::new();
        let id = list.push(NotificationKind::Error, "File size must be less than 10MB.");
        let other = list.push(NotificationKind::Success, "Report analyzed successfully!");

        let mut phases = Vec::new();
        for (_, step) in banner_schedule() {
            match step {
                BannerStep::Phase(phase) => {
                    assert!(list.set_phase(id, phase));
                    phases.push(list.items()[0].phase);
                }
                BannerStep::Remove => list.remove(id),
            }
        }

        assert_eq!(phases, vec![NotificationPhase::Visible, NotificationPhase::Leaving]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, other);
    }
}
