//! Desktop notification adapter for weather hazards.

use skyguard_core::HazardAssessment;

pub const ALERT_TITLE: &str = "Weather Alert";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationPermission {
    /// Not asked yet
    #[default]
    Default,
    Granted,
    Denied,
}

/// A user-facing notification facility.
pub trait NotificationSink: Send + Sync {
    fn permission(&self) -> NotificationPermission;

    /// Ask the user for permission; returns the resulting state.
    fn request_permission(&self) -> NotificationPermission;

    fn show(&self, title: &str, body: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// No hazards, nothing to say
    Quiet,
    Shown,
    PermissionRequested,
    Blocked,
}

/// Notify about the hazards in `assessment`, if any.
///
/// Without permission yet, this only asks for it; the alert itself waits for
/// the next evaluation.
pub fn notify_hazards<N: NotificationSink + ?Sized>(
    sink: &N,
    assessment: &HazardAssessment,
) -> NotifyOutcome {
    if assessment.is_clear() {
        return NotifyOutcome::Quiet;
    }

    match sink.permission() {
        NotificationPermission::Granted => {
            sink.show(ALERT_TITLE, &assessment.hazards().join(" • "));
            NotifyOutcome::Shown
        }
        NotificationPermission::Default => {
            let state = sink.request_permission();
            tracing::debug!(?state, "Requested notification permission");
            NotifyOutcome::PermissionRequested
        }
        NotificationPermission::Denied => NotifyOutcome::Blocked,
    }
}

/// Writes notifications to the log. Always permitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn permission(&self) -> NotificationPermission {
        NotificationPermission::Granted
    }

    fn request_permission(&self) -> NotificationPermission {
        NotificationPermission::Granted
    }

    fn show(&self, title: &str, body: &str) {
        tracing::warn!(target: "skyguard::notify", "{}: {}", title, body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use skyguard_core::AssessmentSource;

    struct RecordingSink {
        permission: Mutex<NotificationPermission>,
        shown: Mutex<Vec<(String, String)>>,
        requests: Mutex<u32>,
    }

    impl RecordingSink {
        fn new(permission: NotificationPermission) -> Self {
            Self {
                permission: Mutex::new(permission),
                shown: Mutex::new(Vec::new()),
                requests: Mutex::new(0),
            }
        }
    }

    impl NotificationSink for RecordingSink {
        fn permission(&self) -> NotificationPermission {
            *self.permission.lock()
        }

        fn request_permission(&self) -> NotificationPermission {
            *self.requests.lock() += 1;
            *self.permission.lock() = NotificationPermission::Granted;
            NotificationPermission::Granted
        }

        fn show(&self, title: &str, body: &str) {
            self.shown.lock().push((title.to_string(), body.to_string()));
        }
    }

    fn hazards() -> HazardAssessment {
        HazardAssessment::builder(AssessmentSource::Weather)
            .hazard("Heavy rain")
            .hazard("Storm / high wind")
            .build()
    }

    #[test]
    fn test_granted_shows_joined_hazards() {
        let sink = RecordingSink::new(NotificationPermission::Granted);
        assert_eq!(notify_hazards(&sink, &hazards()), NotifyOutcome::Shown);

        let shown = sink.shown.lock();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].0, "Weather Alert");
        assert_eq!(shown[0].1, "Heavy rain • Storm / high wind");
    }

    #[test]
    fn test_default_permission_only_requests() {
        let sink = RecordingSink::new(NotificationPermission::Default);
        assert_eq!(
            notify_hazards(&sink, &hazards()),
            NotifyOutcome::PermissionRequested
        );
        assert_eq!(*sink.requests.lock(), 1);
        assert!(sink.shown.lock().is_empty());
    }

    #[test]
    fn test_denied_does_nothing() {
        let sink = RecordingSink::new(NotificationPermission::Denied);
        assert_eq!(notify_hazards(&sink, &hazards()), NotifyOutcome::Blocked);
        assert_eq!(*sink.requests.lock(), 0);
        assert!(sink.shown.lock().is_empty());
    }

    #[test]
    fn test_clear_assessment_is_quiet() {
        let sink = RecordingSink::new(NotificationPermission::Default);
        let clear = HazardAssessment::builder(AssessmentSource::Weather).build();
        assert_eq!(notify_hazards(&sink, &clear), NotifyOutcome::Quiet);
        assert_eq!(*sink.requests.lock(), 0);
    }
}
