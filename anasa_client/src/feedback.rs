use crate::celebration::Celebration;

/// User-visible feedback of a form.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Feedback: Send + Sync {
    /// Show or hide the busy indicator and disable or enable the submit
    /// control.
    fn set_busy(&self, busy: bool);

    fn notify(&self, notification: Notification);

    fn celebrate(&self, celebration: Celebration);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

#[cfg(feature = "mock")]
impl MockFeedback {
    /// Expect the busy indicator to be switched on and off exactly once.
    pub fn with_busy(mut self) -> Self {
        let mut seq = mockall::Sequence::new();
        self.expect_set_busy()
            .once()
            .with(mockall::predicate::eq(true))
            .in_sequence(&mut seq)
            .return_const(());
        self.expect_set_busy()
            .once()
            .with(mockall::predicate::eq(false))
            .in_sequence(&mut seq)
            .return_const(());
        self
    }

    pub fn with_notify(mut self, notification: Notification) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_const(());
        self
    }

    pub fn with_celebrate(mut self, celebration: Celebration) -> Self {
        self.expect_celebrate()
            .once()
            .with(mockall::predicate::eq(celebration))
            .return_const(());
        self
    }
}
