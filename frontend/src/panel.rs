/// Visible state of the chat panel.
///
/// Sends are not serialised: a second send while loading is allowed, and the
/// first reply to arrive clears the loading state. Closing the panel keeps a
/// pending request's loading state so reopening still shows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    ClosedLoading,
    OpenIdle,
    OpenLoading,
}

impl PanelState {
    fn with(open: bool, loading: bool) -> Self {
        match (open, loading) {
            (false, false) => PanelState::Closed,
            (false, true) => PanelState::ClosedLoading,
            (true, false) => PanelState::OpenIdle,
            (true, true) => PanelState::OpenLoading,
        }
    }

    pub fn toggle(self) -> Self {
        Self::with(!self.is_open(), self.is_loading())
    }

    pub fn close(self) -> Self {
        Self::with(false, self.is_loading())
    }

    pub fn send_started(self) -> Self {
        Self::with(self.is_open(), true)
    }

    pub fn send_finished(self) -> Self {
        Self::with(self.is_open(), false)
    }

    pub fn is_open(self) -> bool {
        matches!(self, PanelState::OpenIdle | PanelState::OpenLoading)
    }

    pub fn is_loading(self) -> bool {
        matches!(self, PanelState::ClosedLoading | PanelState::OpenLoading)
    }
}
