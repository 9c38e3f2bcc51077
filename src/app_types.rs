use std::sync::{Mutex, MutexGuard, PoisonError};

pub(crate) type MainWindowState = MainWindowSlot<tauri::WebviewWindow>;

#[derive(Debug)]
struct MainWindowEntry<W> {
    window: W,
    revealed: bool,
}

/// Holds the single top-level window between its creation and its
/// destroyed event.
#[derive(Debug)]
pub(crate) struct MainWindowSlot<W> {
    inner: Mutex<Option<MainWindowEntry<W>>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RevealAction<W> {
    Show(W),
    Minimize(W),
    AlreadyRevealed,
}

impl<W> Default for MainWindowSlot<W> {
    fn default() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }
}

impl<W: Clone> MainWindowSlot<W> {
    fn lock(&self) -> MutexGuard<'_, Option<MainWindowEntry<W>>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set(&self, window: W) {
        *self.lock() = Some(MainWindowEntry {
            window,
            revealed: false,
        });
    }

    pub(crate) fn clear(&self) -> bool {
        self.lock().take().is_some()
    }

    pub(crate) fn current(&self) -> Option<W> {
        self.lock().as_ref().map(|entry| entry.window.clone())
    }

    pub(crate) fn is_present(&self) -> bool {
        self.lock().is_some()
    }

    /// Resolves the ready-to-show signal. Only the first signal after
    /// creation reveals the window.
    ///
    /// # Panics
    ///
    /// Panics when no window is held: the signal can only come from a live
    /// main window, so an empty slot means the process state is corrupt.
    pub(crate) fn reveal_on_ready(&self, start_minimized: bool) -> RevealAction<W> {
        let mut guard = self.lock();
        let Some(entry) = guard.as_mut() else {
            panic!("\"main window\" is not defined");
        };
        if entry.revealed {
            return RevealAction::AlreadyRevealed;
        }

        entry.revealed = true;
        if start_minimized {
            RevealAction::Minimize(entry.window.clone())
        } else {
            RevealAction::Show(entry.window.clone())
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl BridgeResult {
    pub(crate) fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }

    pub(crate) fn failed(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}
