//! Result picker selection state machine.
//!
//! ```text
//!            set_query (non-empty)            window elapsed
//!   Hidden ─────────────────────────▶ Pending ─────────────▶ Shown
//!     ▲                                  ▲                     │
//!     │        Escape / blur / commit    │   set_query         │
//!     └──────────────────────────────────┴─────────────────────┘
//! ```
//!
//! Arrow keys and hover only act while `Shown`. The highlighted index is
//! `None` when nothing is highlighted and always lies inside the current
//! result set.

/// Visibility phase of the result picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Pending,
    Shown,
}

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl NavKey {
    /// Map a DOM-style key name
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowDown" | "Down" => NavKey::ArrowDown,
            "ArrowUp" | "Up" => NavKey::ArrowUp,
            "Enter" => NavKey::Enter,
            "Escape" | "Esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// What a key press asks the owner of the results to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// The highlight moved to this index
    Moved(usize),
    /// Commit the item at this index
    Commit(usize),
    /// Hide the picker and clear the query without committing
    Dismiss,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    phase: Phase,
    index: Option<usize>,
    len: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Query text changed: wait for the next evaluation
    pub fn begin_pending(&mut self) {
        self.phase = Phase::Pending;
        self.index = None;
    }

    /// A new result set of `len` items is on screen
    pub fn show(&mut self, len: usize) {
        self.phase = Phase::Shown;
        self.len = len;
        self.index = None;
    }

    pub fn hide(&mut self) {
        self.phase = Phase::Hidden;
        self.len = 0;
        self.index = None;
    }

    /// Highlight `index`, clamped into the current result set
    pub fn set_index(&mut self, index: Option<usize>) {
        self.index = match index {
            Some(_) if self.len == 0 => None,
            Some(i) => Some(i.min(self.len - 1)),
            None => None,
        };
    }

    /// Pointer moved over item `index`
    pub fn hover(&mut self, index: usize) -> KeyOutcome {
        if self.phase != Phase::Shown || index >= self.len {
            return KeyOutcome::Ignored;
        }
        self.index = Some(index);
        KeyOutcome::Moved(index)
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        match key {
            NavKey::Escape => KeyOutcome::Dismiss,
            NavKey::Other => KeyOutcome::Ignored,
            _ if self.phase != Phase::Shown || self.len == 0 => KeyOutcome::Ignored,
            NavKey::ArrowDown => {
                let next = match self.index {
                    Some(i) => (i + 1) % self.len,
                    None => 0,
                };
                self.index = Some(next);
                KeyOutcome::Moved(next)
            }
            NavKey::ArrowUp => {
                let prev = match self.index {
                    Some(i) => (i + self.len - 1) % self.len,
                    None => self.len - 1,
                };
                self.index = Some(prev);
                KeyOutcome::Moved(prev)
            }
            NavKey::Enter => match self.index {
                Some(i) if i < self.len => KeyOutcome::Commit(i),
                _ => KeyOutcome::Ignored,
            },
        }
    }
}
