/// Interaction events, targeted at an element by id.
///
/// The renderer translates whatever its input source produces (keystrokes,
/// pointer focus changes) into these and hands them to [`crate::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The input's text was edited. Carries the full new value.
    Change { target: String, value: String },
    /// The input gained focus
    Focus { target: String },
    /// The input lost focus
    Blur { target: String },
}

impl Event {
    pub fn change(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn focus(target: impl Into<String>) -> Self {
        Self::Focus {
            target: target.into(),
        }
    }

    pub fn blur(target: impl Into<String>) -> Self {
        Self::Blur {
            target: target.into(),
        }
    }

    /// Id of the element this event is aimed at.
    pub fn target(&self) -> &str {
        match self {
            Self::Change { target, .. } | Self::Focus { target } | Self::Blur { target } => target,
        }
    }

    /// Short name of the event kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Change { .. } => "change",
            Self::Focus { .. } => "focus",
            Self::Blur { .. } => "blur",
        }
    }
}
