//! Turn output: spoken lines plus at most one deferred side effect.

/// A side effect the caller must perform after delivering the speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Open the front camera.
    CameraOn,
    /// Close the camera.
    CameraOff,
    /// Send the utterance to the language-understanding collaborator and
    /// feed the result back via `Session::apply_interpretation`.
    Extract { utterance: String },
    /// Plan a route over these items and feed the result back via
    /// `Session::install_route` (or `Session::route_failed`).
    ComputeRoute { items: Vec<String> },
}

/// The result of one conversational turn: announcements in speaking
/// order, then an optional side effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    pub speech: Vec<String>,
    pub effect: Option<SideEffect>,
}

impl Turn {
    /// A turn that only speaks.
    pub fn say(line: impl Into<String>) -> Turn {
        Turn {
            speech: vec![line.into()],
            effect: None,
        }
    }

    /// A turn with speech followed by a side effect.
    pub fn say_then(line: impl Into<String>, effect: SideEffect) -> Turn {
        Turn {
            speech: vec![line.into()],
            effect: Some(effect),
        }
    }

    /// A silent turn that only requests a side effect.
    pub fn effect(effect: SideEffect) -> Turn {
        Turn {
            speech: Vec::new(),
            effect: Some(effect),
        }
    }
}
