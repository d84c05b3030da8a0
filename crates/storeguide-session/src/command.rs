//! Command classification for recognized utterances.
//!
//! One classification function with explicit priority ordering: camera
//! control first, then the
//! closing "thank you", then the lexical commands, and finally the
//! free-text fallback that goes to the language-understanding
//! collaborator. The confirmation-context replies are classified
//! separately ([`ConfirmationReply`]) because they only apply while a
//! confirmation is pending. Phrases are matched in English and Spanish,
//! as recognized speech arrives in either.

/// A classified control command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CameraOn,
    CameraOff,
    ThankYou,
    Repeat,
    NextZone,
    StartNavigation,
    CalculateRoute,
    /// Unclassified text, forwarded to the extraction collaborator.
    FreeText,
}

const CAMERA_ON: &[&str] = &[
    "prender cámara",
    "encender cámara",
    "abrir cámara",
    "turn on camera",
    "open camera",
    "camera on",
];

const CAMERA_OFF: &[&str] = &[
    "apagar cámara",
    "cerrar cámara",
    "turn off camera",
    "close camera",
    "camera off",
    "turnoff",
    "turn of",
    "stop camera",
    "off camera",
];

const THANK_YOU: &[&str] = &["thank you", "thanks", "gracias"];

const NEXT_ZONE: &[&str] = &["next zone", "next", "siguiente zona", "siguiente"];

const START_NAVIGATION: &[&str] = &[
    "start navigation",
    "begin",
    "comenzar navegación",
    "empezar",
];

const CALCULATE_ROUTE: &[&str] = &[
    "calculate route",
    "generate route",
    "calcular ruta",
    "generar ruta",
];

fn matches_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

/// True if the text contains `word` as a whole word. Used for short
/// tokens ("yes", "no", "ok") where plain substring matching would
/// misfire inside longer words.
pub fn has_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}

/// Classifies an already-lowercased utterance into a [`Command`].
///
/// Priority: camera > thank-you > repeat > next-zone > start-navigation >
/// calculate-route > free text. The session applies confirmation-context
/// interpretation between thank-you and repeat while a confirmation is
/// pending, except for an explicit route request, which always wins.
pub fn classify(text: &str) -> Command {
    if matches_any(text, CAMERA_ON) {
        return Command::CameraOn;
    }
    // Off-phrases after on-phrases: "turn off camera" must not hit
    // "camera on"-style fragments, so off-list is checked on its own.
    if matches_any(text, CAMERA_OFF) {
        return Command::CameraOff;
    }
    if matches_any(text, THANK_YOU) {
        return Command::ThankYou;
    }
    if text.contains("repeat") {
        return Command::Repeat;
    }
    if matches_any(text, NEXT_ZONE) {
        return Command::NextZone;
    }
    if matches_any(text, START_NAVIGATION) {
        return Command::StartNavigation;
    }
    if matches_any(text, CALCULATE_ROUTE) {
        return Command::CalculateRoute;
    }
    Command::FreeText
}

/// A classified reply while a confirmation is pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationReply {
    /// Confirm the list and compute the route.
    Affirm,
    /// Discard the whole list and start over.
    ClearAll,
    /// Remove specific products.
    Remove,
    /// Add more products (forward to extraction).
    Add,
    /// Anything else.
    Other,
}

const AFFIRM_WORDS: &[&str] = &["yes", "si", "ok", "okay"];
const AFFIRM_PHRASES: &[&str] = &["correct", "correcto", "confirm"];

const CLEAR_PHRASES: &[&str] = &[
    "remove all",
    "remove everything",
    "remove the list",
    "delete all",
    "delete everything",
    "delete the list",
    "clear all",
    "clear list",
    "restart",
    "start over",
    "empezar de nuevo",
    "limpiar lista",
];

const REMOVE_PHRASES: &[&str] = &["remove", "delete", "eliminar", "quitar"];

const ADD_WORDS: &[&str] = &["and", "more", "y"];
const ADD_PHRASES: &[&str] = &["add", "also", "agregar", "también", "además"];

/// Classifies an already-lowercased reply given while the session awaits
/// confirmation of the product list.
pub fn classify_confirmation(text: &str) -> ConfirmationReply {
    if AFFIRM_WORDS.iter().any(|w| has_word(text, w)) || matches_any(text, AFFIRM_PHRASES) {
        return ConfirmationReply::Affirm;
    }
    if has_word(text, "no") || matches_any(text, CLEAR_PHRASES) {
        return ConfirmationReply::ClearAll;
    }
    if matches_any(text, REMOVE_PHRASES) {
        return ConfirmationReply::Remove;
    }
    if ADD_WORDS.iter().any(|w| has_word(text, w)) || matches_any(text, ADD_PHRASES) {
        return ConfirmationReply::Add;
    }
    ConfirmationReply::Other
}

/// True if the utterance carries a cue that new products extend the
/// existing list rather than replacing it.
pub fn has_addition_cue(text: &str) -> bool {
    ADD_WORDS.iter().any(|w| has_word(text, w)) || matches_any(text, ADD_PHRASES)
}
