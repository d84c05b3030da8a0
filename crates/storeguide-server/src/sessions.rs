//! Per-conversation session entries and the turn side-effect loop.
//!
//! The session state machine is sans-IO; [`run_turn`] is the driver that
//! performs whatever side effect a turn requests (product extraction,
//! route planning, camera toggles) and feeds the result back, collecting
//! all spoken lines into one [`TurnOutcome`].

use storeguide_plan::plan_route;
use storeguide_session::{command, ChatTurn, Command, Session, SideEffect};

use crate::assistant;
use crate::order_hint;
use crate::state::AppState;

/// One conversation's state: the session machine plus the chat history
/// forwarded to the language-understanding collaborator.
#[derive(Debug, Default)]
pub struct SessionEntry {
    pub session: Session,
    pub history: Vec<ChatTurn>,
}

/// Everything the client needs to render one turn.
#[derive(Debug, Default)]
pub struct TurnOutcome {
    pub speech: Vec<String>,
    /// `Some(true)` to open the camera, `Some(false)` to close it.
    pub camera: Option<bool>,
}

/// Runs one conversational turn, performing any deferred side effect.
pub async fn run_turn(state: &AppState, entry: &mut SessionEntry, text: &str) -> TurnOutcome {
    let turn = entry.session.handle_command(text);
    let mut outcome = TurnOutcome {
        speech: turn.speech,
        camera: None,
    };

    match turn.effect {
        None => {}
        Some(SideEffect::CameraOn) => outcome.camera = Some(true),
        Some(SideEffect::CameraOff) => outcome.camera = Some(false),
        Some(SideEffect::Extract { utterance }) => {
            let followup = match interpret(state, entry, &utterance).await {
                Some(interpretation) => {
                    entry.session.apply_interpretation(&utterance, &interpretation)
                }
                None => entry.session.extraction_failed(),
            };
            outcome.speech.extend(followup.speech);
        }
        Some(SideEffect::ComputeRoute { items }) => {
            let hint = match &state.llm {
                Some(llm) => {
                    let zones = order_hint::requested_zones(&state.catalog, &items);
                    order_hint::fetch_order_hint(llm, &state.graph, &zones).await
                }
                None => None,
            };
            let followup = match plan_route(&state.graph, &state.catalog, &items, hint.as_deref())
            {
                Ok(route) => entry.session.install_route(route),
                Err(err) => {
                    tracing::warn!("route planning failed: {}", err);
                    entry.session.route_failed()
                }
            };
            outcome.speech.extend(followup.speech);
        }
    }

    // The closing thank-you resets the session; the conversation
    // history resets with it, so nothing is appended either.
    if matches!(
        command::classify(&text.trim().to_lowercase()),
        Command::ThankYou
    ) {
        entry.history.clear();
        return outcome;
    }

    entry.history.push(ChatTurn {
        role: "user".to_string(),
        content: text.to_string(),
    });
    entry.history.push(ChatTurn {
        role: "assistant".to_string(),
        content: outcome.speech.join(" "),
    });

    outcome
}

/// Interprets an utterance via the provider, or the offline keyword
/// extractor when none is configured. `None` means the provider failed.
async fn interpret(
    state: &AppState,
    entry: &SessionEntry,
    utterance: &str,
) -> Option<storeguide_session::Interpretation> {
    match &state.llm {
        Some(llm) => {
            match assistant::interpret(llm, utterance, &entry.history, entry.session.products())
                .await
            {
                Ok(interpretation) => Some(interpretation),
                Err(err) => {
                    tracing::warn!("extraction failed: {}", err);
                    None
                }
            }
        }
        None => Some(storeguide_session::interpret::offline(
            &state.catalog,
            utterance,
        )),
    }
}
