//! The dialogue session state machine.
//!
//! A [`Session`] is sans-IO: [`Session::handle_command`] consumes one
//! recognized utterance and returns a [`Turn`] whose optional
//! [`SideEffect`] the caller performs (camera toggle, language
//! extraction, route planning). Results of the deferred effects are fed
//! back through [`Session::apply_interpretation`],
//! [`Session::install_route`] and their failure counterparts, each of
//! which also returns a [`Turn`] to speak.

use serde::{Deserialize, Serialize};

use storeguide_core::Route;

use crate::command::{self, Command, ConfirmationReply};
use crate::interpret::Interpretation;
use crate::speech;
use crate::stepper;
use crate::turn::{SideEffect, Turn};

/// Where the dialogue currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Collecting products; nothing confirmed yet.
    #[default]
    Gathering,
    /// A product list was read back; awaiting yes / add / remove.
    Confirming,
    /// A route exists but navigation has not started.
    RouteReady,
    /// Walking the route stop by stop.
    Navigating,
}

/// One shopper's dialogue state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    phase: SessionPhase,
    products: Vec<String>,
    route: Option<Route>,
    /// Index of the next stop to announce. `None` until navigation
    /// starts.
    cursor: Option<usize>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Handles one recognized utterance.
    ///
    /// Camera control and the closing thank-you always win. While a
    /// confirmation is pending the reply is interpreted against the
    /// pending list; otherwise the lexical commands apply and anything
    /// unclassified is deferred to the extraction collaborator.
    pub fn handle_command(&mut self, utterance: &str) -> Turn {
        let text = utterance.trim().to_lowercase();

        match command::classify(&text) {
            Command::CameraOn => Turn::say_then("Opening front camera.", SideEffect::CameraOn),
            Command::CameraOff => Turn::say_then("Turning off camera.", SideEffect::CameraOff),
            Command::ThankYou => {
                self.reset();
                Turn::say("You are welcome! Have a great day and come back soon!")
            }
            // An explicit route request bypasses the pending confirmation.
            Command::CalculateRoute => self.calculate_route(),
            _ if self.phase == SessionPhase::Confirming => self.handle_confirmation(&text),
            Command::Repeat => self.handle_repeat(),
            Command::NextZone => self.handle_next_zone(),
            Command::StartNavigation => self.start_navigation(),
            Command::FreeText => Turn::effect(SideEffect::Extract { utterance: text }),
        }
    }

    /// Applies a reply given while the product list awaits confirmation.
    fn handle_confirmation(&mut self, text: &str) -> Turn {
        match command::classify_confirmation(text) {
            ConfirmationReply::Affirm => self.calculate_route(),
            ConfirmationReply::ClearAll => {
                self.products.clear();
                self.phase = SessionPhase::Gathering;
                Turn::say("Okay, clearing the list. What products do you need?")
            }
            ConfirmationReply::Remove => self.remove_products(text),
            // A short unclassifiable reply is noise; re-prompt instead of
            // burning an extraction call on it.
            ConfirmationReply::Other if text.len() <= 3 => Turn::say(
                "I did not understand. Please say yes to confirm, or tell \
                 me what products to add or remove.",
            ),
            ConfirmationReply::Add | ConfirmationReply::Other => {
                Turn::effect(SideEffect::Extract {
                    utterance: text.to_string(),
                })
            }
        }
    }

    /// Removes every listed product whose name occurs in the utterance.
    fn remove_products(&mut self, text: &str) -> Turn {
        let removed: Vec<String> = self
            .products
            .iter()
            .filter(|p| text.contains(p.to_lowercase().as_str()))
            .cloned()
            .collect();

        if removed.is_empty() {
            return Turn::say(
                "I could not identify which product to remove. Please say \
                 the product name clearly, or say remove all to clear the list.",
            );
        }

        self.products.retain(|p| !removed.contains(p));

        if self.products.is_empty() {
            self.phase = SessionPhase::Gathering;
            return Turn::say("List is now empty. What products do you need?");
        }

        Turn {
            speech: vec![
                format!("Removed {}.", speech::join_natural(&removed)),
                speech::confirmation_prompt(&self.products),
            ],
            effect: None,
        }
    }

    /// Re-announces the route summary. Idempotent: neither the phase nor
    /// the navigation cursor moves.
    fn handle_repeat(&mut self) -> Turn {
        match &self.route {
            Some(route) => Turn::say(speech::route_summary(route)),
            None => Turn::say(
                "There is nothing to repeat yet. Tell me what products you need.",
            ),
        }
    }

    fn handle_next_zone(&mut self) -> Turn {
        let route = match &self.route {
            Some(route) => route,
            None => {
                return Turn::say(
                    "No route available. Please confirm your shopping list \
                     to generate a route first.",
                );
            }
        };

        let cursor = self.cursor.unwrap_or(0);
        let (instruction, advanced) = stepper::next_instruction(route, cursor);
        self.cursor = Some(advanced);
        self.phase = SessionPhase::Navigating;
        Turn::say(instruction)
    }

    fn start_navigation(&mut self) -> Turn {
        let route = match &self.route {
            Some(route) => route,
            None => {
                return Turn::say(
                    "No route has been generated yet. Please confirm your \
                     shopping list first.",
                );
            }
        };

        let (instruction, advanced) = stepper::next_instruction(route, 0);
        self.cursor = Some(advanced);
        self.phase = SessionPhase::Navigating;
        Turn {
            speech: vec!["Starting navigation.".to_string(), instruction],
            effect: None,
        }
    }

    fn calculate_route(&mut self) -> Turn {
        if self.products.is_empty() {
            return Turn::say(
                "You have no products in your list yet. Please add some \
                 products first.",
            );
        }
        // Phase is left as-is: if planning fails the session is still in
        // a state where the user can retry or amend the list.
        Turn::say_then(
            "Calculating your route now.",
            SideEffect::ComputeRoute {
                items: self.products.clone(),
            },
        )
    }

    /// Feeds back the extraction collaborator's result for `utterance`.
    ///
    /// Extracted products extend the current list when the session
    /// already holds products or the utterance carries an addition cue
    /// ("also", "add", "y", ...); a fresh list replaces an empty one.
    /// Any non-empty extraction moves the session to the confirmation
    /// phase.
    pub fn apply_interpretation(
        &mut self,
        utterance: &str,
        interpretation: &Interpretation,
    ) -> Turn {
        let text = utterance.trim().to_lowercase();

        if interpretation.products.is_empty() {
            if interpretation.response.is_empty() {
                return self.extraction_failed();
            }
            return Turn::say(interpretation.response.clone());
        }

        if !self.products.is_empty() || command::has_addition_cue(&text) {
            for product in &interpretation.products {
                let lowered = product.to_lowercase();
                if !self.products.iter().any(|p| p.to_lowercase() == lowered) {
                    self.products.push(product.clone());
                }
            }
        } else {
            self.products = interpretation.products.clone();
        }

        self.phase = SessionPhase::Confirming;

        let mut speech = Vec::new();
        if !interpretation.response.is_empty() {
            speech.push(interpretation.response.clone());
        }
        speech.push(speech::confirmation_prompt(&self.products));
        Turn {
            speech,
            effect: None,
        }
    }

    /// Spoken fallback when the extraction collaborator fails outright.
    pub fn extraction_failed(&mut self) -> Turn {
        Turn::say("Sorry, I had trouble understanding that. Could you please repeat?")
    }

    /// Installs a freshly planned route and announces it.
    pub fn install_route(&mut self, route: Route) -> Turn {
        let summary = speech::route_summary(&route);
        self.route = Some(route);
        self.cursor = None;
        self.phase = SessionPhase::RouteReady;
        Turn::say(summary)
    }

    /// Spoken fallback when route planning fails. The phase is
    /// unchanged, so the pending list stays amendable.
    pub fn route_failed(&mut self) -> Turn {
        Turn::say("Error generating route. Please try again.")
    }

    /// Returns the session to its initial state.
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Gathering;
        self.products.clear();
        self.route = None;
        self.cursor = None;
    }
}
