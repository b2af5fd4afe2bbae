//! Order Navigation Controller
//!
//! Owns the navigation state and the in-progress selections. The presentation
//! layer receives a constructed controller and forwards one action per user
//! event. Invalid actions leave the state untouched; the reason is handed back
//! in [`Outcome::Ignored`].

use crate::action::OrderAction;
use crate::config::OrderOptions;
use crate::error::{NavigationError, Result};
use crate::navigation::{BackStack, NavigationState};
use crate::screen::Screen;
use crate::selection::{Flavor, OrderSelection};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// What an action did to the flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The current screen changed
    Navigated { from: Screen, to: Screen },
    /// A choice was recorded, the screen stayed
    Selected,
    /// Nothing changed
    Ignored {
        #[serde(serialize_with = "serialize_reason")]
        reason: NavigationError,
    },
}

fn serialize_reason<S>(
    reason: &NavigationError,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(reason)
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored { .. })
    }
}

/// Drives the Start → Flavor → Pickup → Summary flow
#[derive(Debug, Clone)]
pub struct OrderNavigationController {
    options: OrderOptions,
    state: NavigationState,
    selection: OrderSelection,
}

impl OrderNavigationController {
    pub fn new(options: OrderOptions) -> Self {
        Self {
            options,
            state: NavigationState::default(),
            selection: OrderSelection::default(),
        }
    }

    /// Begin a fresh order: Start screen, empty history, no selections
    pub fn start(&mut self) -> &NavigationState {
        self.state.reset();
        self.selection.clear();
        debug!("order flow started");
        &self.state
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_screen(&self) -> Screen {
        self.state.current
    }

    /// Route name of the current screen
    pub fn route_name(&self) -> &'static str {
        self.state.current.route_name()
    }

    pub fn back_stack(&self) -> &BackStack {
        &self.state.back_stack
    }

    pub fn selection(&self) -> &OrderSelection {
        &self.selection
    }

    pub fn options(&self) -> &OrderOptions {
        &self.options
    }

    pub fn is_back_button_visible(&self) -> bool {
        !self.state.current.is_root()
    }

    /// Whether "Next" would currently advance
    pub fn can_advance(&self) -> bool {
        self.check_next().is_ok()
    }

    /// Why "Next" would be ignored right now, if it would
    pub fn next_blocker(&self) -> Option<NavigationError> {
        self.check_next().err()
    }

    pub fn select_one_cupcake(&mut self) -> Outcome {
        self.apply(OrderAction::SelectQuantity(1))
    }

    pub fn select_quantity(&mut self, quantity: u32) -> Outcome {
        self.apply(OrderAction::SelectQuantity(quantity))
    }

    pub fn select_flavor(&mut self, flavor: Flavor) -> Outcome {
        self.apply(OrderAction::SelectFlavor(flavor))
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Outcome {
        self.apply(OrderAction::SelectDate(date))
    }

    pub fn next(&mut self) -> Outcome {
        self.apply(OrderAction::Next)
    }

    pub fn cancel(&mut self) -> Outcome {
        self.apply(OrderAction::Cancel)
    }

    pub fn navigate_up(&mut self) -> Outcome {
        self.apply(OrderAction::NavigateUp)
    }

    /// Apply one user action
    pub fn apply(&mut self, action: OrderAction) -> Outcome {
        match self.try_apply(action) {
            Ok(outcome) => {
                if let Outcome::Navigated { from, to } = &outcome {
                    debug!(%action, %from, %to, depth = self.state.back_stack.depth(), "navigated");
                } else {
                    debug!(%action, screen = %self.state.current, "selection recorded");
                }
                outcome
            }
            Err(reason) => {
                debug!(%action, screen = %self.state.current, %reason, "action ignored");
                Outcome::Ignored { reason }
            }
        }
    }

    fn try_apply(&mut self, action: OrderAction) -> Result<Outcome> {
        let screen = self.state.current;
        match action {
            OrderAction::SelectQuantity(quantity) => {
                self.require_screen(action, Screen::Start)?;
                if !self.options.quantities.contains(&quantity) {
                    return Err(NavigationError::QuantityNotOffered(quantity));
                }
                let outcome = self.advance(action, Screen::Flavor)?;
                self.selection.quantity = Some(quantity);
                Ok(outcome)
            }
            OrderAction::SelectFlavor(flavor) => {
                self.require_screen(action, Screen::Flavor)?;
                if !self.options.flavors.contains(&flavor) {
                    return Err(NavigationError::FlavorNotOffered(flavor));
                }
                self.selection.flavor = Some(flavor);
                Ok(Outcome::Selected)
            }
            OrderAction::SelectDate(date) => {
                self.require_screen(action, Screen::Pickup)?;
                if !self.options.pickup_dates.contains(&date) {
                    return Err(NavigationError::PickupDateNotOffered(date));
                }
                self.selection.pickup_date = Some(date);
                Ok(Outcome::Selected)
            }
            OrderAction::Next => {
                let to = self.check_next()?;
                self.advance(action, to)
            }
            OrderAction::Cancel => {
                if screen.is_root() {
                    return Err(NavigationError::not_available(action.name(), screen));
                }
                self.state.reset();
                self.selection.clear();
                Ok(Outcome::Navigated {
                    from: screen,
                    to: Screen::Start,
                })
            }
            OrderAction::NavigateUp => {
                if screen.is_root() {
                    return Err(NavigationError::AtRoot);
                }
                self.state.retreat();
                Ok(Outcome::Navigated {
                    from: screen,
                    to: self.state.current,
                })
            }
        }
    }

    /// Target of "Next" from the current screen, if its selection is made
    fn check_next(&self) -> Result<Screen> {
        match self.state.current {
            Screen::Flavor if self.selection.flavor.is_none() => {
                Err(NavigationError::FlavorRequired)
            }
            Screen::Pickup if self.selection.pickup_date.is_none() => {
                Err(NavigationError::PickupDateRequired)
            }
            Screen::Flavor | Screen::Pickup => self
                .state
                .current
                .following()
                .ok_or_else(|| NavigationError::not_available("next", self.state.current)),
            // Start advances through the quantity buttons, Summary is terminal
            screen @ (Screen::Start | Screen::Summary) => {
                Err(NavigationError::not_available("next", screen))
            }
        }
    }

    fn require_screen(&self, action: OrderAction, expected: Screen) -> Result<()> {
        if self.state.current == expected {
            Ok(())
        } else {
            Err(NavigationError::not_available(
                action.name(),
                self.state.current,
            ))
        }
    }

    fn advance(&mut self, action: OrderAction, to: Screen) -> Result<Outcome> {
        let from = self.state.current;
        if !self.state.advance(to) {
            return Err(NavigationError::not_available(action.name(), from));
        }
        Ok(Outcome::Navigated { from, to })
    }
}
