//! Scripted order runs
//!
//! A script is a comma separated list of steps, e.g.
//! `one-cupcake,flavor:chocolate,next,date:+1,next,cancel`. Each step maps to
//! one [`OrderAction`]; the runner reports the route after every step.

use chrono::{Days, NaiveDate};
use cupcake_order::{Flavor, OrderAction, OrderNavigationController, Outcome, Screen};
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Script parse errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script is empty")]
    Empty,

    #[error("unknown step '{0}'")]
    UnknownStep(String),

    #[error("step '{step}' needs a value, e.g. '{step}:{example}'")]
    MissingValue {
        step: &'static str,
        example: &'static str,
    },

    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),

    #[error("unknown flavor '{0}'")]
    UnknownFlavor(String),

    #[error("invalid date '{0}', expected +<days> or YYYY-MM-DD")]
    InvalidDate(String),
}

/// Pickup date as written in a script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    /// Days after today
    Relative(u64),
    Absolute(NaiveDate),
}

impl DateSpec {
    pub fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateSpec::Relative(days) => today.checked_add_days(Days::new(days)),
            DateSpec::Absolute(date) => Some(date),
        }
    }
}

/// One parsed script step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    Quantity(u32),
    Flavor(Flavor),
    Date(DateSpec),
    Next,
    Cancel,
    Up,
}

impl FromStr for ScriptStep {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, value) = match s.split_once(':') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (s, None),
        };

        match (name.to_ascii_lowercase().as_str(), value) {
            ("one-cupcake", None) => Ok(ScriptStep::Quantity(1)),
            ("next", None) => Ok(ScriptStep::Next),
            ("cancel", None) => Ok(ScriptStep::Cancel),
            ("up" | "back", None) => Ok(ScriptStep::Up),
            ("quantity", Some(v)) => v
                .parse()
                .map(ScriptStep::Quantity)
                .map_err(|_| ScriptError::InvalidQuantity(v.to_string())),
            ("flavor", Some(v)) => Flavor::from_str(v)
                .map(ScriptStep::Flavor)
                .map_err(|_| ScriptError::UnknownFlavor(v.to_string())),
            ("date", Some(v)) => parse_date(v).map(ScriptStep::Date),
            ("quantity", None) => Err(ScriptError::MissingValue {
                step: "quantity",
                example: "6",
            }),
            ("flavor", None) => Err(ScriptError::MissingValue {
                step: "flavor",
                example: "chocolate",
            }),
            ("date", None) => Err(ScriptError::MissingValue {
                step: "date",
                example: "+1",
            }),
            _ => Err(ScriptError::UnknownStep(s.to_string())),
        }
    }
}

fn parse_date(value: &str) -> Result<DateSpec, ScriptError> {
    if let Some(days) = value.strip_prefix('+') {
        return days
            .parse()
            .map(DateSpec::Relative)
            .map_err(|_| ScriptError::InvalidDate(value.to_string()));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(DateSpec::Absolute)
        .map_err(|_| ScriptError::InvalidDate(value.to_string()))
}

impl ScriptStep {
    /// Turn the step into a controller action for an order started on `today`
    pub fn to_action(self, today: NaiveDate) -> Result<OrderAction, ScriptError> {
        Ok(match self {
            ScriptStep::Quantity(n) => OrderAction::SelectQuantity(n),
            ScriptStep::Flavor(flavor) => OrderAction::SelectFlavor(flavor),
            ScriptStep::Date(date_spec) => OrderAction::SelectDate(
                date_spec.resolve(today)
                    .ok_or_else(|| ScriptError::InvalidDate(format!("{date_spec:?}")))?,
            ),
            ScriptStep::Next => OrderAction::Next,
            ScriptStep::Cancel => OrderAction::Cancel,
            ScriptStep::Up => OrderAction::NavigateUp,
        })
    }
}

/// Parse a whole script into actions
///
/// Fails on the first malformed step, before anything runs.
pub fn parse_script(script: &str, today: NaiveDate) -> Result<Vec<OrderAction>, ScriptError> {
    let steps: Vec<&str> = script
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if steps.is_empty() {
        return Err(ScriptError::Empty);
    }

    steps
        .into_iter()
        .map(|s| ScriptStep::from_str(s)?.to_action(today))
        .collect()
}

/// Result of one step
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub action: OrderAction,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub route: Screen,
    pub back_stack: Vec<Screen>,
    pub back_button_visible: bool,
}

impl StepReport {
    /// One line of human-readable output
    pub fn describe(&self) -> String {
        let stack: Vec<&str> = self.back_stack.iter().map(|s| s.route_name()).collect();
        let status = match &self.outcome {
            Outcome::Navigated { from, to } => format!("{from} -> {to}"),
            Outcome::Selected => "selected".to_string(),
            Outcome::Ignored { reason } => format!("ignored ({reason})"),
        };
        format!(
            "{:>2}. {:<20} {:<40} route={} stack=[{}]",
            self.step,
            self.action.to_string(),
            status,
            self.route,
            stack.join(", ")
        )
    }
}

/// Drive the controller through `actions`, one report per action
pub fn run_actions(
    controller: &mut OrderNavigationController,
    actions: &[OrderAction],
) -> Vec<StepReport> {
    let reports: Vec<StepReport> = actions
        .iter()
        .enumerate()
        .map(|(i, &action)| {
            let outcome = controller.apply(action);
            StepReport {
                step: i + 1,
                action,
                outcome,
                route: controller.current_screen(),
                back_stack: controller.back_stack().as_slice().to_vec(),
                back_button_visible: controller.is_back_button_visible(),
            }
        })
        .collect();

    info!(
        steps = reports.len(),
        route = controller.route_name(),
        "script finished"
    );
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupcake_order::{NavigationError, OrderOptions};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!("one-cupcake".parse(), Ok(ScriptStep::Quantity(1)));
        assert_eq!(" quantity:12 ".parse(), Ok(ScriptStep::Quantity(12)));
        assert_eq!(
            "flavor:Red-Velvet".parse(),
            Ok(ScriptStep::Flavor(Flavor::RedVelvet))
        );
        assert_eq!(
            "date:+2".parse(),
            Ok(ScriptStep::Date(DateSpec::Relative(2)))
        );
        assert_eq!("BACK".parse(), Ok(ScriptStep::Up));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "dance".parse::<ScriptStep>(),
            Err(ScriptError::UnknownStep("dance".to_string()))
        );
        assert!(matches!(
            "flavor".parse::<ScriptStep>(),
            Err(ScriptError::MissingValue { step: "flavor", .. })
        ));
        assert_eq!(
            "date:soon".parse::<ScriptStep>(),
            Err(ScriptError::InvalidDate("soon".to_string()))
        );
        assert_eq!(parse_script(" , ", today()), Err(ScriptError::Empty));
    }

    #[test]
    fn test_parse_script_resolves_dates() {
        let actions = parse_script("one-cupcake,date:+1,date:2026-10-21", today()).unwrap();
        assert_eq!(
            actions,
            vec![
                OrderAction::SelectQuantity(1),
                OrderAction::SelectDate(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()),
                OrderAction::SelectDate(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()),
            ]
        );
    }

    #[test]
    fn test_run_actions_reports_each_step() {
        let mut controller = OrderNavigationController::new(OrderOptions::starting(today()));
        let actions =
            parse_script("one-cupcake,next,flavor:chocolate,next,cancel", today()).unwrap();

        let reports = run_actions(&mut controller, &actions);
        let routes: Vec<Screen> = reports.iter().map(|r| r.route).collect();
        assert_eq!(
            routes,
            vec![
                Screen::Flavor,
                Screen::Flavor,
                Screen::Flavor,
                Screen::Pickup,
                Screen::Start
            ]
        );
        assert!(matches!(
            reports[1].outcome,
            Outcome::Ignored {
                reason: NavigationError::FlavorRequired
            }
        ));
        assert_eq!(reports[3].back_stack, vec![Screen::Start, Screen::Flavor]);
        assert!(!reports[4].back_button_visible);
        assert!(reports[3].describe().contains("Flavor -> Pickup"));
    }

    #[test]
    fn test_report_json_shape() {
        let mut controller = OrderNavigationController::new(OrderOptions::starting(today()));
        let reports = run_actions(&mut controller, &[OrderAction::Cancel]);
        let json = serde_json::to_value(&reports[0]).unwrap();
        assert_eq!(json["outcome"], "ignored");
        assert_eq!(json["route"], "Start");
        assert_eq!(json["action"]["action"], "cancel");
    }
}
