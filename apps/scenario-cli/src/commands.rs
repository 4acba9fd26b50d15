//! Argument parsing and command execution.
//!
//! Every command runs through a [`ScenarioStateHelper`] and yields a JSON
//! value for the caller to print.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scenario_state::{
    InvestigatorResolutionStatus, ListChoices, ScenarioStateActions, ScenarioStateHelper,
    ScenarioStateSource, INVESTIGATOR_STATUS_ID, ORDERED_INVESTIGATOR_STATUS,
};
use serde_json::{json, Map, Value};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "scenario")]
#[command(about = "Inspect and record guided scenario progress")]
pub struct Args {
    /// Scenario state file (falls back to SCENARIO_STATE_FILE)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Scenario identifier used to scope derived step ids
    #[arg(short, long, global = true, default_value = "scenario")]
    pub scenario: String,

    /// Number of players in this attempt
    #[arg(
        short,
        long,
        global = true,
        default_value = "1",
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    pub players: u8,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show every input recorded for a step
    Inspect { step: String },
    /// Show player count, lead investigator and resolution statuses
    Summary,
    /// Record a yes/no answer
    SetDecision {
        step: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Record a numeric answer
    SetCount {
        step: String,
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Record a single-selection answer
    SetChoice {
        step: String,
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Record an investigator's resolution status by its table index
    SetStatus {
        code: String,
        #[arg(value_name = "INDEX", value_parser = parse_status_index)]
        status: InvestigatorResolutionStatus,
    },
    /// Clear all recorded input for the scenario
    Reset,
}

/// Accept only indices that exist in the ordered status table.
fn parse_status_index(raw: &str) -> Result<InvestigatorResolutionStatus, String> {
    let index: i32 = raw
        .parse()
        .map_err(|_| format!("status index must be a number, got {raw:?}"))?;
    InvestigatorResolutionStatus::from_index(index).ok_or_else(|| {
        format!(
            "status index {index} is outside 0..{}",
            ORDERED_INVESTIGATOR_STATUS.len()
        )
    })
}

pub fn run<S, A>(command: &Command, helper: &ScenarioStateHelper<S, A>) -> Result<Value, CliError>
where
    S: ScenarioStateSource,
    A: ScenarioStateActions,
{
    match command {
        Command::Inspect { step } => Ok(inspect(helper, step)),
        Command::Summary => summary(helper),
        Command::SetDecision { step, value } => {
            helper.set_decision(step, *value)?;
            Ok(inspect(helper, step))
        }
        Command::SetCount { step, value } => {
            helper.set_count(step, *value)?;
            Ok(inspect(helper, step))
        }
        Command::SetChoice { step, value } => {
            helper.set_choice(step, *value)?;
            Ok(inspect(helper, step))
        }
        Command::SetStatus { code, status } => {
            let mut statuses: ListChoices =
                helper.choice_list(INVESTIGATOR_STATUS_ID).unwrap_or_default();
            statuses.insert(code.clone(), vec![status.index()]);
            helper.set_choice_list(INVESTIGATOR_STATUS_ID, statuses)?;
            summary(helper)
        }
        Command::Reset => {
            helper.reset_scenario()?;
            summary(helper)
        }
    }
}

fn inspect<S, A>(helper: &ScenarioStateHelper<S, A>, step: &str) -> Value
where
    S: ScenarioStateSource,
    A: ScenarioStateActions,
{
    let mut out = Map::new();
    out.insert("step".into(), json!(step));
    out.insert("kinds".into(), json!(helper.step_input_kinds(step)));
    if let Some(v) = helper.decision(step) {
        out.insert("decision".into(), json!(v));
    }
    if let Some(v) = helper.count(step) {
        out.insert("count".into(), json!(v));
    }
    if let Some(v) = helper.choice(step) {
        out.insert("choice".into(), json!(v));
    }
    if let Some(v) = helper.choice_list(step) {
        out.insert("choiceList".into(), json!(v));
    }
    if let Some(v) = helper.supplies(step) {
        out.insert("supplies".into(), json!(v));
    }
    Value::Object(out)
}

fn summary<S, A>(helper: &ScenarioStateHelper<S, A>) -> Result<Value, CliError>
where
    S: ScenarioStateSource,
    A: ScenarioStateActions,
{
    let statuses = helper.investigator_resolution_status()?;
    Ok(json!({
        "scenarioId": helper.scenario_id(),
        "playerCount": helper.player_count(),
        "leadInvestigator": helper.lead_investigator_choice(),
        "investigatorStatus": statuses,
    }))
}
