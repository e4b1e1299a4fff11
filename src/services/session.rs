//! Trip session
//!
//! Owns the mutable state of one planning session (trip context, ledger
//! and plan table) and hands read-only snapshots to the reconciliation and
//! comparison services. Mutations are expected from a single caller at a
//! time.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{TripError, TripResult};
use crate::models::{
    CanonicalCategory, ExpenseId, ExpenseInput, Money, PlanInput, TripContext, TripRecord,
};
use crate::reference::ReferenceStore;
use crate::services::comparison::{ComparisonService, DestinationComparison};
use crate::services::ledger::ExpenseLedger;
use crate::services::plan::BudgetPlanTable;
use crate::services::reconciliation::{BudgetOverview, ReconciliationService};

/// Session description as read from a JSON or YAML file
///
/// Plan and expense rows keep their raw form values and go through the
/// same validation as interactive input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub trip: TripContext,
    #[serde(default)]
    pub plan: Vec<PlanInput>,
    #[serde(default)]
    pub expenses: Vec<ExpenseInput>,
    /// Past trips kept for the history view
    #[serde(default)]
    pub history: Vec<TripRecord>,
}

impl SessionFile {
    /// Read a session file; `.yaml`/`.yml` are read as YAML, anything else as JSON
    pub fn load(path: &Path) -> TripResult<Self> {
        if !path.exists() {
            return Err(TripError::session_not_found(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TripError::Io(format!("Failed to read session {}: {}", path.display(), e))
        })?;

        let file = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
            _ => serde_json::from_str(&contents)?,
        };
        tracing::debug!(path = %path.display(), "session file loaded");
        Ok(file)
    }
}

/// Outcome of replaying a session file
#[derive(Debug, Clone)]
pub struct SessionLoad {
    pub session: TripSession,
    pub rejected_plan_rows: usize,
    pub rejected_expenses: usize,
}

/// One traveler's planning session
#[derive(Debug, Clone, Default)]
pub struct TripSession {
    pub trip: TripContext,
    ledger: ExpenseLedger,
    plan: BudgetPlanTable,
}

impl TripSession {
    pub fn new(trip: TripContext) -> Self {
        Self {
            trip,
            ledger: ExpenseLedger::new(),
            plan: BudgetPlanTable::new(),
        }
    }

    /// Create a session whose expense edits may move records between days
    pub fn with_date_edits(trip: TripContext, allow_date_edits: bool) -> Self {
        Self {
            trip,
            ledger: ExpenseLedger::with_date_edits(allow_date_edits),
            plan: BudgetPlanTable::new(),
        }
    }

    /// Replay a session file through the normal add/upsert paths
    ///
    /// Invalid rows are skipped and counted. Invalid trip parameters reject
    /// the whole file.
    pub fn from_file(file: SessionFile, allow_date_edits: bool) -> TripResult<SessionLoad> {
        file.trip
            .validate()
            .map_err(|e| TripError::Validation(e.to_string()))?;
        let mut session = Self::with_date_edits(file.trip, allow_date_edits);

        let rejected_plan_rows = file
            .plan
            .iter()
            .filter(|row| !session.upsert_plan(&row.category, &row.amount))
            .count();
        let rejected_expenses = file
            .expenses
            .iter()
            .filter(|input| session.add_expense(input).is_none())
            .count();

        Ok(SessionLoad {
            session,
            rejected_plan_rows,
            rejected_expenses,
        })
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn plan(&self) -> &BudgetPlanTable {
        &self.plan
    }

    /// Change the total budget; a negative amount is refused
    pub fn set_total_budget(&mut self, amount: Money) -> bool {
        if amount.is_negative() {
            return false;
        }
        self.trip.total_budget = amount;
        true
    }

    pub fn set_destination(&mut self, key: Option<String>) {
        self.trip.destination = key;
    }

    pub fn add_expense(&mut self, input: &ExpenseInput) -> Option<ExpenseId> {
        self.ledger.add(input)
    }

    pub fn edit_expense(&mut self, id: ExpenseId, input: &ExpenseInput) -> bool {
        self.ledger.edit(id, input)
    }

    pub fn remove_expense(&mut self, id: ExpenseId) -> bool {
        self.ledger.remove(id).is_some()
    }

    pub fn upsert_plan(&mut self, category: &str, amount: &str) -> bool {
        self.plan.upsert_input(category, amount)
    }

    pub fn remove_plan(&mut self, category: CanonicalCategory) -> bool {
        self.plan.remove(category).is_some()
    }

    /// Reconcile against the session's destination, if the store knows it
    pub fn reconcile(&self, store: &ReferenceStore) -> BudgetOverview {
        let destination = self
            .trip
            .destination
            .as_deref()
            .and_then(|key| store.get(key));
        ReconciliationService::new(&self.ledger, &self.plan, destination, &self.trip).overview()
    }

    /// Compare the session's destination with another one
    ///
    /// `None` when either key is unknown or the session has no destination.
    pub fn compare_destination(
        &self,
        store: &ReferenceStore,
        service: &ComparisonService,
        other: &str,
    ) -> Option<DestinationComparison> {
        let mine = store.get(self.trip.destination.as_deref()?)?;
        let theirs = store.get(other)?;
        Some(service.compare(mine, theirs))
    }
}
