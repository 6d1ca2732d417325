//! SchemeRules - derived state and transition gating for evil schemes
//!
//! Success likelihood is a weighted score: a base of 50, bonuses for
//! specialty-matched minions and working equipment, penalties for budget
//! overruns, thin crews, and missed deadlines, clamped to 0-100. Status
//! changes go through `can_transition`, which collects every failed
//! precondition instead of stopping at the first; the automatic sweep in
//! `apply_auto_transitions` resolves overdue active schemes on its own.

use std::rc::Rc;

use tracing::{debug, info};

use crate::config::RuleConfig;
use crate::domain::entities::{EvilScheme, Minion};
use crate::domain::ports::{Clock, Repository};
use crate::domain::services::SharedStore;
use crate::domain::value_objects::{BudgetStatus, DeadlineStatus, SchemeId, SchemeStatus};
use crate::error::{DomainResult, EntityKind, RuleViolation};

const BASE_SUCCESS_SCORE: i32 = 50;
const MATCHING_MINION_BONUS: i32 = 10;
const WORKING_EQUIPMENT_BONUS: i32 = 5;
const OVER_BUDGET_PENALTY: i32 = 20;
const THIN_CREW_PENALTY: i32 = 15;
const MISSED_DEADLINE_PENALTY: i32 = 25;

/// Crew below this size (or without a specialty match) is penalized
const FULL_STRENGTH_CREW: usize = 2;

/// Spending past this fraction of budget counts as approaching the limit
const APPROACHING_BUDGET_FRACTION: f64 = 0.9;

const DAYS_PER_MONTH: f64 = 30.0;

/// Ratings at or above this tier need a serious operation
const MODERATE_RATING: u8 = 5;

/// Budget health plus whether new assignments may proceed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetReport {
    pub status: BudgetStatus,
    pub allow_new_assignments: bool,
}

/// Projected cost of assigning one more minion
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingEstimate {
    /// Salary times the months left until the deadline
    pub added_amount: f64,
    pub new_total: f64,
    pub would_exceed_budget: bool,
}

/// Outcome of a status-transition validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionCheck {
    pub allowed: bool,
    /// Every failed precondition, not just the first
    pub errors: Vec<String>,
}

/// Minimum resources a scheme of a given diabolical rating needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRequirements {
    pub min_minions: u32,
    pub min_equipment: u32,
    pub requires_doomsday_device: bool,
}

/// Outcome of a resource-sufficiency validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCheck {
    pub met: bool,
    pub warnings: Vec<String>,
}

/// Outcome of a specialty-coverage validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialtyCheck {
    pub has_required_specialty: bool,
    pub matching_count: usize,
    pub warnings: Vec<String>,
}

/// Outcome of a budget-value validation at scheme creation/edit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetValuesCheck {
    pub valid: bool,
    pub warnings: Vec<String>,
}

/// Rule component for evil schemes
pub struct SchemeRules {
    store: SharedStore,
    repo: Rc<dyn Repository>,
    clock: Rc<dyn Clock>,
    config: RuleConfig,
}

impl SchemeRules {
    pub fn new(
        store: SharedStore,
        repo: Rc<dyn Repository>,
        clock: Rc<dyn Clock>,
        config: RuleConfig,
    ) -> Self {
        Self {
            store,
            repo,
            clock,
            config,
        }
    }

    /// Score a scheme's viability without persisting the result
    pub fn calculate_success_likelihood(&self, id: SchemeId) -> DomainResult<i32> {
        let scheme = self.scheme(id)?;
        let (total_minions, matching_minions) = self.crew_counts(&scheme)?;

        let working_equipment = self
            .repo
            .get_all_equipment()?
            .into_iter()
            .filter(|e| {
                e.is_assigned_to(scheme.id)
                    && e.condition >= self.config.equipment.min_operational_condition
            })
            .count();

        let mut score = BASE_SUCCESS_SCORE;
        score += matching_minions as i32 * MATCHING_MINION_BONUS;
        score += working_equipment as i32 * WORKING_EQUIPMENT_BONUS;

        if scheme.is_over_budget() {
            score -= OVER_BUDGET_PENALTY;
        }
        if !(total_minions >= FULL_STRENGTH_CREW && matching_minions >= 1) {
            score -= THIN_CREW_PENALTY;
        }
        if self.clock.now() > scheme.target_completion_date {
            score -= MISSED_DEADLINE_PENALTY;
        }

        let score = score.clamp(0, 100);
        debug!(scheme = %scheme.name, score, "success likelihood computed");
        Ok(score)
    }

    /// Recompute the success likelihood and persist it on the scheme
    pub fn update_success_likelihood(&self, id: SchemeId) -> DomainResult<i32> {
        let score = self.calculate_success_likelihood(id)?;
        let mut scheme = self.scheme(id)?;
        scheme.success_likelihood = score;
        self.persist(scheme)?;
        Ok(score)
    }

    pub fn is_over_budget(&self, id: SchemeId) -> DomainResult<bool> {
        Ok(self.scheme(id)?.is_over_budget())
    }

    pub fn remaining_budget(&self, id: SchemeId) -> DomainResult<f64> {
        Ok(self.scheme(id)?.remaining_budget())
    }

    pub fn can_afford(&self, id: SchemeId, amount: f64) -> DomainResult<bool> {
        Ok(self.scheme(id)?.remaining_budget() >= amount)
    }

    /// Classify budget health and update the assignment gate
    ///
    /// Exactly 90% of budget is still within budget; so is spending that
    /// exactly equals the budget. The allow flag is written onto the
    /// cached scheme but not persisted by this call.
    pub fn validate_budget_status(&self, id: SchemeId) -> DomainResult<BudgetReport> {
        let scheme = self.scheme(id)?;

        let status = if scheme.current_spending > scheme.budget {
            BudgetStatus::Over
        } else if scheme.current_spending > scheme.budget * APPROACHING_BUDGET_FRACTION
            && scheme.current_spending < scheme.budget
        {
            BudgetStatus::Approaching
        } else {
            BudgetStatus::Within
        };

        let allow_new_assignments = !status.is_over();
        if let Some(cached) = self.store.borrow_mut().scheme_mut(id) {
            cached.allow_new_assignments = allow_new_assignments;
        }

        Ok(BudgetReport {
            status,
            allow_new_assignments,
        })
    }

    /// Project the cost of assigning a minion until the deadline
    ///
    /// Months remaining are rounded up and never less than one, so an
    /// overdue scheme still pays at least a month of salary.
    pub fn estimate_assignment_spending(
        &self,
        id: SchemeId,
        candidate: &Minion,
    ) -> DomainResult<SpendingEstimate> {
        let scheme = self.scheme(id)?;

        let days_remaining = (scheme.target_completion_date - self.clock.now()).num_seconds()
            as f64
            / 86_400.0;
        let months_remaining = ((days_remaining / DAYS_PER_MONTH).ceil() as i64).max(1);

        let added_amount = candidate.salary_demand * months_remaining as f64;
        let new_total = scheme.current_spending + added_amount;

        Ok(SpendingEstimate {
            added_amount,
            new_total,
            would_exceed_budget: new_total > scheme.budget,
        })
    }

    /// Validate a status transition, collecting every failed precondition
    pub fn can_transition(&self, id: SchemeId, target: SchemeStatus) -> DomainResult<TransitionCheck> {
        let scheme = self.scheme(id)?;
        let current = scheme.status;
        let mut errors = Vec::new();

        match (current, target) {
            (SchemeStatus::Planning, SchemeStatus::Active) => {
                if scheme.start_date.is_none() {
                    errors.push("Start date must be set before activating".to_string());
                }
                self.check_activation_crew(&scheme, &mut errors)?;
                if scheme.is_over_budget() {
                    errors.push("Scheme cannot be over budget when activating".to_string());
                }
            }
            (SchemeStatus::OnHold, SchemeStatus::Active) => {
                self.check_activation_crew(&scheme, &mut errors)?;
            }
            (SchemeStatus::Active, SchemeStatus::Completed) => {
                if scheme.success_likelihood < self.config.scheme.success_high_threshold {
                    errors.push(format!(
                        "Success likelihood must be at least {}% to complete",
                        self.config.scheme.success_high_threshold
                    ));
                }
                if self.clock.now() < scheme.target_completion_date {
                    errors.push("Target completion date must have passed".to_string());
                }
            }
            (SchemeStatus::Active, SchemeStatus::OnHold)
            | (SchemeStatus::Active, SchemeStatus::Failed) => {}
            (_, SchemeStatus::Planning) => {}
            (from, to) => {
                errors.push(format!("Cannot transition from {from} to {to}"));
            }
        }

        Ok(TransitionCheck {
            allowed: errors.is_empty(),
            errors,
        })
    }

    /// Minimum resources demanded by a diabolical rating
    pub fn resource_requirements(&self, diabolical_rating: u8) -> ResourceRequirements {
        if diabolical_rating >= self.config.scheme.high_diabolical_rating {
            ResourceRequirements {
                min_minions: 3,
                min_equipment: 2,
                requires_doomsday_device: true,
            }
        } else if diabolical_rating >= MODERATE_RATING {
            ResourceRequirements {
                min_minions: 2,
                min_equipment: 1,
                requires_doomsday_device: false,
            }
        } else {
            ResourceRequirements {
                min_minions: 1,
                min_equipment: 0,
                requires_doomsday_device: false,
            }
        }
    }

    /// Compare assigned resources against the rating's requirements
    pub fn validate_resource_requirements(
        &self,
        id: SchemeId,
        assigned_minions: u32,
        assigned_equipment: u32,
        has_doomsday_device: bool,
    ) -> DomainResult<ResourceCheck> {
        let scheme = self.scheme(id)?;
        let required = self.resource_requirements(scheme.diabolical_rating);
        let mut warnings = Vec::new();

        if required.requires_doomsday_device && !has_doomsday_device {
            warnings.push("Highly diabolical schemes require a doomsday device".to_string());
        }
        if assigned_equipment < required.min_equipment {
            warnings.push(format!(
                "Scheme requires at least {} equipment, but only {} assigned",
                required.min_equipment, assigned_equipment
            ));
        }
        if assigned_minions < required.min_minions {
            warnings.push(format!(
                "Scheme requires at least {} minions, but only {} assigned",
                required.min_minions, assigned_minions
            ));
        }

        let met = assigned_equipment >= required.min_equipment
            && assigned_minions >= required.min_minions
            && (!required.requires_doomsday_device || has_doomsday_device);

        Ok(ResourceCheck { met, warnings })
    }

    /// Classify how close a scheme is to its deadline
    pub fn deadline_status(&self, id: SchemeId) -> DomainResult<DeadlineStatus> {
        let scheme = self.scheme(id)?;
        let days = (scheme.target_completion_date - self.clock.now()).num_days();
        Ok(DeadlineStatus::from_days_remaining(days))
    }

    /// Check specialty coverage on the assigned crew
    pub fn validate_specialty_matching(&self, id: SchemeId) -> DomainResult<SpecialtyCheck> {
        let scheme = self.scheme(id)?;
        let (_, matching_count) = self.crew_counts(&scheme)?;
        let mut warnings = Vec::new();

        if matching_count == 0 && scheme.status.is_active() {
            warnings.push("No minions with required specialty assigned".to_string());
        } else if matching_count == 1 {
            warnings.push("Only one minion with required specialty - risky!".to_string());
        }

        Ok(SpecialtyCheck {
            has_required_specialty: matching_count > 0,
            matching_count,
            warnings,
        })
    }

    /// Sanity-check budget values at creation/edit time
    pub fn validate_budget_values(&self, budget: f64, estimated_cost: f64) -> BudgetValuesCheck {
        if budget < self.config.scheme.minimum_budget {
            return BudgetValuesCheck {
                valid: false,
                warnings: vec!["Budget too low - minimum is 10,000 evil dollars".to_string()],
            };
        }

        let mut warnings = Vec::new();
        if budget > self.config.scheme.maximum_budget {
            warnings.push("Budget seems unrealistic - are you sure?".to_string());
        }
        if budget < estimated_cost {
            warnings.push("Budget may be insufficient for resource requirements".to_string());
        }

        BudgetValuesCheck {
            valid: true,
            warnings,
        }
    }

    /// Resolve an overdue active scheme on its own
    ///
    /// Completes at success >= 70, fails below 30, and leaves the
    /// middle band for the villain to agonize over. Returns the status
    /// that was applied, if any.
    pub fn apply_auto_transitions(&self, id: SchemeId) -> DomainResult<Option<SchemeStatus>> {
        let mut scheme = self.scheme(id)?;

        if scheme.status != SchemeStatus::Active {
            return Ok(None);
        }

        let days_until_deadline =
            (scheme.target_completion_date - self.clock.now()).num_days();
        if days_until_deadline >= 0 {
            return Ok(None);
        }

        let new_status = if scheme.success_likelihood >= self.config.scheme.success_high_threshold
        {
            SchemeStatus::Completed
        } else if scheme.success_likelihood < self.config.scheme.success_low_threshold {
            SchemeStatus::Failed
        } else {
            return Ok(None);
        };

        info!(scheme = %scheme.name, status = %new_status, "deadline passed, auto-transitioning");
        scheme.status = new_status;
        self.persist(scheme)?;
        Ok(Some(new_status))
    }

    /// Cache-first single-scheme read
    fn scheme(&self, id: SchemeId) -> DomainResult<EvilScheme> {
        if let Some(scheme) = self.store.borrow().scheme(id) {
            return Ok(scheme.clone());
        }
        match self.repo.get_scheme(id)? {
            Some(scheme) => {
                self.store.borrow_mut().put_scheme(scheme.clone());
                Ok(scheme)
            }
            None => Err(RuleViolation::NotFound {
                kind: EntityKind::Scheme,
                id: id.raw(),
            }),
        }
    }

    fn persist(&self, scheme: EvilScheme) -> DomainResult<()> {
        self.repo.update_scheme(&scheme)?;
        self.store.borrow_mut().put_scheme(scheme);
        Ok(())
    }

    /// Count (total, specialty-matching) minions assigned to a scheme
    fn crew_counts(&self, scheme: &EvilScheme) -> DomainResult<(usize, usize)> {
        let mut total = 0;
        let mut matching = 0;
        for minion in self.repo.get_all_minions()? {
            if minion.is_assigned_to(scheme.id) {
                total += 1;
                if minion.specialty == scheme.required_specialty {
                    matching += 1;
                }
            }
        }
        Ok((total, matching))
    }

    fn check_activation_crew(
        &self,
        scheme: &EvilScheme,
        errors: &mut Vec<String>,
    ) -> DomainResult<()> {
        let (total, matching) = self.crew_counts(scheme)?;
        if total < FULL_STRENGTH_CREW {
            errors.push("At least 2 minions must be assigned".to_string());
        }
        if matching < 1 {
            errors.push("At least 1 minion with required specialty must be assigned".to_string());
        }
        Ok(())
    }
}
