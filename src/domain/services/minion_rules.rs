//! MinionRules - loyalty, mood, and assignment gating for minions
//!
//! Loyalty moves with salary satisfaction (+3 when paid in full, -5 when
//! shorted) and is clamped to 0-100. Mood follows loyalty unless the
//! minion has been grinding on one scheme for over 60 days, in which
//! case exhaustion wins outright. Assignment operations are hard gates:
//! they either mutate and persist or reject with the violated rule.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::RuleConfig;
use crate::domain::entities::{EvilScheme, Minion, SecretBase};
use crate::domain::ports::{Clock, Repository};
use crate::domain::services::SharedStore;
use crate::domain::value_objects::{BaseId, MinionId, Mood, SchemeId};
use crate::error::{DomainResult, EntityKind, RuleViolation};

/// Rule component for minions
pub struct MinionRules {
    store: SharedStore,
    repo: Rc<dyn Repository>,
    clock: Rc<dyn Clock>,
    config: RuleConfig,
}

impl MinionRules {
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

    /// Adjust loyalty after payday and refresh the mood
    ///
    /// Paying at least the demanded salary grows loyalty; anything less
    /// shrinks it. The result is clamped to 0-100 and the mood update
    /// persists the minion.
    pub fn update_loyalty(&self, id: MinionId, actual_salary_paid: f64) -> DomainResult<i32> {
        let mut minion = self.minion(id)?;

        if actual_salary_paid >= minion.salary_demand {
            minion.loyalty_score += self.config.loyalty.growth_rate;
        } else {
            minion.loyalty_score -= self.config.loyalty.decay_rate;
        }
        minion.loyalty_score = minion.loyalty_score.clamp(0, 100);

        let loyalty = minion.loyalty_score;
        self.store.borrow_mut().put_minion(minion);
        self.update_mood(id)?;
        Ok(loyalty)
    }

    /// Reclassify mood and stamp the update time
    ///
    /// Overwork takes priority: a minion more than 60 days into a scheme
    /// assignment is Exhausted no matter how loyal. Otherwise loyalty
    /// above 70 is Happy, below 40 is Plotting Betrayal, and the middle
    /// is Grumpy.
    pub fn update_mood(&self, id: MinionId) -> DomainResult<Mood> {
        let mut minion = self.minion(id)?;
        let now = self.clock.now();

        minion.mood_status = if self.is_overworked(&minion) {
            Mood::Exhausted
        } else if minion.loyalty_score > self.config.loyalty.high_threshold {
            Mood::Happy
        } else if minion.loyalty_score < self.config.loyalty.low_threshold {
            Mood::PlottingBetrayal
        } else {
            Mood::Grumpy
        };
        minion.last_mood_update = now;

        let mood = minion.mood_status;
        if mood.is_dangerous() {
            warn!(minion = %minion.name, "minion is plotting betrayal");
        }
        self.persist(minion)?;
        Ok(mood)
    }

    /// Put a minion on a scheme
    ///
    /// Rejects when the minion is committed to a different scheme while
    /// the target is active, when their skill is short of the scheme's
    /// requirement, or when their specialty does not match.
    pub fn assign_to_scheme(&self, id: MinionId, scheme_id: SchemeId) -> DomainResult<()> {
        let mut minion = self.minion(id)?;
        let scheme = self.scheme(scheme_id)?;

        if let Some(current) = minion.current_scheme_id {
            if current != scheme.id && scheme.status.is_active() {
                return Err(RuleViolation::AlreadyCommitted { minion: id.raw() });
            }
        }
        if minion.skill_level < scheme.required_skill_level {
            return Err(RuleViolation::SkillTooLow {
                required: scheme.required_skill_level,
                actual: minion.skill_level,
            });
        }
        if minion.specialty != scheme.required_specialty {
            return Err(RuleViolation::SpecialtyMismatch {
                required: scheme.required_specialty,
                actual: minion.specialty,
            });
        }

        minion.current_scheme_id = Some(scheme.id);
        minion.scheme_assignment_date = Some(self.clock.now());
        debug!(minion = %minion.name, scheme = %scheme.name, "minion assigned to scheme");
        self.persist(minion)
    }

    /// Pull a minion off their scheme
    ///
    /// Clears the assignment timestamp so a stale date can never mark an
    /// idle minion as overworked.
    pub fn unassign_from_scheme(&self, id: MinionId) -> DomainResult<()> {
        let mut minion = self.minion(id)?;
        minion.current_scheme_id = None;
        minion.scheme_assignment_date = None;
        self.persist(minion)
    }

    /// Station a minion at a base, respecting capacity
    pub fn assign_to_base(&self, id: MinionId, base_id: BaseId) -> DomainResult<()> {
        let mut minion = self.minion(id)?;
        let base = self.base(base_id)?;

        let occupancy = self.repo.base_occupancy(base.id)?;
        if occupancy >= base.capacity {
            return Err(RuleViolation::BaseAtCapacity {
                capacity: base.capacity,
            });
        }

        minion.current_base_id = Some(base.id);
        self.persist(minion)
    }

    /// Station several minions at once - all or nothing
    ///
    /// The whole batch is validated against remaining capacity before
    /// any minion is mutated; a batch that does not fit changes nobody.
    pub fn assign_many_to_base(&self, ids: &[MinionId], base_id: BaseId) -> DomainResult<()> {
        let base = self.base(base_id)?;

        let occupancy = self.repo.base_occupancy(base.id)?;
        if occupancy + ids.len() as u32 > base.capacity {
            return Err(RuleViolation::ExceedsCapacity {
                requested: ids.len(),
                available: base.capacity.saturating_sub(occupancy),
            });
        }

        // Resolve the full batch before touching anyone
        let mut batch = Vec::with_capacity(ids.len());
        for &id in ids {
            batch.push(self.minion(id)?);
        }

        for mut minion in batch {
            minion.current_base_id = Some(base.id);
            self.persist(minion)?;
        }
        Ok(())
    }

    /// Check creation/update fields, returning non-fatal warnings
    ///
    /// Skill must be 1-10 and salary positive; a salary above the
    /// anomaly threshold is accepted but flagged. Specialty validity is
    /// enforced by the type - an invalid string never parses into a
    /// `Specialty` in the first place.
    pub fn validate(&self, minion: &Minion) -> DomainResult<Vec<String>> {
        if minion.skill_level < 1 || minion.skill_level > 10 {
            return Err(RuleViolation::InvalidSkillLevel {
                value: minion.skill_level as i32,
            });
        }
        if minion.salary_demand <= 0.0 {
            return Err(RuleViolation::InvalidSalary {
                value: minion.salary_demand,
            });
        }

        let mut warnings = Vec::new();
        if minion.salary_demand > self.config.salary.anomalous_salary {
            warn!(minion = %minion.name, salary = minion.salary_demand, "unusually high salary demand");
            warnings.push("Salary demand is unusually high - flag for review".to_string());
        }
        Ok(warnings)
    }

    /// Validate and insert a new minion
    pub fn create(&self, minion: Minion) -> DomainResult<Vec<String>> {
        let warnings = self.validate(&minion)?;
        self.repo.insert_minion(&minion)?;
        self.store.borrow_mut().put_minion(minion);
        Ok(warnings)
    }

    /// Validate and persist changes to an existing minion
    pub fn update(&self, minion: Minion) -> DomainResult<Vec<String>> {
        let warnings = self.validate(&minion)?;
        self.persist(minion)?;
        Ok(warnings)
    }

    /// Remove a minion - no cascading side effects
    pub fn delete(&self, id: MinionId) -> DomainResult<()> {
        self.repo.delete_minion(id)?;
        self.store.borrow_mut().remove_minion(id);
        Ok(())
    }

    fn is_overworked(&self, minion: &Minion) -> bool {
        match (minion.current_scheme_id, minion.scheme_assignment_date) {
            (Some(_), Some(assigned)) => {
                let days = (self.clock.now() - assigned).num_days();
                days > self.config.staffing.overworked_days
            }
            _ => false,
        }
    }

    /// Cache-first single-minion read
    fn minion(&self, id: MinionId) -> DomainResult<Minion> {
        if let Some(minion) = self.store.borrow().minion(id) {
            return Ok(minion.clone());
        }
        match self.repo.get_minion(id)? {
            Some(minion) => {
                self.store.borrow_mut().put_minion(minion.clone());
                Ok(minion)
            }
            None => Err(RuleViolation::NotFound {
                kind: EntityKind::Minion,
                id: id.raw(),
            }),
        }
    }

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

    fn base(&self, id: BaseId) -> DomainResult<SecretBase> {
        if let Some(base) = self.store.borrow().base(id) {
            return Ok(base.clone());
        }
        match self.repo.get_base(id)? {
            Some(base) => {
                self.store.borrow_mut().put_base(base.clone());
                Ok(base)
            }
            None => Err(RuleViolation::NotFound {
                kind: EntityKind::Base,
                id: id.raw(),
            }),
        }
    }

    fn persist(&self, minion: Minion) -> DomainResult<()> {
        self.repo.update_minion(&minion)?;
        self.store.borrow_mut().put_minion(minion);
        Ok(())
    }
}
