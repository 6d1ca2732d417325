//! Configuration module for Overlord
//!
//! Every threshold the rule engine consumes lives here as an explicit
//! value object constructed once at startup and passed into each rule
//! component - nothing reads global state. Precedence:
//! 1. Environment variables (OVERLORD_*)
//! 2. Project config (overlord.toml)
//! 3. User config (~/.config/overlord/config.toml)
//! 4. Built-in defaults
//!
//! Fixed vocabularies (specialties, categories, statuses, moods) are
//! enums in `domain::value_objects`, not configurable strings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    "overlord.db".to_string()
}

/// Per-scheme resource caps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintConfig {
    #[serde(default = "default_max_minions_per_scheme")]
    pub max_minions_per_scheme: u32,
    #[serde(default = "default_max_equipment_per_scheme")]
    pub max_equipment_per_scheme: u32,
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self {
            max_minions_per_scheme: default_max_minions_per_scheme(),
            max_equipment_per_scheme: default_max_equipment_per_scheme(),
        }
    }
}

fn default_max_minions_per_scheme() -> u32 {
    10
}

fn default_max_equipment_per_scheme() -> u32 {
    5
}

/// Salary thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryConfig {
    #[serde(default = "default_minion_salary")]
    pub default_minion_salary: f64,
    /// Salaries above this are accepted but flagged as anomalous
    #[serde(default = "default_anomalous_salary")]
    pub anomalous_salary: f64,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            default_minion_salary: default_minion_salary(),
            anomalous_salary: default_anomalous_salary(),
        }
    }
}

fn default_minion_salary() -> f64 {
    5_000.0
}

fn default_anomalous_salary() -> f64 {
    1_000_000.0
}

/// Loyalty adjustment rates and mood thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyConfig {
    #[serde(default = "default_loyalty_growth_rate")]
    pub growth_rate: i32,
    #[serde(default = "default_loyalty_decay_rate")]
    pub decay_rate: i32,
    /// Below this, a minion starts plotting betrayal
    #[serde(default = "default_low_loyalty_threshold")]
    pub low_threshold: i32,
    /// Above this, a minion is happy
    #[serde(default = "default_high_loyalty_threshold")]
    pub high_threshold: i32,
}

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            growth_rate: default_loyalty_growth_rate(),
            decay_rate: default_loyalty_decay_rate(),
            low_threshold: default_low_loyalty_threshold(),
            high_threshold: default_high_loyalty_threshold(),
        }
    }
}

fn default_loyalty_growth_rate() -> i32 {
    3
}

fn default_loyalty_decay_rate() -> i32 {
    5
}

fn default_low_loyalty_threshold() -> i32 {
    40
}

fn default_high_loyalty_threshold() -> i32 {
    70
}

/// Equipment condition and maintenance economics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentConfig {
    /// Condition points lost per month of active service
    #[serde(default = "default_degradation_rate")]
    pub degradation_rate: i32,
    /// Maintenance cost as a fraction of purchase price
    #[serde(default = "default_maintenance_pct")]
    pub maintenance_cost_pct: f64,
    /// Doomsday devices cost more to service
    #[serde(default = "default_doomsday_maintenance_pct")]
    pub doomsday_maintenance_cost_pct: f64,
    /// Minimum condition for an item to count as operational
    #[serde(default = "default_min_condition")]
    pub min_operational_condition: i32,
    /// Below this, an item is broken
    #[serde(default = "default_broken_condition")]
    pub broken_condition: i32,
}

impl Default for EquipmentConfig {
    fn default() -> Self {
        Self {
            degradation_rate: default_degradation_rate(),
            maintenance_cost_pct: default_maintenance_pct(),
            doomsday_maintenance_cost_pct: default_doomsday_maintenance_pct(),
            min_operational_condition: default_min_condition(),
            broken_condition: default_broken_condition(),
        }
    }
}

fn default_degradation_rate() -> i32 {
    5
}

fn default_maintenance_pct() -> f64 {
    0.15
}

fn default_doomsday_maintenance_pct() -> f64 {
    0.30
}

fn default_min_condition() -> i32 {
    50
}

fn default_broken_condition() -> i32 {
    20
}

/// Scheme budget bounds and success thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeConfig {
    #[serde(default = "default_minimum_budget")]
    pub minimum_budget: f64,
    /// Budgets above this are legal but implausible
    #[serde(default = "default_maximum_budget")]
    pub maximum_budget: f64,
    /// Success likelihood needed to complete
    #[serde(default = "default_success_high")]
    pub success_high_threshold: i32,
    /// Below this, an overdue scheme auto-fails
    #[serde(default = "default_success_low")]
    pub success_low_threshold: i32,
    /// Ratings at or above this demand a doomsday device
    #[serde(default = "default_high_diabolical_rating")]
    pub high_diabolical_rating: u8,
}

impl Default for SchemeConfig {
    fn default() -> Self {
        Self {
            minimum_budget: default_minimum_budget(),
            maximum_budget: default_maximum_budget(),
            success_high_threshold: default_success_high(),
            success_low_threshold: default_success_low(),
            high_diabolical_rating: default_high_diabolical_rating(),
        }
    }
}

fn default_minimum_budget() -> f64 {
    10_000.0
}

fn default_maximum_budget() -> f64 {
    10_000_000.0
}

fn default_success_high() -> i32 {
    70
}

fn default_success_low() -> i32 {
    30
}

fn default_high_diabolical_rating() -> u8 {
    8
}

/// Staffing rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingConfig {
    /// Days on one scheme before a minion is overworked
    #[serde(default = "default_overworked_days")]
    pub overworked_days: i64,
    /// Skill needed to operate specialist equipment
    #[serde(default = "default_specialist_skill")]
    pub specialist_skill_level: u8,
    /// Skill needed to operate a doomsday device
    #[serde(default = "default_doomsday_specialist_skill")]
    pub doomsday_specialist_skill_level: u8,
}

impl Default for StaffingConfig {
    fn default() -> Self {
        Self {
            overworked_days: default_overworked_days(),
            specialist_skill_level: default_specialist_skill(),
            doomsday_specialist_skill_level: default_doomsday_specialist_skill(),
        }
    }
}

fn default_overworked_days() -> i64 {
    60
}

fn default_specialist_skill() -> u8 {
    8
}

fn default_doomsday_specialist_skill() -> u8 {
    9
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuleConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub constraints: ConstraintConfig,

    #[serde(default)]
    pub salary: SalaryConfig,

    #[serde(default)]
    pub loyalty: LoyaltyConfig,

    #[serde(default)]
    pub equipment: EquipmentConfig,

    #[serde(default)]
    pub scheme: SchemeConfig,

    #[serde(default)]
    pub staffing: StaffingConfig,
}

impl RuleConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        let mut config = None;

        if let Some(root) = project_root {
            let project_config = root.join("overlord.toml");
            if project_config.exists() {
                config = Self::load(&project_config).ok();
            }
        }

        if config.is_none() {
            if let Some(user_config) = user_config_path() {
                if user_config.exists() {
                    config = Self::load(&user_config).ok();
                }
            }
        }

        let mut config = config.unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides (OVERLORD_* prefix)
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("OVERLORD_DB_PATH") {
            if !path.is_empty() {
                self.database.path = path;
            }
        }

        if let Ok(days) = std::env::var("OVERLORD_OVERWORKED_DAYS") {
            if let Ok(days) = days.parse() {
                self.staffing.overworked_days = days;
            }
        }

        if let Ok(rate) = std::env::var("OVERLORD_DEGRADATION_RATE") {
            if let Ok(rate) = rate.parse() {
                self.equipment.degradation_rate = rate;
            }
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("overlord/config.toml"))
}
