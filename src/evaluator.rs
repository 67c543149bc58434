//! Policy evaluator - runs the level sections in order.

use secrecy::SecretSlice;

use crate::config::PolicyConfig;
use crate::sections::{
    case_mix_section, character_class_section, repeated_run_section,
    repeated_substring_section, SectionResult, Violation,
};

/// Outcome of evaluating one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Violation),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(violation) => Some(violation),
        }
    }
}

type Section = fn(&SecretSlice<u8>, &PolicyConfig) -> SectionResult;

/// Evaluates a password against every level up to `config.level()`.
///
/// Sections run in level order and the first violation ends the
/// evaluation.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `config` - Validated policy configuration
pub fn evaluate(password: &SecretSlice<u8>, config: &PolicyConfig) -> Verdict {
    // Orchestrator: one section per level, cumulative
    let sections: [(&str, Section); 4] = [
        ("case", |pwd, _| case_mix_section(pwd)),
        ("classes", |pwd, cfg| character_class_section(pwd, cfg.param())),
        ("repeat", |pwd, cfg| repeated_run_section(pwd, cfg.run_length())),
        ("substring", |pwd, cfg| repeated_substring_section(pwd, cfg.param())),
    ];

    let active = usize::from(config.level());
    for (section_name, section_fn) in sections.into_iter().take(active) {
        if let Some(violation) = section_fn(password, config) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                section = section_name,
                level = violation.level(),
                %violation,
                "password rejected"
            );
            return Verdict::Fail(violation);
        }
    }

    Verdict::Pass
}
