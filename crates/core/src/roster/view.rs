use std::collections::HashSet;

use crate::domain::SalesRep;

use super::criteria::ViewCriteria;

/// Project the source list through the criteria: filter first, then an
/// optional stable sort by descending deal count. Source order is the
/// baseline; reps with equal deal counts keep their filtered relative order.
pub fn derive(source: &[SalesRep], criteria: &ViewCriteria) -> Vec<SalesRep> {
    let mut reps: Vec<SalesRep> = source.to_vec();

    if let Some(skill) = &criteria.skill_filter {
        reps.retain(|rep| rep.has_skill(skill));
    }

    if criteria.sort_by_deal_count {
        reps.sort_by(|a, b| b.deal_count().cmp(&a.deal_count()));
    }

    reps
}

/// Every skill that appears across the source list, duplicate-free, in
/// first-seen order. Always computed from the full source list, not the
/// filtered projection, so the selection control never loses options.
pub fn distinct_skills(source: &[SalesRep]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for rep in source {
        for skill in &rep.skills {
            if seen.insert(skill.clone()) {
                skills.push(skill.clone());
            }
        }
    }

    skills
}

/// Holds the fetched roster together with the projection currently rendered.
/// Every mutation recomputes the projection synchronously, so `visible()` is
/// never stale with respect to the source list or the criteria.
#[derive(Clone, Debug, Default)]
pub struct RosterView {
    source: Vec<SalesRep>,
    criteria: ViewCriteria,
    derived: Vec<SalesRep>,
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(reps: Vec<SalesRep>) -> Self {
        let mut view = Self::new();
        view.replace_source(reps);
        view
    }

    /// Swap in a freshly fetched roster. The previous list is discarded
    /// wholesale; active criteria are reapplied to the new data.
    pub fn replace_source(&mut self, reps: Vec<SalesRep>) {
        self.source = reps;
        self.recompute();
    }

    pub fn set_skill_filter(&mut self, skill: Option<String>) {
        self.criteria.skill_filter = skill;
        self.recompute();
    }

    pub fn set_sort_by_deal_count(&mut self, enabled: bool) {
        self.criteria.sort_by_deal_count = enabled;
        self.recompute();
    }

    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    pub fn source(&self) -> &[SalesRep] {
        &self.source
    }

    /// The only sequence a renderer should consume.
    pub fn visible(&self) -> &[SalesRep] {
        &self.derived
    }

    pub fn is_empty(&self) -> bool {
        self.derived.is_empty()
    }

    pub fn distinct_skills(&self) -> Vec<String> {
        distinct_skills(&self.source)
    }

    fn recompute(&mut self) {
        self.derived = derive(&self.source, &self.criteria);
    }
}
