//! Text rendering of the derived rep view and the skill list.

use repdesk_core::domain::SalesRep;

pub const EMPTY_ROSTER_MESSAGE: &str = "No sales reps found.";
pub const EMPTY_SKILLS_MESSAGE: &str = "No skills found.";

/// One block per rep: name, the skills joined for display in their given
/// order, then one line per deal.
pub fn render_reps(reps: &[SalesRep]) -> String {
    if reps.is_empty() {
        return EMPTY_ROSTER_MESSAGE.to_string();
    }

    let mut lines = Vec::new();
    for rep in reps {
        lines.push(rep.name.clone());
        lines.push(format!("  Skills: {}", rep.skills.join(", ")));
        for deal in &rep.deals {
            lines.push(format!("  {} ({})", deal.client_name, deal.status));
        }
    }
    lines.join("\n")
}

pub fn reps_json(reps: &[SalesRep]) -> String {
    serde_json::to_string_pretty(reps).unwrap_or_else(|_| "[]".to_string())
}

pub fn render_skills(skills: &[String]) -> String {
    if skills.is_empty() {
        return EMPTY_SKILLS_MESSAGE.to_string();
    }
    skills.join("\n")
}

pub fn skills_json(skills: &[String]) -> String {
    serde_json::to_string_pretty(skills).unwrap_or_else(|_| "[]".to_string())
}
