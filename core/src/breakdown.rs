//! Per-skill damage breakdown
//!
//! Decorates a player's skill list with each skill's share of that player's
//! total damage and ranks the result. The output order is the display
//! order; consumers must not re-sort.

use skydome_types::{ComputedSkillState, SkillState};

/// Compute percentage-of-player-total for every skill and rank descending
/// by total damage.
///
/// The input is never mutated; each output record is a fresh decorated
/// copy. With zero total damage every percentage is 0 rather than NaN.
/// The sort is stable, so skills with equal totals keep their input order.
pub fn aggregate(skills: &[SkillState]) -> Vec<ComputedSkillState> {
    let total: u64 = skills.iter().map(|s| s.total_damage).sum();

    let mut computed: Vec<ComputedSkillState> = skills
        .iter()
        .map(|skill| ComputedSkillState {
            action_type: skill.action_type,
            hits: skill.hits,
            total_damage: skill.total_damage,
            min_damage: skill.min_damage,
            max_damage: skill.max_damage,
            percentage: if total == 0 {
                0.0
            } else {
                skill.total_damage as f64 / total as f64 * 100.0
            },
        })
        .collect();

    computed.sort_by(|a, b| b.total_damage.cmp(&a.total_damage));
    computed
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydome_types::ActionType;

    fn skill(action_type: ActionType, total_damage: u64) -> SkillState {
        SkillState {
            action_type,
            hits: 1,
            total_damage,
            min_damage: None,
            max_damage: None,
        }
    }

    #[test]
    fn ranks_descending_with_percentages() {
        let skills = vec![
            skill(ActionType::LinkAttack, 300),
            skill(ActionType::Normal(7), 700),
        ];
        let computed = aggregate(&skills);

        assert_eq!(computed.len(), 2);
        assert_eq!(computed[0].action_type, ActionType::Normal(7));
        assert_eq!(computed[0].percentage, 70.0);
        assert_eq!(computed[1].action_type, ActionType::LinkAttack);
        assert_eq!(computed[1].percentage, 30.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let skills = vec![
            skill(ActionType::Normal(1), 333),
            skill(ActionType::Normal(2), 334),
            skill(ActionType::DamageOverTime, 119),
            skill(ActionType::SBA, 48_271),
        ];
        let sum: f64 = aggregate(&skills).iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 100.0 * 1e-9, "sum was {sum}");
    }

    #[test]
    fn zero_total_damage_yields_zero_percentages() {
        let skills = vec![
            skill(ActionType::LinkAttack, 0),
            skill(ActionType::Normal(3), 0),
        ];
        for computed in aggregate(&skills) {
            assert_eq!(computed.percentage, 0.0);
        }
    }

    #[test]
    fn equal_totals_keep_input_order() {
        let skills = vec![
            skill(ActionType::Normal(10), 500),
            skill(ActionType::Normal(11), 500),
            skill(ActionType::Normal(12), 500),
        ];
        let computed = aggregate(&skills);
        let ids: Vec<_> = computed.iter().map(|s| s.action_type).collect();
        assert_eq!(
            ids,
            vec![
                ActionType::Normal(10),
                ActionType::Normal(11),
                ActionType::Normal(12),
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn input_is_left_untouched() {
        let skills = vec![
            skill(ActionType::Normal(1), 10),
            skill(ActionType::Normal(2), 20),
        ];
        let before = skills.clone();
        let _ = aggregate(&skills);
        assert_eq!(skills, before);
    }
}
