use tracing::debug;

use crate::models::screening::ScreeningResult;

/// Orders screening results for one posting: descending by overall score,
/// ties broken ascending by resume id so repeated runs produce identical
/// output. Returns new values with `rank` assigned from 1.
pub fn rank(mut results: Vec<ScreeningResult>) -> Vec<ScreeningResult> {
    results.sort_by(|a, b| {
        b.overall_score
            .total_cmp(&a.overall_score)
            .then_with(|| a.resume_id.cmp(&b.resume_id))
    });

    for (index, result) in results.iter_mut().enumerate() {
        result.rank = Some(index + 1);
    }

    debug!(count = results.len(), "ranked screening results");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::screening::{ScoreBreakdown, SkillMatchResult};
    use crate::scoring::{aggregate, ScoringWeights};
    use uuid::Uuid;

    fn breakdown() -> ScoreBreakdown {
        aggregate(0.0, 0.0, 0.0, &ScoringWeights::default()).1
    }

    fn result(overall: f64, resume_id: Uuid) -> ScreeningResult {
        ScreeningResult {
            resume_id,
            job_posting_id: Uuid::nil(),
            skill_score: 0.0,
            experience_score: 0.0,
            education_score: 0.0,
            overall_score: overall,
            breakdown: breakdown(),
            skill_detail: SkillMatchResult {
                matched_required: vec![],
                missing_required: vec![],
                matched_preferred: vec![],
                credits: vec![],
                score: 0.0,
            },
            bias_report: None,
            anonymized_score: None,
            rank: None,
        }
    }

    #[test]
    fn test_sorts_descending_by_score() {
        let ranked = rank(vec![
            result(40.0, Uuid::from_u128(1)),
            result(90.0, Uuid::from_u128(2)),
            result(70.0, Uuid::from_u128(3)),
        ]);
        let scores: Vec<f64> = ranked.iter().map(|r| r.overall_score).collect();
        assert_eq!(scores, vec![90.0, 70.0, 40.0]);
    }

    #[test]
    fn test_ranks_start_at_one() {
        let ranked = rank(vec![
            result(40.0, Uuid::from_u128(1)),
            result(90.0, Uuid::from_u128(2)),
        ]);
        assert_eq!(ranked[0].rank, Some(1));
        assert_eq!(ranked[1].rank, Some(2));
    }

    #[test]
    fn test_ties_break_by_resume_id_ascending() {
        let ranked = rank(vec![
            result(80.0, Uuid::from_u128(9)),
            result(80.0, Uuid::from_u128(3)),
            result(80.0, Uuid::from_u128(6)),
        ]);
        let ids: Vec<Uuid> = ranked.iter().map(|r| r.resume_id).collect();
        assert_eq!(
            ids,
            vec![Uuid::from_u128(3), Uuid::from_u128(6), Uuid::from_u128(9)]
        );
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let input = vec![
            result(80.0, Uuid::from_u128(9)),
            result(95.0, Uuid::from_u128(3)),
            result(80.0, Uuid::from_u128(6)),
        ];
        let once = rank(input);
        let twice = rank(once.clone());
        let order_once: Vec<Uuid> = once.iter().map(|r| r.resume_id).collect();
        let order_twice: Vec<Uuid> = twice.iter().map(|r| r.resume_id).collect();
        assert_eq!(order_once, order_twice);
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(rank(vec![]).is_empty());
    }
}
