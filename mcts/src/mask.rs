use log::warn;

/// Added to the masked sum before dividing so that a fully masked policy yields zeros instead of NaN.
pub const MASK_EPSILON: f32 = 1e-9;

/// Zeroes the scores of illegal actions and rescales the remainder to sum to one.
///
/// When every legal action has a score of zero the result is all zeros. Search then expands no
/// children for that state.
pub fn mask_invalid_moves_and_normalize(policy_scores: &[f32], valid_actions: &[bool]) -> Vec<f32> {
    assert_eq!(
        policy_scores.len(),
        valid_actions.len(),
        "Policy and valid actions must cover the same action space"
    );

    let masked: Vec<f32> = policy_scores
        .iter()
        .zip(valid_actions)
        .map(|(score, valid)| if *valid { *score } else { 0.0 })
        .collect();

    let sum: f32 = masked.iter().sum();

    if sum <= 0.0 {
        warn!(
            "All valid actions were masked or scored zero. Policy: {:?}, Valid: {:?}",
            policy_scores, valid_actions
        );
    }

    let total = sum + MASK_EPSILON;

    masked.into_iter().map(|score| score / total).collect()
}
