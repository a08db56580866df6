use anyhow::{anyhow, Result};
use rand::prelude::Distribution;
use rand::Rng;
use rand_distr::Dirichlet;

pub struct DirichletOptions {
    pub epsilon: f32,
}

/// Blends Dirichlet noise into a set of priors as `(1 - epsilon) * prior + epsilon * noise`.
pub fn generate_noise<R: Rng + ?Sized>(
    policy_scores: Vec<f32>,
    dirichlet: &DirichletOptions,
    rng: &mut R,
) -> Result<Vec<f32>> {
    let num_actions = policy_scores.len();

    // Do not apply noise if there is only one action.
    if num_actions < 2 {
        return Ok(policy_scores);
    }

    let e = dirichlet.epsilon;
    let alpha = 8.0 / num_actions as f32;
    let dirichlet_noise = Dirichlet::new_with_size(alpha, num_actions)
        .map_err(|err| anyhow!("Error creating dirichlet distribution: {:?}", err))?
        .sample(rng);

    Ok(dirichlet_noise
        .into_iter()
        .zip(policy_scores)
        .map(|(noise, policy_score)| (1.0 - e) * policy_score + e * noise)
        .collect())
}
