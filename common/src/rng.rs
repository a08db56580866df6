use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

pub fn create_rng_from_uuid(uuid: Uuid) -> StdRng {
    let uuid_bytes: &[u8; 16] = uuid.as_bytes();
    let mut seed = [0; 32];
    seed[..16].clone_from_slice(uuid_bytes);
    seed[16..32].clone_from_slice(uuid_bytes);

    SeedableRng::from_seed(seed)
}

/// Creates the random source that is threaded through search and self-play.
///
/// A fixed seed gives reproducible runs. Without one a fresh uuid is drawn and logged so that the
/// run can still be replayed.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let uuid = Uuid::new_v4();
            info!("Seeding rng from {}", uuid);
            create_rng_from_uuid(uuid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = create_rng(Some(7));
        let mut b = create_rng(Some(7));

        for _ in 0..16 {
            assert_eq!(a.gen::<u64>(), b.gen::<u64>());
        }
    }

    #[test]
    fn test_same_uuid_same_sequence() {
        let uuid = Uuid::new_v4();
        let mut a = create_rng_from_uuid(uuid);
        let mut b = create_rng_from_uuid(uuid);

        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }
}
