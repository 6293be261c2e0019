use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

/// How a word's letters are laid onto the ordered positions of a placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectionMode {
    /// Letter `i` goes to position `i`.
    #[default]
    Forward,

    /// The word is laid down reversed.
    Backward,

    /// Either forward or backward, chosen at random.
    ForwardBackward,

    /// A random permutation of the word's letters.
    Scatter,
}

/// The letter for position `index` of a placement, decided independently on every call.
///
/// For [DirectionMode::ForwardBackward] and [DirectionMode::Scatter] two calls with the same
/// arguments may disagree. Use [resolve] to fix an arrangement once for a whole placement.
pub fn letter_for<R: Rng + ?Sized>(
    word: &[char],
    index: usize,
    mode: DirectionMode,
    rng: &mut R,
) -> char {
    let last = word.len() - 1;

    match mode {
        DirectionMode::Forward => word[index],
        DirectionMode::Backward => word[last - index],
        DirectionMode::ForwardBackward => {
            if rng.gen_bool(0.5) {
                word[index]
            } else {
                word[last - index]
            }
        }
        DirectionMode::Scatter => {
            let mut scattered = word.to_vec();
            scattered.shuffle(rng);
            scattered[index]
        }
    }
}

/// Decides the full arrangement of `word` for one placement attempt.
///
/// The returned letters line up with the placement's positions.
pub fn resolve<R: Rng + ?Sized>(word: &[char], mode: DirectionMode, rng: &mut R) -> Vec<char> {
    let mut letters = word.to_vec();

    match mode {
        DirectionMode::Forward => {}
        DirectionMode::Backward => letters.reverse(),
        DirectionMode::ForwardBackward => {
            if rng.gen_bool(0.5) {
                letters.reverse();
            }
        }
        DirectionMode::Scatter => letters.shuffle(rng),
    }

    letters
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn sorted(mut letters: Vec<char>) -> Vec<char> {
        letters.sort_unstable();
        letters
    }

    #[test]
    fn forward_and_backward_letters() {
        let mut rng = StdRng::seed_from_u64(1);
        let word = chars("rust");

        let forward: String = (0..4)
            .map(|i| letter_for(&word, i, DirectionMode::Forward, &mut rng))
            .collect();
        let backward: String = (0..4)
            .map(|i| letter_for(&word, i, DirectionMode::Backward, &mut rng))
            .collect();

        assert_eq!(forward, "rust");
        assert_eq!(backward, "tsur");
    }

    #[test]
    fn forward_backward_letter_is_from_either_end() {
        let mut rng = StdRng::seed_from_u64(2);
        let word = chars("abc");

        for _ in 0..50 {
            let ch = letter_for(&word, 0, DirectionMode::ForwardBackward, &mut rng);
            assert!(ch == 'a' || ch == 'c');
            assert_eq!(
                letter_for(&word, 1, DirectionMode::ForwardBackward, &mut rng),
                'b'
            );
        }
    }

    #[test]
    fn scatter_letter_comes_from_word() {
        let mut rng = StdRng::seed_from_u64(3);
        let word = chars("panic");

        for index in 0..word.len() {
            let ch = letter_for(&word, index, DirectionMode::Scatter, &mut rng);
            assert!(word.contains(&ch));
        }
    }

    #[test]
    fn resolved_arrangements() {
        let mut rng = StdRng::seed_from_u64(4);
        let word = chars("search");

        assert_eq!(resolve(&word, DirectionMode::Forward, &mut rng), word);
        assert_eq!(
            resolve(&word, DirectionMode::Backward, &mut rng),
            chars("hcraes")
        );

        for _ in 0..20 {
            let arranged = resolve(&word, DirectionMode::ForwardBackward, &mut rng);
            assert!(arranged == word || arranged == chars("hcraes"));
        }
    }

    #[test]
    fn scatter_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(5);
        let word = chars("eggplant");

        for _ in 0..20 {
            let arranged = resolve(&word, DirectionMode::Scatter, &mut rng);
            assert_eq!(sorted(arranged), sorted(word.clone()));
        }
    }

    #[test]
    fn modes_deserialize_from_camel_case() {
        let mode: DirectionMode = serde_json::from_str("\"forwardBackward\"").unwrap();
        assert_eq!(mode, DirectionMode::ForwardBackward);

        assert!(serde_json::from_str::<DirectionMode>("\"sideways\"").is_err());
    }
}
