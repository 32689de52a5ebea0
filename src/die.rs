use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;
/// Face that wipes out the turn total.
pub const BUST_FACE: u8 = 1;

/// Six-sided die backed by a seeded random source.
///
/// Faces queued with [`Die::with_faces`] are returned first, in order, before the
/// die falls back to its random source. This keeps whole games reproducible in tests.
#[derive(Clone, Debug)]
pub struct Die {
    face: Option<u8>,
    scripted: VecDeque<u8>,
    rng: StdRng,
}

impl Die {
    pub fn seeded(seed: u64) -> Self {
        Self {
            face: None,
            scripted: VecDeque::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_faces(seed: u64, faces: impl IntoIterator<Item = u8>) -> Self {
        let mut die = Self::seeded(seed);
        die.scripted.extend(faces);
        debug_assert!(die.scripted.iter().all(|face| is_valid_face(*face)));
        die
    }

    /// Rolls the die and returns the new face.
    pub fn roll(&mut self) -> u8 {
        let face = match self.scripted.pop_front() {
            Some(face) => face,
            None => self.rng.gen_range(MIN_FACE..=MAX_FACE),
        };
        self.face = Some(face);
        face
    }

    /// Last rolled face, if the die has been rolled at all.
    pub fn face(&self) -> Option<u8> {
        self.face
    }
}

#[inline]
pub fn is_valid_face(face: u8) -> bool {
    (MIN_FACE..=MAX_FACE).contains(&face)
}
