use itertools::Itertools;

use crate::Result;

pub const NUM_FACES: usize = 6;

pub const TOP: usize = 0;
pub const BOTTOM: usize = 5;

// Keeps the candidate space (and its count) small enough to enumerate.
pub const MAX_MARKS: usize = 16;

/// A mark drawn on one face. The sign picks one of two orientations; zero is
/// a mark with no orientation at all.
pub type Mark = i32;

pub type Labeling = [Mark; NUM_FACES];

/// Where every face's content currently sits, and whether its mark has been
/// turned over along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pose {
    pub positions: [usize; NUM_FACES],
    pub signs: [Mark; NUM_FACES],
}

impl Pose {
    pub fn identity() -> Pose {
        let mut positions = [0; NUM_FACES];
        for (face, slot) in positions.iter_mut().enumerate() {
            *slot = face;
        }
        Pose {
            positions,
            signs: [1; NUM_FACES],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    marks: Vec<Mark>,
}

impl Alphabet {
    pub fn new(marks: Vec<Mark>) -> Result<Alphabet> {
        if marks.is_empty() {
            anyhow::bail!("alphabet must contain at least one mark");
        }
        if marks.len() > MAX_MARKS {
            anyhow::bail!(
                "alphabet has {} marks, at most {} are supported",
                marks.len(),
                MAX_MARKS
            );
        }
        if marks.iter().unique().count() != marks.len() {
            anyhow::bail!("alphabet {:?} contains duplicate marks", marks);
        }
        for m in &marks {
            match m.checked_neg() {
                None => anyhow::bail!("mark {} cannot be turned over", m),
                Some(turned) if !marks.contains(&turned) => anyhow::bail!(
                    "alphabet {:?} is not closed under turning marks over: {} has no {}",
                    marks,
                    m,
                    turned
                ),
                Some(_) => {}
            }
        }
        Ok(Alphabet { marks })
    }

    /// Skips validation, so tests can hand the engine an alphabet that a
    /// rotation can leave.
    #[cfg(test)]
    pub fn unchecked(marks: Vec<Mark>) -> Alphabet {
        Alphabet { marks }
    }

    pub fn binary() -> Alphabet {
        Alphabet { marks: vec![-1, 1] }
    }

    pub fn with_diagonals() -> Alphabet {
        Alphabet {
            marks: vec![-2, -1, 1, 2],
        }
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn contains(&self, mark: Mark) -> bool {
        self.marks.contains(&mark)
    }

    pub fn admits(&self, labeling: &Labeling) -> bool {
        labeling.iter().all(|m| self.contains(*m))
    }

    pub fn number_of_labelings(&self) -> usize {
        self.len().pow(NUM_FACES as u32)
    }

    /// Every labeling over this alphabet, last face varying fastest.
    pub fn labelings(&self) -> impl Iterator<Item = Labeling> + '_ {
        itertools::repeat_n(self.marks.iter().copied(), NUM_FACES)
            .multi_cartesian_product()
            .map(|faces| {
                let mut labeling = [0; NUM_FACES];
                labeling.copy_from_slice(&faces);
                labeling
            })
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.marks().iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_pose_is_neutral() {
        let pose = Pose::identity();
        assert_eq!(pose.positions, [0, 1, 2, 3, 4, 5]);
        assert_eq!(pose.signs, [1; NUM_FACES]);
    }

    #[test]
    fn labelings_cover_the_whole_space_in_order() {
        let alphabet = Alphabet::binary();
        let all: Vec<Labeling> = alphabet.labelings().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all.len(), alphabet.number_of_labelings());
        assert_eq!(all[0], [-1; NUM_FACES]);
        assert_eq!(all[1], [-1, -1, -1, -1, -1, 1]);
        assert_eq!(all[63], [1; NUM_FACES]);
        assert_eq!(all.iter().unique().count(), 64);
    }

    #[test]
    fn extended_alphabet_has_4096_labelings() {
        assert_eq!(Alphabet::with_diagonals().labelings().count(), 4096);
    }

    #[test]
    fn rejects_bad_alphabets() {
        assert!(Alphabet::new(vec![]).is_err());
        assert!(Alphabet::new(vec![1, -1, 1]).is_err());
        assert!(Alphabet::new(vec![1]).is_err());
        assert!(Alphabet::new(vec![-2, 1, 2]).is_err());
    }

    #[test]
    fn rejects_marks_without_a_negation() {
        assert!(Alphabet::new(vec![Mark::MIN]).is_err());
        assert!(Alphabet::new(vec![-1, Mark::MIN, 1]).is_err());
        assert!(Alphabet::new(vec![Mark::MAX, -Mark::MAX]).is_ok());
    }

    #[test]
    fn rejects_oversized_alphabets() {
        let largest: Vec<Mark> = (1..=8).flat_map(|m| [-m, m]).collect();
        assert_eq!(
            Alphabet::new(largest).unwrap().number_of_labelings(),
            16_777_216
        );

        let too_many: Vec<Mark> = (1..=1000).flat_map(|m| [-m, m]).collect();
        assert!(Alphabet::new(too_many).is_err());
    }

    #[test]
    fn accepts_orientation_free_marks() {
        let alphabet = Alphabet::new(vec![0]).unwrap();
        assert_eq!(alphabet.labelings().collect::<Vec<_>>(), vec![[0; 6]]);
        assert!(Alphabet::new(vec![-1, 0, 1]).is_ok());
    }

    #[test]
    fn displays_as_a_set() {
        assert_eq!(Alphabet::with_diagonals().to_string(), "{-2, -1, 1, 2}");
    }
}
