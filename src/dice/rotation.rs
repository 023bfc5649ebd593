use itertools::Itertools;

use crate::labeling::{Labeling, Mark, Pose, BOTTOM, NUM_FACES, TOP};
use crate::Result;

pub const GROUP_ORDER: usize = 24;

// A flip brings whatever sits on this side face up to the top.
const FLIPS_TO_TOP: usize = 3;

/// One rotation of the die: face `i` receives the mark that was on
/// `permutation[i]`, multiplied by `signs[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub permutation: [usize; NUM_FACES],
    pub signs: [Mark; NUM_FACES],
}

/// Quarter turn about the vertical axis. The side faces cycle; the marks on
/// top and bottom lie across the axis and turn over.
pub const SPIN: Rotation = Rotation {
    permutation: [0, 2, 3, 4, 1, 5],
    signs: [-1, 1, 1, 1, 1, -1],
};

/// Quarter turn about a horizontal axis. The two faces pierced by the axis
/// keep their place but their marks turn over.
pub const FLIP: Rotation = Rotation {
    permutation: [3, 0, 2, 5, 4, 1],
    signs: [1, 1, -1, 1, -1, 1],
};

impl Rotation {
    pub fn identity() -> Rotation {
        Rotation::from(Pose::identity())
    }

    pub fn is_identity(&self) -> bool {
        *self == Rotation::identity()
    }

    pub fn apply(&self, labeling: &Labeling) -> Labeling {
        let mut rv = [0; NUM_FACES];
        for i in 0..NUM_FACES {
            rv[i] = labeling[self.permutation[i]] * self.signs[i];
        }
        rv
    }

    /// The rotation equal to applying `self` and then `next`.
    pub fn then(&self, next: &Rotation) -> Rotation {
        let mut permutation = [0; NUM_FACES];
        let mut signs = [1; NUM_FACES];
        for i in 0..NUM_FACES {
            let j = next.permutation[i];
            permutation[i] = self.permutation[j];
            signs[i] = self.signs[j] * next.signs[i];
        }
        Rotation { permutation, signs }
    }

    fn is_well_formed(&self) -> bool {
        self.permutation.iter().sorted().copied().eq(0..NUM_FACES)
            && self.signs.iter().all(|s| *s == 1 || *s == -1)
    }
}

impl From<Pose> for Rotation {
    fn from(pose: Pose) -> Rotation {
        Rotation {
            permutation: pose.positions,
            signs: pose.signs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RotationGroup {
    elements: Vec<Rotation>,
}

struct Walker {
    pose: Rotation,
}

impl Walker {
    fn turn(&mut self, mv: &Rotation) {
        self.pose = self.pose.then(mv);
    }

    fn face_at(&self, slot: usize) -> usize {
        self.pose.permutation[slot]
    }

    fn bring_to_top(&mut self, face: usize) -> Result<()> {
        if self.face_at(TOP) == face {
            return Ok(());
        }
        if self.face_at(BOTTOM) == face {
            self.turn(&FLIP);
            self.turn(&FLIP);
            return Ok(());
        }
        let mut spins = 0;
        while self.face_at(FLIPS_TO_TOP) != face {
            if spins == 4 {
                anyhow::bail!("face {} never reached slot {}", face, FLIPS_TO_TOP);
            }
            self.turn(&SPIN);
            spins += 1;
        }
        self.turn(&FLIP);
        Ok(())
    }
}

impl RotationGroup {
    /// Walks the die through every choice of top face, recording the four
    /// spins of each. Only valid because 6 * 4 matches the group order, so
    /// the result is checked for distinctness.
    pub fn generate() -> Result<RotationGroup> {
        let mut walker = Walker {
            pose: Rotation::identity(),
        };
        let mut elements = Vec::with_capacity(GROUP_ORDER);

        for face in 0..NUM_FACES {
            walker.bring_to_top(face)?;
            for _ in 0..4 {
                elements.push(walker.pose);
                walker.turn(&SPIN);
            }
        }

        RotationGroup::from_elements(elements)
    }

    pub fn from_elements(elements: Vec<Rotation>) -> Result<RotationGroup> {
        if elements.len() != GROUP_ORDER {
            anyhow::bail!(
                "expected {} rotations, generated {}",
                GROUP_ORDER,
                elements.len()
            );
        }
        if let Some(bad) = elements.iter().find(|r| !r.is_well_formed()) {
            anyhow::bail!("malformed rotation {:?}", bad);
        }
        if !elements.iter().any(|r| r.is_identity()) {
            anyhow::bail!("rotations do not include the identity");
        }
        let distinct = elements.iter().unique().count();
        if distinct != GROUP_ORDER {
            anyhow::bail!(
                "rotations are not pairwise distinct: only {} of {}",
                distinct,
                GROUP_ORDER
            );
        }
        Ok(RotationGroup { elements })
    }

    pub fn elements(&self) -> &[Rotation] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
