use std::collections::HashSet;

use crate::labeling::{Alphabet, Labeling};
use crate::orbit::{canonical_form, orbit};
use crate::rotation::RotationGroup;
use crate::Result;

/// One labeling per equivalence class, in the order the classes were first
/// met. Membership goes through the least orbit member of each class.
#[derive(Debug, Clone, Default)]
pub struct Representatives {
    labelings: Vec<Labeling>,
    kept: HashSet<Labeling>,
    canonical: HashSet<Labeling>,
}

impl Representatives {
    pub fn labelings(&self) -> &[Labeling] {
        &self.labelings
    }

    pub fn len(&self) -> usize {
        self.labelings.len()
    }

    /// Keeps `candidate` unless it is a rotation of something already kept.
    /// Returns whether it was kept.
    fn offer(
        &mut self,
        candidate: Labeling,
        alphabet: &Alphabet,
        group: &RotationGroup,
    ) -> Result<bool> {
        if self.kept.contains(&candidate) {
            return Ok(false);
        }

        let members = orbit(&candidate, group);
        if let Some(stray) = members.iter().find(|m| !alphabet.admits(m)) {
            anyhow::bail!(
                "rotating {:?} produced {:?}, which leaves the alphabet {}",
                candidate,
                stray,
                alphabet
            );
        }

        if !self.canonical.insert(canonical_form(&candidate, group)) {
            return Ok(false);
        }

        self.labelings.push(candidate);
        self.kept.insert(candidate);
        Ok(true)
    }
}

/// Reduces every labeling over `alphabet` to one representative per class.
pub fn find_unique(alphabet: &Alphabet, group: &RotationGroup) -> Result<Representatives> {
    find_unique_among(alphabet.labelings(), alphabet, group)
}

/// Like [`find_unique`], but over caller-chosen candidates in caller-chosen
/// order. The first candidate met from each class becomes its representative.
pub fn find_unique_among<I>(
    candidates: I,
    alphabet: &Alphabet,
    group: &RotationGroup,
) -> Result<Representatives>
where
    I: IntoIterator<Item = Labeling>,
{
    let mut rv = Representatives::default();
    for candidate in candidates {
        if !alphabet.admits(&candidate) {
            anyhow::bail!(
                "candidate {:?} is not over alphabet {}",
                candidate,
                alphabet
            );
        }
        rv.offer(candidate, alphabet, group)?;
    }
    Ok(rv)
}

/// Counts classes without enumerating them: the average number of labelings
/// each rotation leaves unchanged.
pub fn burnside_count(alphabet: &Alphabet, group: &RotationGroup) -> Result<usize> {
    let fixed: usize = group
        .elements()
        .iter()
        .map(|rotation| {
            alphabet
                .labelings()
                .filter(|labeling| rotation.apply(labeling) == *labeling)
                .count()
        })
        .sum();

    if fixed % group.len() != 0 {
        anyhow::bail!(
            "{} fixed points do not split evenly over {} rotations",
            fixed,
            group.len()
        );
    }
    Ok(fixed / group.len())
}
