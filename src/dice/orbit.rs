use crate::labeling::Labeling;
use crate::rotation::RotationGroup;

/// Every image of `labeling` under the group, in group order. Labelings with
/// a nontrivial stabilizer show up more than once.
pub fn orbit(labeling: &Labeling, group: &RotationGroup) -> Vec<Labeling> {
    group
        .elements()
        .iter()
        .map(|rotation| rotation.apply(labeling))
        .collect()
}

/// Least orbit member. Two labelings are rotations of each other exactly when
/// their canonical forms agree.
pub fn canonical_form(labeling: &Labeling, group: &RotationGroup) -> Labeling {
    group
        .elements()
        .iter()
        .map(|rotation| rotation.apply(labeling))
        .min()
        .unwrap_or(*labeling)
}

pub fn stabilizer_size(labeling: &Labeling, group: &RotationGroup) -> usize {
    group
        .elements()
        .iter()
        .filter(|rotation| rotation.apply(labeling) == *labeling)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labeling::Alphabet;
    use crate::rotation::{FLIP, GROUP_ORDER, SPIN};
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    #[test]
    fn orbit_follows_group_order() {
        let group = RotationGroup::generate().unwrap();
        let labeling = [1, 2, -1, -2, 1, 2];
        let members = orbit(&labeling, &group);
        assert_eq!(members.len(), GROUP_ORDER);
        assert_eq!(members[0], labeling);
        for (member, rotation) in members.iter().zip(group.elements()) {
            assert_eq!(*member, rotation.apply(&labeling));
        }
    }

    #[test]
    fn distinct_orbit_size_divides_group_order() {
        let group = RotationGroup::generate().unwrap();
        let mut rng = StdRng::seed_from_u64(15);
        let candidates: Vec<Labeling> = Alphabet::with_diagonals().labelings().collect();
        for labeling in candidates.choose_multiple(&mut rng, 200) {
            let distinct = orbit(labeling, &group).into_iter().unique().count();
            assert_eq!(GROUP_ORDER % distinct, 0, "{:?}", labeling);
            assert_eq!(distinct * stabilizer_size(labeling, &group), GROUP_ORDER);
        }
    }

    #[test]
    fn rotated_labelings_share_a_canonical_form() {
        let group = RotationGroup::generate().unwrap();
        let labeling = [-1, 2, 1, 1, -2, -1];
        let canonical = canonical_form(&labeling, &group);
        assert!(orbit(&labeling, &group).contains(&canonical));
        for turned in [SPIN.apply(&labeling), FLIP.apply(&labeling)] {
            assert_eq!(canonical_form(&turned, &group), canonical);
        }
    }

    #[test]
    fn uniform_orientation_free_labeling_is_fully_symmetric() {
        let group = RotationGroup::generate().unwrap();
        let labeling = [0; 6];
        assert_eq!(stabilizer_size(&labeling, &group), GROUP_ORDER);
        assert!(orbit(&labeling, &group).iter().all(|l| *l == labeling));
    }

    #[test]
    fn uniform_oriented_labeling_is_not_fully_symmetric() {
        let group = RotationGroup::generate().unwrap();
        let labeling = [1; 6];
        assert!(stabilizer_size(&labeling, &group) < GROUP_ORDER);
        assert!(orbit(&labeling, &group).iter().any(|l| *l != labeling));
    }
}
