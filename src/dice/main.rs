// How many ways can you mark a die?
//
// Each face of a blank die gets one mark through its middle, parallel to one
// pair of edges. Two markings are the same if a rotation takes one to the
// other. Extra credit: a face may also be marked along either diagonal.

mod config;
mod dedup;
mod labeling;
mod orbit;
mod rotation;

use itertools::Itertools;

use config::RunConfig;
use dedup::{burnside_count, find_unique};
use labeling::Alphabet;
use orbit::stabilizer_size;
use rotation::RotationGroup;

type Result<T> = std::result::Result<T, anyhow::Error>;

fn solve(alphabet: &Alphabet, group: &RotationGroup) -> Result<usize> {
    let reps = find_unique(alphabet, group)?;
    let count = reps.len();

    if count < 1 || count > alphabet.number_of_labelings() {
        anyhow::bail!(
            "{} markings is outside [1, {}]",
            count,
            alphabet.number_of_labelings()
        );
    }

    let expected = burnside_count(alphabet, group)?;
    if expected != count {
        anyhow::bail!(
            "enumeration found {} markings but Burnside's lemma says {}",
            count,
            expected
        );
    }
    let symmetric = reps
        .labelings()
        .iter()
        .filter(|l| stabilizer_size(l, group) > 1)
        .count();
    eprintln!(
        "Marks {}: {} candidates, {} classes ({} with symmetry), Burnside agrees",
        alphabet,
        alphabet.number_of_labelings(),
        count,
        symmetric
    );

    println!("Representatives for marks {}:", alphabet);
    for labeling in reps.labelings() {
        println!(
            "  [{}]",
            labeling.iter().map(|m| format!("{:>2}", m)).join(" ")
        );
    }
    println!("Unique markings for marks {}: {}", alphabet, count);

    Ok(count)
}

fn main() -> Result<()> {
    let config = RunConfig::from_env()?;

    let group = RotationGroup::generate()?;
    eprintln!("Rotation group has {} elements", group.len());

    for alphabet in &config.alphabets {
        solve(alphabet, &group)?;
    }

    Ok(())
}
