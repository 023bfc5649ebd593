//! Which alphabets a run enumerates.
//!
//! Defaults to the two puzzle alphabets. `DICE_ALPHABETS` overrides them with
//! `;`-separated alphabets of `,`-separated marks, e.g. `-1,1;-2,-1,1,2`.

use anyhow::Context;

use crate::labeling::{Alphabet, Mark};
use crate::Result;

pub const ALPHABETS_VAR: &str = "DICE_ALPHABETS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub alphabets: Vec<Alphabet>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            alphabets: vec![Alphabet::binary(), Alphabet::with_diagonals()],
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Result<RunConfig> {
        match std::env::var(ALPHABETS_VAR) {
            Ok(spec) => RunConfig::parse(&spec).with_context(|| format!("bad {}", ALPHABETS_VAR)),
            Err(std::env::VarError::NotPresent) => Ok(RunConfig::default()),
            Err(e) => Err(e).with_context(|| format!("cannot read {}", ALPHABETS_VAR)),
        }
    }

    pub fn parse(spec: &str) -> Result<RunConfig> {
        let alphabets = spec
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_alphabet)
            .collect::<Result<Vec<Alphabet>>>()?;

        if alphabets.is_empty() {
            anyhow::bail!("no alphabets in {:?}", spec);
        }
        Ok(RunConfig { alphabets })
    }
}

fn parse_alphabet(s: &str) -> Result<Alphabet> {
    let marks = s
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<Mark>()
                .with_context(|| format!("invalid mark {:?} in {:?}", token, s))
        })
        .collect::<Result<Vec<Mark>>>()?;
    Alphabet::new(marks)
}
