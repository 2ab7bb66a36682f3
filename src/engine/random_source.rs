use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can hand out uniformly distributed indices.
pub trait RandomSource {
    /// Returns an integer in `[0, bound)`. Bounds of 0 and 1 yield 0.
    fn next_int(&mut self, bound: usize) -> usize;

    fn next_bool(&mut self) -> bool {
        self.next_int(2) == 1
    }

    /// Short label for logs.
    fn describe(&self) -> &'static str;
}

/// Uniform in-place Fisher-Yates shuffle driven by `source`.
pub fn shuffle<T>(source: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = source.next_int(i + 1);
        items.swap(i, j);
    }
}

/// Local pseudo-random source backed by `StdRng`.
pub struct LocalRandom {
    rng: StdRng,
}

impl LocalRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for LocalRandom {
    fn next_int(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    fn describe(&self) -> &'static str {
        "local"
    }
}

/// Replays a fixed sequence, cycling. Values are reduced modulo the bound.
#[cfg(test)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }

    pub fn draws(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound: usize) -> usize {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        if bound <= 1 {
            0
        } else {
            v % bound
        }
    }

    fn describe(&self) -> &'static str {
        "scripted"
    }
}
