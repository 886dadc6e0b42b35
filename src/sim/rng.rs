// rng.rs - xorshift32
//
// Cheap, seedable, and good enough for scattering pixels.

pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        // xorshift never leaves zero
        Self { state: if seed == 0 { 0xDEADBEEF } else { seed } }
    }

    /// Uniform in [0, 1)
    #[inline(always)]
    pub fn next(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f64 * (1.0 / 16777216.0)
    }

    /// Uniform in [lo, hi)
    #[inline]
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next() * (hi - lo)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() { return None; }
        let i = (self.next() * items.len() as f64) as usize;
        items.get(i.min(items.len() - 1))
    }
}
