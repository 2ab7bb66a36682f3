use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::engine::qrng_client::QrngClient;
use crate::engine::random_source::{LocalRandom, RandomSource};

/// Consecutive rejected samples before the service is treated as broken.
/// An honest uniform source gets here with probability below 2^-64.
pub const MAX_REJECTIONS: usize = 64;

/// Remote QRNG source. Consumes uint16 batches fetched over HTTP and switches
/// permanently to its local fallback after the first failed request, or when
/// the service keeps returning values that rejection sampling cannot use.
pub struct QuantumRandom {
    client: QrngClient,
    batch_size: usize,
    pending: VecDeque<u16>,
    fallback: LocalRandom,
    degraded: Option<String>,
}

impl QuantumRandom {
    pub fn new(client: QrngClient, batch_size: usize, fallback: LocalRandom) -> Self {
        Self {
            client,
            batch_size,
            pending: VecDeque::new(),
            fallback,
            degraded: None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    /// Why the fallback took over, if it did.
    pub fn degraded_reason(&self) -> Option<&str> {
        self.degraded.as_deref()
    }

    fn next_u16(&mut self) -> Option<u16> {
        if self.degraded.is_some() {
            return None;
        }

        if self.pending.is_empty() {
            match self.client.fetch_u16(self.batch_size) {
                Ok(values) => {
                    debug!(count = values.len(), "QRNG batch ready");
                    self.pending.extend(values);
                }
                Err(e) => {
                    self.degrade(e.to_string());
                    return None;
                }
            }
        }

        self.pending.pop_front()
    }

    fn degrade(&mut self, reason: String) {
        warn!(
            endpoint = self.client.endpoint(),
            error = %reason,
            "QRNG unavailable, falling back to local randomness"
        );
        self.degraded = Some(reason);
        self.pending.clear();
    }

    /// Rejection-sample a value below `bound` from `words` concatenated uint16s.
    /// Gives up and degrades after `MAX_REJECTIONS` misses in a row.
    fn draw_below(&mut self, bound: u64, words: u32) -> Option<u64> {
        let range = 1u64 << (16 * words);
        let zone = range - range % bound;

        for _ in 0..MAX_REJECTIONS {
            let mut v = 0u64;
            for _ in 0..words {
                v = (v << 16) | u64::from(self.next_u16()?);
            }
            if v < zone {
                return Some(v % bound);
            }
        }

        self.degrade(format!(
            "{} consecutive QRNG values rejected for bound {}",
            MAX_REJECTIONS, bound
        ));
        None
    }
}

impl RandomSource for QuantumRandom {
    fn next_int(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }

        let bound64 = bound as u64;
        let words = if bound64 <= 1 << 16 {
            1
        } else if bound64 <= 1 << 32 {
            2
        } else {
            return self.fallback.next_int(bound);
        };

        match self.draw_below(bound64, words) {
            Some(v) => v as usize,
            None => self.fallback.next_int(bound),
        }
    }

    fn describe(&self) -> &'static str {
        if self.is_degraded() {
            "quantum (local fallback)"
        } else {
            "quantum"
        }
    }
}
