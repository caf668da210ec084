//! # Random Bytes
//!
//! The byte supply behind random string generation. The encoder only asks a
//! [`RandomSource`] to fill a buffer; where the bytes come from is up to the
//! source.
//!
//! [`SystemRandom`] reads the operating system CSPRNG. If that fails it falls
//! back to a fast, non-cryptographic generator rather than failing, and says
//! so through the returned [`Strength`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{
    rngs::{OsRng, SmallRng},
    RngCore, SeedableRng, TryRngCore,
};

/// Which generator produced a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// Operating system CSPRNG
    Secure,
    /// Non-cryptographic fallback generator
    Fallback,
}

impl Strength {
    pub const fn is_secure(self) -> bool {
        matches!(self, Self::Secure)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secure => f.write_str("secure"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Anything that can fill a buffer with random bytes.
///
/// Implementations must always fill the whole buffer. A source that cannot
/// produce strong randomness degrades and reports [`Strength::Fallback`].
pub trait RandomSource {
    fn fill(&mut self, buf: &mut [u8]) -> Strength;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill(&mut self, buf: &mut [u8]) -> Strength {
        (**self).fill(buf)
    }
}

/// Operating system randomness with a non-failing fallback.
#[derive(Debug, Clone)]
pub struct SystemRandom {
    prefer_secure: bool,
    fallback: Option<SmallRng>,
}

impl SystemRandom {
    /// Uses the OS CSPRNG, falling back only if it fails.
    pub const fn new() -> Self {
        Self {
            prefer_secure: true,
            fallback: None,
        }
    }

    /// Skips the OS CSPRNG and always uses the fallback generator.
    pub const fn insecure() -> Self {
        Self {
            prefer_secure: false,
            fallback: None,
        }
    }

    /// Whether the OS CSPRNG is tried first.
    pub const fn prefers_secure(&self) -> bool {
        self.prefer_secure
    }

    fn fallback_rng(&mut self) -> &mut SmallRng {
        self.fallback
            .get_or_insert_with(|| SmallRng::seed_from_u64(fallback_seed()))
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Strength {
        if self.prefer_secure && OsRng.try_fill_bytes(buf).is_ok() {
            return Strength::Secure;
        }
        self.fallback_rng().fill_bytes(buf);
        Strength::Fallback
    }
}

/// Seed for the fallback generator: wall clock mixed with a stack address.
/// Only used when the OS generator is unavailable or declined.
#[allow(clippy::cast_possible_truncation)]
fn fallback_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    let marker = 0u8;
    let address = std::ptr::addr_of!(marker) as usize as u64;
    nanos ^ address.rotate_left(32)
}
