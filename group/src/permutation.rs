//! Permutations of a fixed, small number of labels.
//!
//! A [`Permutation<N>`] stores the image of each index `0..N`. It is `Copy`
//! and allocation-free; cycle decompositions and notation strings are derived
//! on demand.

use crate::alphabet::Alphabet;
use crate::error::NotationError;
use crate::notation::IDENTITY;

/// The cycle structure of a permutation of at most four labels.
///
/// The variant order is the display order used throughout the crate:
/// identity first, then transpositions, 3-cycles, double transpositions and
/// 4-cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CycleType {
    /// No label moves.
    Identity,
    /// A single 2-cycle, e.g. `(12)`.
    Transposition,
    /// A single 3-cycle, e.g. `(123)`.
    ThreeCycle,
    /// Two disjoint 2-cycles, e.g. `(12)(34)`.
    DoubleTransposition,
    /// A single 4-cycle, e.g. `(1234)`.
    FourCycle,
    /// Any shape that needs more than four labels.
    Other,
}

impl CycleType {
    /// Classifies a list of non-trivial cycle lengths.
    #[must_use]
    pub fn from_lengths(lengths: &[usize]) -> Self {
        match lengths {
            [] => CycleType::Identity,
            [2] => CycleType::Transposition,
            [3] => CycleType::ThreeCycle,
            [2, 2] => CycleType::DoubleTransposition,
            [4] => CycleType::FourCycle,
            _ => CycleType::Other,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CycleType::Identity => "identity",
            CycleType::Transposition => "transposition",
            CycleType::ThreeCycle => "3-cycle",
            CycleType::DoubleTransposition => "double transposition",
            CycleType::FourCycle => "4-cycle",
            CycleType::Other => "other",
        }
    }
}

/// A bijection of `0..N` onto itself.
///
/// # Example
///
/// ```
/// use quotient_group::{Permutation, alphabet::DIGITS};
///
/// let sigma = Permutation::from_images([1, 2, 0, 3]).unwrap();
/// assert_eq!(sigma.cycle_notation(&DIGITS), "(123)");
/// assert_eq!(sigma.one_line(&DIGITS), "2314");
/// assert_eq!(sigma.order(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Permutation<const N: usize> {
    images: [u8; N],
}

impl<const N: usize> Permutation<N> {
    /// The permutation that fixes every label.
    #[must_use]
    pub const fn identity() -> Self {
        let mut images = [0u8; N];
        let mut i = 0;
        while i < N {
            images[i] = i as u8;
            i += 1;
        }
        Self { images }
    }

    /// Builds a permutation from the image of each index.
    ///
    /// # Errors
    ///
    /// Returns [`NotationError::ImageOutOfRange`] if an image is `>= N` and
    /// [`NotationError::RepeatedImage`] if two indices share an image.
    pub fn from_images(images: [u8; N]) -> Result<Self, NotationError> {
        let mut hit = [false; N];
        for &image in &images {
            let slot = hit
                .get_mut(usize::from(image))
                .ok_or(NotationError::ImageOutOfRange { image, size: N })?;
            if *slot {
                return Err(NotationError::RepeatedImage(image));
            }
            *slot = true;
        }
        Ok(Self { images })
    }

    /// Builds a permutation from a slice of images.
    ///
    /// # Errors
    ///
    /// Returns [`NotationError::WrongLength`] if the slice does not hold
    /// exactly `N` images, otherwise as [`Permutation::from_images`].
    pub fn from_slice(images: &[u8]) -> Result<Self, NotationError> {
        let images: [u8; N] = images.try_into().map_err(|_| NotationError::WrongLength {
            expected: N,
            found: images.len(),
        })?;
        Self::from_images(images)
    }

    /// Builds a permutation from images already known to form a bijection.
    pub(crate) const fn from_images_unchecked(images: [u8; N]) -> Self {
        Self { images }
    }

    /// Returns the image of each index.
    #[must_use]
    pub const fn images(&self) -> &[u8; N] {
        &self.images
    }

    /// Returns the image of index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= N`.
    #[must_use]
    pub fn apply(&self, i: usize) -> usize {
        usize::from(self.images[i])
    }

    /// Returns `self ∘ other`, i.e. the permutation `i ↦ self(other(i))`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            images: other.images.map(|i| self.images[usize::from(i)]),
        }
    }

    /// Returns the inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut images = [0u8; N];
        for (i, &image) in self.images.iter().enumerate() {
            images[usize::from(image)] = i as u8;
        }
        Self { images }
    }

    /// Returns `self` composed with itself `k` times.
    #[must_use]
    pub fn pow(&self, k: u32) -> Self {
        let mut result = Self::identity();
        let mut base = *self;
        let mut exp = k;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.compose(&base);
            }
            base = base.compose(&base);
            exp >>= 1;
        }
        result
    }

    /// Returns true if every label is fixed.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Decomposes into disjoint cycles, singletons included.
    ///
    /// Each cycle starts at its smallest index and cycles are ordered by
    /// their first index.
    #[must_use]
    pub fn find_cycles(&self) -> Vec<Vec<usize>> {
        let mut visited = [false; N];
        let mut cycles = Vec::new();
        for start in 0..N {
            if visited[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut j = start;
            while !visited[j] {
                visited[j] = true;
                cycle.push(j);
                j = self.apply(j);
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Returns the non-trivial cycles (singletons omitted), in canonical order.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        self.find_cycles()
            .into_iter()
            .filter(|c| c.len() > 1)
            .collect()
    }

    /// Classifies the cycle structure.
    #[must_use]
    pub fn cycle_type(&self) -> CycleType {
        let mut lengths: Vec<usize> = self.cycles().iter().map(Vec::len).collect();
        lengths.sort_unstable();
        CycleType::from_lengths(&lengths)
    }

    /// Returns the indices this permutation fixes.
    #[must_use]
    pub fn fixed_points(&self) -> Vec<usize> {
        (0..N).filter(|&i| self.apply(i) == i).collect()
    }

    /// Returns the least `k >= 1` with `self^k` the identity.
    #[must_use]
    pub fn order(&self) -> usize {
        self.find_cycles()
            .iter()
            .map(Vec::len)
            .fold(1, |acc, len| acc / gcd(acc, len) * len)
    }

    /// Returns `1` for even permutations and `-1` for odd ones.
    #[must_use]
    pub fn sign(&self) -> i8 {
        let transpositions: usize = self.cycles().iter().map(|c| c.len() - 1).sum();
        if transpositions % 2 == 0 {
            1
        } else {
            -1
        }
    }

    /// Sort key giving the display order: by [`CycleType`], then by cycles
    /// compared label by label.
    #[must_use]
    pub fn canonical_key(&self) -> (CycleType, Vec<Vec<usize>>) {
        (self.cycle_type(), self.cycles())
    }

    /// Returns all `N!` permutations in display order.
    ///
    /// For `N = 4` this is `id, (12), (13), (14), (23), (24), (34), (123),
    /// …, (12)(34), (13)(24), (14)(23), (1234), …, (1432)`.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut images = Self::identity().images;
        let mut all = vec![Self { images }];
        while next_lexicographic(&mut images) {
            all.push(Self { images });
        }
        all.sort_by_cached_key(Self::canonical_key);
        all
    }

    /// Writes the permutation as a product of disjoint cycles, singletons
    /// omitted; the identity is written `"() = id"`.
    #[must_use]
    pub fn cycle_notation(&self, alphabet: &Alphabet<N>) -> String {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return IDENTITY.to_string();
        }
        let mut out = String::new();
        for cycle in cycles {
            out.push('(');
            out.extend(cycle.into_iter().map(|i| alphabet.symbol(i)));
            out.push(')');
        }
        out
    }

    /// Writes the images of the labels in order (`"2314"`).
    #[must_use]
    pub fn one_line(&self, alphabet: &Alphabet<N>) -> String {
        self.images
            .iter()
            .map(|&i| alphabet.symbol(usize::from(i)))
            .collect()
    }

    /// Returns the pair `(x, σ(x))` for every label `x`, in alphabet order.
    #[must_use]
    pub fn action(&self, alphabet: &Alphabet<N>) -> [(char, char); N] {
        core::array::from_fn(|i| (alphabet.symbol(i), alphabet.symbol(self.apply(i))))
    }
}

impl<const N: usize> Default for Permutation<N> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Permutation<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(self.images.as_slice(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Permutation<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let images = <Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_slice(&images).map_err(serde::de::Error::custom)
    }
}

/// Advances `images` to the next permutation in lexicographic order.
/// Returns false once the last one has been reached.
fn next_lexicographic<const N: usize>(images: &mut [u8; N]) -> bool {
    if N < 2 {
        return false;
    }
    let mut i = N - 1;
    while i > 0 && images[i - 1] >= images[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = N - 1;
    while images[j] <= images[i - 1] {
        j -= 1;
    }
    images.swap(i - 1, j);
    images[i..].reverse();
    true
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
