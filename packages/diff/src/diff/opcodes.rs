//! LCS-based edit-script computation.
//!
//! A stateless sequence comparison: the longest common subsequence of
//! identical elements defines the `equal` runs, and everything between
//! consecutive equal runs becomes one `delete`, `insert`, or `replace`
//! opcode covering contiguous index ranges on both sequences. The
//! same routine drives unit-level alignment and word-level
//! highlighting.

/// Kind of region produced by sequence comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpTag {
    /// Both ranges hold identical elements.
    Equal,

    /// Elements present only in the first sequence.
    Delete,

    /// Elements present only in the second sequence.
    Insert,

    /// Both ranges are non-empty and differ; lengths may be unequal.
    Replace,
}

/// One region of an edit script.
///
/// Covers `[a_start, a_end)` in the first sequence and
/// `[b_start, b_end)` in the second. Opcodes partition both
/// sequences: consecutive opcodes meet exactly, the first starts at
/// `(0, 0)` and the last ends at `(a.len(), b.len())`. Two empty
/// sequences produce an empty script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    /// Length of the range on the first sequence.
    #[must_use]
    pub fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    /// Length of the range on the second sequence.
    #[must_use]
    pub fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }
}

/// Compute the LCS edit script between two sequences.
///
/// Runs in O(n·m) time and memory; callers comparing pathologically
/// large sequences must impose their own deadline around the call.
#[must_use]
pub fn compute_opcodes<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Opcode> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }

    let matches = lcs_matches(a, b);
    opcodes_from_matches(&matches, a.len(), b.len())
}

/// Index pairs `(i, j)` with `a[i] == b[j]`, forming a longest common
/// subsequence in increasing order on both indices.
fn lcs_matches<T: PartialEq>(a: &[T], b: &[T]) -> Vec<(usize, usize)> {
    let n = a.len();
    let m = b.len();

    // lengths[i][j] = LCS length of a[i..] and b[j..], flattened.
    // Row width is m + 1 so the sentinel row/column stays zero.
    let width = m + 1;
    let mut lengths = vec![0u32; (n + 1) * width];

    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lengths[i * width + j] = if a[i] == b[j] {
                lengths[(i + 1) * width + j + 1] + 1
            } else {
                lengths[(i + 1) * width + j].max(lengths[i * width + j + 1])
            };
        }
    }

    // Walk the table forward, preferring to advance on the first
    // sequence when both directions preserve the LCS length. This
    // makes tie-breaking deterministic.
    let mut matches = Vec::with_capacity(lengths[0] as usize);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            matches.push((i, j));
            i += 1;
            j += 1;
        } else if lengths[(i + 1) * width + j] >= lengths[i * width + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }

    matches
}

/// Convert LCS match pairs into a full edit script.
fn opcodes_from_matches(matches: &[(usize, usize)], n: usize, m: usize) -> Vec<Opcode> {
    let mut opcodes = Vec::new();
    let (mut i, mut j) = (0, 0);

    let mut idx = 0;
    while idx <= matches.len() {
        // Next equal run: maximal run of consecutive match pairs, or
        // the (n, m) sentinel once matches are exhausted
        let (run_start_a, run_start_b, run_len) = if idx < matches.len() {
            let (ra, rb) = matches[idx];
            let mut len = 1;
            while idx + len < matches.len()
                && matches[idx + len] == (ra + len, rb + len)
            {
                len += 1;
            }
            (ra, rb, len)
        } else {
            (n, m, 0)
        };
        idx += run_len.max(1);

        // Region between the previous equal run and this one
        if i < run_start_a || j < run_start_b {
            let tag = if i == run_start_a {
                OpTag::Insert
            } else if j == run_start_b {
                OpTag::Delete
            } else {
                OpTag::Replace
            };
            opcodes.push(Opcode {
                tag,
                a_start: i,
                a_end: run_start_a,
                b_start: j,
                b_end: run_start_b,
            });
        }

        if run_len > 0 {
            opcodes.push(Opcode {
                tag: OpTag::Equal,
                a_start: run_start_a,
                a_end: run_start_a + run_len,
                b_start: run_start_b,
                b_end: run_start_b + run_len,
            });
            i = run_start_a + run_len;
            j = run_start_b + run_len;
        } else {
            i = run_start_a;
            j = run_start_b;
        }
    }

    opcodes
}
