use lazy_static::lazy_static;

/// Above this many source elements a request that keeps everything is
/// answered with a full sort instead of bounded insertions.
pub const FULL_SORT_THRESHOLD: usize = 1000;

/// The stream collector can't look at the source size before allocating,
/// so the limit it accepts is capped.
pub const COLLECTOR_LIMIT_CEILING: usize = 100_000;

/// Selectors never reserve more than this many slots up front,
/// the buffer grows towards its capacity as elements arrive.
pub const PREALLOCATE_LIMIT: usize = 4096;

/// Upper bound accepted for `SelectionConfig::num_threads`.
pub const MAX_SELECTION_THREADS: usize = 1024;

lazy_static! {
    /// Number of worker threads used by a parallel selection when the config leaves it at `0`.
    /// Scaled according to the number of logical CPU cores.
    pub static ref DEFAULT_SELECTION_THREADS: usize = num_cpus::get().clamp(1, 128);
}
