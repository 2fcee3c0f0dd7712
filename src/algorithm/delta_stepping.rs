use std::fmt::Debug;
use num_traits::{Float, NumCast, Zero};

use crate::algorithm::requests::{self, EdgeClass, Requests};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BucketCollection, DistanceTable};
use crate::graph::Graph;
use crate::{ConfigError, Error, Result};

/// Counters collected while a run drains its buckets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Bucket indices processed to quiescence
    pub outer_rounds: usize,
    /// Light-edge phases across all rounds
    pub light_phases: usize,
    /// Coalesced light-edge requests handed to `relax`
    pub light_requests: usize,
    /// Coalesced heavy-edge requests handed to `relax`
    pub heavy_requests: usize,
    /// Relaxations that lowered a distance
    pub relaxations: usize,
    /// Largest bucket index ever populated
    pub max_bucket_index: usize,
}

/// Mutable state of one Δ-stepping run
///
/// The context owns the distance table, the predecessor links and the bucket
/// collection. `relax` is the only method that writes them, and it keeps every
/// vertex with a tentative distance `d` either detached or in bucket `⌊d/Δ⌋`.
#[derive(Debug, Clone)]
pub struct SteppingContext<W>
where
    W: Float + Zero + Debug + Copy,
{
    delta: W,
    distances: DistanceTable<W>,
    predecessors: Vec<Option<usize>>,
    buckets: BucketCollection,
    stats: RunStats,
    /// Minimum phase size for the parallel request pass, `None` keeps it sequential
    parallel_threshold: Option<usize>,
}

impl<W> SteppingContext<W>
where
    W: Float + Zero + Debug + Copy + Send + Sync,
{
    /// Creates an empty context for `vertex_count` vertices
    ///
    /// `delta` must be finite and positive; `DeltaStepping::prepare` checks this
    /// before building a context.
    pub fn new(vertex_count: usize, delta: W) -> Self {
        SteppingContext {
            delta,
            distances: DistanceTable::new(vertex_count),
            predecessors: vec![None; vertex_count],
            buckets: BucketCollection::new(vertex_count),
            stats: RunStats::default(),
            parallel_threshold: None,
        }
    }

    /// Runs request passes of at least `threshold` vertices on the rayon pool
    pub fn with_parallel_threshold(mut self, threshold: Option<usize>) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn delta(&self) -> W {
        self.delta
    }

    /// Bucket index `⌊distance / Δ⌋`, saturating at `usize::MAX`
    pub fn bucket_index(&self, distance: W) -> usize {
        (distance / self.delta)
            .floor()
            .to_usize()
            .unwrap_or(usize::MAX)
    }

    /// Offers `candidate` as a new distance for `vertex`
    ///
    /// Returns true if the distance dropped. A candidate that is not strictly
    /// smaller than the current estimate changes nothing. Otherwise the vertex
    /// leaves its old bucket (if it is still in one) and joins bucket
    /// `⌊candidate/Δ⌋`.
    pub fn relax(&mut self, vertex: usize, candidate: W, predecessor: Option<usize>) -> bool {
        debug_assert!(candidate >= W::zero(), "negative candidate {:?}", candidate);

        if !self.distances.improves(vertex, candidate) {
            return false;
        }

        let new_bucket = self.bucket_index(candidate);
        if let Some(old) = self.distances.get(vertex) {
            if self.bucket_index(old) != new_bucket {
                // the vertex may be detached mid-phase, absence is fine
                self.buckets.remove(vertex);
            }
        }
        self.buckets.insert(vertex, new_bucket);
        self.distances.set(vertex, candidate);
        self.predecessors[vertex] = predecessor;

        self.stats.relaxations += 1;
        self.stats.max_bucket_index = self.stats.max_bucket_index.max(new_bucket);
        true
    }

    /// Scans the `class` edges leaving `vertices` against the current distances
    pub fn find_requests<G>(&self, graph: &G, vertices: &[usize], class: EdgeClass) -> Requests<W>
    where
        G: Graph<W> + Sync + ?Sized,
    {
        match self.parallel_threshold {
            Some(threshold) if vertices.len() >= threshold => {
                requests::par_find_requests(graph, &self.distances, vertices, class, self.delta)
            }
            _ => requests::find_requests(graph, &self.distances, vertices, class, self.delta),
        }
    }

    /// Applies every request through `relax`
    pub fn relax_requests(&mut self, requests: Requests<W>) {
        for (vertex, request) in requests {
            self.relax(vertex, request.distance, Some(request.predecessor));
        }
    }

    /// Processes the smallest non-empty bucket to quiescence
    ///
    /// Light edges are relaxed phase by phase until the bucket stays empty, then
    /// heavy edges of every vertex drained in this round are relaxed once.
    /// Returns the processed bucket index, or `None` once every bucket is empty.
    pub fn step_round<G>(&mut self, graph: &G) -> Option<usize>
    where
        G: Graph<W> + Sync + ?Sized,
    {
        let index = self.buckets.min_index()?;
        let mut settled: Vec<usize> = Vec::new();

        while self.buckets.contains_bucket(index) {
            // detach the whole bucket before any request of this phase is applied
            let phase = self.buckets.take(index);
            let requests = self.find_requests(graph, &phase, EdgeClass::Light);
            log::trace!(
                "bucket {}: phase of {} vertices produced {} light requests",
                index,
                phase.len(),
                requests.len()
            );

            settled.extend_from_slice(&phase);
            self.stats.light_phases += 1;
            self.stats.light_requests += requests.len();
            self.relax_requests(requests);
        }

        settled.sort_unstable();
        settled.dedup();

        let requests = self.find_requests(graph, &settled, EdgeClass::Heavy);
        log::debug!(
            "bucket {} settled {} vertices, {} heavy requests",
            index,
            settled.len(),
            requests.len()
        );
        self.stats.heavy_requests += requests.len();
        self.relax_requests(requests);

        self.stats.outer_rounds += 1;
        Some(index)
    }

    /// Drains buckets until none is left
    pub fn run_to_completion<G>(&mut self, graph: &G)
    where
        G: Graph<W> + Sync + ?Sized,
    {
        while self.step_round(graph).is_some() {}
    }

    /// True once the bucket collection is empty
    pub fn is_done(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Current estimate for `vertex`, `None` while unreached
    pub fn distance_of(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex)
    }

    pub fn bucket_of(&self, vertex: usize) -> Option<usize> {
        self.buckets.bucket_of(vertex)
    }

    pub fn distances(&self) -> &DistanceTable<W> {
        &self.distances
    }

    pub fn buckets(&self) -> &BucketCollection {
        &self.buckets
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Checks that bucket membership agrees with the distance table
    ///
    /// Every bucketed vertex has a finite distance whose bucket index is the
    /// bucket it sits in, and unreached vertices are in no bucket.
    pub fn bucket_invariant_holds(&self) -> bool {
        let members_agree = self.buckets.iter().all(|(index, members)| {
            !members.is_empty()
                && members.iter().all(|&v| {
                    self.buckets.bucket_of(v) == Some(index)
                        && self.distances.get(v).map(|d| self.bucket_index(d)) == Some(index)
                })
        });

        let unreached_detached = (0..self.distances.len())
            .filter(|&v| self.distances.get(v).is_none())
            .all(|v| self.buckets.bucket_of(v).is_none());

        members_agree && unreached_detached
    }

    /// Consumes the context into a result rooted at `source`
    pub fn into_result(self, source: usize) -> (ShortestPathResult<W>, RunStats) {
        let result = ShortestPathResult {
            distances: self.distances.into_vec(),
            predecessors: self.predecessors,
            source,
        };
        (result, self.stats)
    }
}

/// Δ-stepping single-source shortest paths
#[derive(Debug, Clone)]
pub struct DeltaStepping {
    /// Bucket width and light/heavy boundary
    delta: f64,
    /// Whether request passes may run on the rayon pool
    parallel: bool,
    /// Phase size below which the sequential pass is used anyway
    parallel_threshold: usize,
}

impl DeltaStepping {
    /// Create a new Δ-stepping instance with bucket width `delta`
    pub fn new(delta: f64) -> Self {
        DeltaStepping {
            delta,
            parallel: false,
            parallel_threshold: 1_024,
        }
    }

    /// Enable or disable parallel request generation
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Set the minimum phase size handed to the parallel pass
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Validates the inputs and returns a context holding only the source
    ///
    /// Fails on a non-positive or non-finite Δ, a missing source, negative or
    /// NaN edge weights, and edges pointing outside the graph. Nothing is
    /// relaxed before every check has passed.
    pub fn prepare<W, G>(&self, graph: &G, source: usize) -> Result<SteppingContext<W>>
    where
        W: Float + Zero + Debug + Copy + Send + Sync,
        G: Graph<W> + Sync + ?Sized,
    {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(ConfigError::NonPositiveDelta(self.delta).into());
        }
        let delta = <W as NumCast>::from(self.delta)
            .filter(|d| *d > W::zero() && d.is_finite())
            .ok_or(ConfigError::UnrepresentableDelta(self.delta))?;
        if !in_vertex_range(graph, source) {
            return Err(ConfigError::SourceNotFound(source).into());
        }
        validate_edges(graph)?;

        let threshold = self.parallel.then_some(self.parallel_threshold);
        let mut context = SteppingContext::new(graph.vertex_count(), delta).with_parallel_threshold(threshold);
        context.relax(source, W::zero(), None);
        Ok(context)
    }

    /// Computes distances from `source` and returns them with the run counters
    pub fn run<W, G>(&self, graph: &G, source: usize) -> Result<(ShortestPathResult<W>, RunStats)>
    where
        W: Float + Zero + Debug + Copy + Send + Sync,
        G: Graph<W> + Sync + ?Sized,
    {
        let mut context = self.prepare(graph, source)?;
        context.run_to_completion(graph);

        let (result, stats) = context.into_result(source);
        log::info!(
            "delta-stepping (delta = {}) reached {} of {} vertices in {} rounds, {} light phases",
            self.delta,
            result.reachable_count(),
            result.distances.len(),
            stats.outer_rounds,
            stats.light_phases
        );
        Ok((result, stats))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for DeltaStepping
where
    W: Float + Zero + Debug + Copy + Send + Sync,
    G: Graph<W> + Sync,
{
    fn name(&self) -> &'static str {
        "Delta-stepping"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.run(graph, source).map(|(result, _)| result)
    }
}

/// Shortest distances from `source` with bucket width `delta`
pub fn delta_stepping<W, G>(graph: &G, source: usize, delta: f64) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy + Send + Sync,
    G: Graph<W> + Sync + ?Sized,
{
    DeltaStepping::new(delta).run(graph, source).map(|(result, _)| result)
}

/// The context sizes its tables from `vertex_count()`, so ids must fall in `vertices()`
fn in_vertex_range<W, G>(graph: &G, vertex: usize) -> bool
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    vertex < graph.vertex_count() && graph.has_vertex(vertex)
}

fn validate_edges<W, G>(graph: &G) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W> + ?Sized,
{
    for from in graph.vertices() {
        for (to, weight) in graph.outgoing_edges(from) {
            if weight.is_nan() || weight < W::zero() {
                return Err(Error::InvalidEdgeWeight {
                    from,
                    to,
                    weight: weight.to_f64().unwrap_or(f64::NAN),
                });
            }
            if !in_vertex_range(graph, to) {
                return Err(Error::DanglingEdge { from, to });
            }
        }
    }
    Ok(())
}
