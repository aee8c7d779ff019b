//! Property runners shared by the proptest and rstest suites.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::{SeedableRng, rngs::SmallRng};

use crate::test_utils::{CountingRng, bfs_reaches};
use crate::{
    CandidateGraph, FlowInstance, FlowNetwork, candidate_pairs, is_sink_reachable, parse_instance,
    write_instance,
};

use super::strategies::GenerationCase;

fn render(instance: &FlowInstance) -> Result<Vec<u8>, TestCaseError> {
    let mut buffer = Vec::new();
    write_instance(instance, &mut buffer)
        .map_err(|err| TestCaseError::fail(format!("write_instance failed: {err}")))?;
    Ok(buffer)
}

/// Two runs with the same parameters produce byte-identical output.
pub(super) fn run_determinism_property(case: &GenerationCase) -> TestCaseResult {
    let first = render(&case.generator().generate())?;
    let second = render(&case.generator().generate())?;
    if first != second {
        return Err(TestCaseError::fail(format!(
            "output differs between runs for {case:?}"
        )));
    }
    Ok(())
}

/// Emitted arcs are strictly ascending by `(source, target)`, point forward
/// within `1..=n`, and carry capacities in `[1, r]`.
pub(super) fn run_structure_property(case: &GenerationCase) -> TestCaseResult {
    let FlowInstance::Feasible(network) = case.generator().generate() else {
        return Ok(());
    };
    validate_network(case, &network)
}

fn validate_network(case: &GenerationCase, network: &FlowNetwork) -> TestCaseResult {
    if network.vertex_count() != case.vertex_count {
        return Err(TestCaseError::fail(format!(
            "vertex count {} != requested {}",
            network.vertex_count(),
            case.vertex_count
        )));
    }
    let bound = candidate_pairs(case.vertex_count).unwrap_or(usize::MAX);
    if network.arc_count() > bound {
        return Err(TestCaseError::fail(format!(
            "{} arcs exceed the {bound} candidate pairs",
            network.arc_count()
        )));
    }
    for (index, arc) in network.arcs().iter().enumerate() {
        if arc.source() == 0 || arc.source() >= arc.target() || arc.target() > case.vertex_count
        {
            return Err(TestCaseError::fail(format!(
                "arc {index} ({} -> {}) is not forward within 1..={}",
                arc.source(),
                arc.target(),
                case.vertex_count
            )));
        }
        if !(1..=case.max_capacity).contains(&arc.capacity()) {
            return Err(TestCaseError::fail(format!(
                "arc {index} capacity {} outside [1, {}]",
                arc.capacity(),
                case.max_capacity
            )));
        }
    }
    let ascending = network
        .arcs()
        .windows(2)
        .all(|pair| match pair {
            [left, right] => (left.source(), left.target()) < (right.source(), right.target()),
            _ => true,
        });
    if !ascending {
        return Err(TestCaseError::fail("arcs are not in ascending order"));
    }
    Ok(())
}

/// Feasible outputs contain a path `1 -> n`; infeasible outputs come from a
/// graph in which no such path exists.
pub(super) fn run_reachability_property(case: &GenerationCase) -> TestCaseResult {
    match case.generator().generate() {
        FlowInstance::Feasible(network) => {
            let arcs = network
                .arcs()
                .iter()
                .map(|arc| (arc.source(), arc.target()));
            if !bfs_reaches(network.vertex_count(), arcs, 1, network.vertex_count()) {
                return Err(TestCaseError::fail(format!(
                    "feasible output has no path from 1 to n for {case:?}"
                )));
            }
        }
        FlowInstance::Infeasible => {
            let mut rng = SmallRng::seed_from_u64(case.seed);
            let graph =
                CandidateGraph::sample(case.vertex_count, case.arc_probability, &mut rng);
            let arcs = graph.arcs().iter().map(|arc| (arc.source(), arc.target()));
            if bfs_reaches(case.vertex_count, arcs, 1, case.vertex_count) {
                return Err(TestCaseError::fail(format!(
                    "infeasible output but the sampled graph has a path for {case:?}"
                )));
            }
        }
    }
    Ok(())
}

/// The depth-first check agrees with the breadth-first oracle on every
/// sampled graph.
pub(super) fn run_oracle_agreement_property(case: &GenerationCase) -> TestCaseResult {
    let mut rng = SmallRng::seed_from_u64(case.seed);
    let graph = CandidateGraph::sample(case.vertex_count, case.arc_probability, &mut rng);
    let arcs = graph.arcs().iter().map(|arc| (arc.source(), arc.target()));
    let expected = bfs_reaches(case.vertex_count, arcs, 1, case.vertex_count);
    let actual = is_sink_reachable(&graph);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "dfs={actual} bfs={expected} for {case:?}"
        )));
    }
    Ok(())
}

/// Arc sampling pulls exactly `n(n-1)/2` words from the source whatever `p`.
pub(super) fn run_draw_count_property(case: &GenerationCase) -> TestCaseResult {
    let mut rng = CountingRng::new(SmallRng::seed_from_u64(case.seed));
    let _graph = CandidateGraph::sample(case.vertex_count, case.arc_probability, &mut rng);
    let expected = candidate_pairs(case.vertex_count).unwrap_or(usize::MAX);
    if rng.draws() != expected {
        return Err(TestCaseError::fail(format!(
            "consumed {} draws, expected {expected} for {case:?}",
            rng.draws()
        )));
    }
    Ok(())
}

/// Written output reads back as the same instance.
pub(super) fn run_text_round_trip_property(case: &GenerationCase) -> TestCaseResult {
    let instance = case.generator().generate();
    let rendered = render(&instance)?;
    let text = String::from_utf8(rendered)
        .map_err(|err| TestCaseError::fail(format!("output is not UTF-8: {err}")))?;
    let parsed = parse_instance(&text)
        .map_err(|err| TestCaseError::fail(format!("output does not parse: {err}")))?;
    if parsed != instance {
        return Err(TestCaseError::fail(format!(
            "parsed instance differs for {case:?}"
        )));
    }
    Ok(())
}
