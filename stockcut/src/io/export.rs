use crate::entities::{CutInstance, GroupedPattern, OptimizationResult, Piece};
use crate::io::ext_repr::{ExtCutSolution, ExtGroupSolution, ExtPattern, ExtPiece};

/// Exports the results of all groups of an instance out of the library.
/// `results` are expected in the order of the instance's groups.
///
/// # Panics
/// If the number of results differs from the number of groups.
pub fn export(instance: &CutInstance, results: &[OptimizationResult]) -> ExtCutSolution {
    assert_eq!(
        instance.groups.len(),
        results.len(),
        "one result is required per group"
    );
    let groups: Vec<ExtGroupSolution> = instance
        .groups
        .iter()
        .zip(results)
        .map(|(group, result)| export_result(&group.name, result))
        .collect();

    ExtCutSolution {
        bars_required: groups.iter().map(|g| g.bars_required).sum(),
        groups,
    }
}

pub fn export_result(name: &str, result: &OptimizationResult) -> ExtGroupSolution {
    ExtGroupSolution {
        name: name.to_string(),
        stock_length: result.stock_length,
        patterns: result.patterns.iter().map(export_pattern).collect(),
        bars_required: result.bars_required,
        efficiency: result.efficiency,
        waste_total: result.waste_total,
        total_cuts: result.total_cuts,
        lower_bound: result.lower_bound,
    }
}

fn export_pattern(pattern: &GroupedPattern) -> ExtPattern {
    ExtPattern {
        tag: pattern.tag.clone(),
        pieces: pattern.pieces.iter().map(export_piece).collect(),
        count: pattern.count,
        free_space: pattern.free_space,
    }
}

fn export_piece(piece: &Piece) -> ExtPiece {
    ExtPiece {
        length: piece.length,
        label: piece.label.to_string(),
        segment: piece.segment.map(|s| s.index),
    }
}
