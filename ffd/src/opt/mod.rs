use log::info;
use rayon::prelude::*;
use thousands::Separable;

use stockcut::decompose::decompose_all;
use stockcut::entities::{CutGroup, CutInstance, OptimizationResult};
use stockcut::error::{ConfigError, GroupError};

use crate::config::FFDConfig;

pub mod ffd;

#[doc(inline)]
pub use ffd::FFDOptimizer;
#[doc(inline)]
pub use ffd::optimize;
#[doc(inline)]
pub use ffd::placement_order;

/// Decomposes the requirements of a group and packs the resulting pieces.
pub fn solve_group(group: &CutGroup, config: &FFDConfig) -> Result<OptimizationResult, ConfigError> {
    let pieces = decompose_all(&group.requirements, &group.stock, &config.cut_config);

    info!(
        "[FFD] group '{}': {} requirements ({:.3} m) decomposed into {} pieces",
        group.name,
        group.requirements.len(),
        group.total_required_length(),
        pieces.len().separate_with_commas()
    );

    FFDOptimizer::new(group.stock, config.cut_config).solve(&pieces)
}

/// Solves every group of the instance independently.
/// Results are returned in the order of the groups, regardless of [`FFDConfig::parallel`].
pub fn solve_instance(
    instance: &CutInstance,
    config: &FFDConfig,
) -> Result<Vec<OptimizationResult>, GroupError> {
    let solve = |group: &CutGroup| {
        solve_group(group, config).map_err(|source| GroupError {
            group: group.name.clone(),
            source,
        })
    };

    let results = match config.parallel {
        true => instance.groups.par_iter().map(solve).collect::<Result<Vec<_>, _>>()?,
        false => instance.groups.iter().map(solve).collect::<Result<Vec<_>, _>>()?,
    };

    info!(
        "[FFD] instance '{}' solved: {} bars over {} groups",
        instance.name,
        results
            .iter()
            .map(|r| r.bars_required)
            .sum::<usize>()
            .separate_with_commas(),
        results.len()
    );

    Ok(results)
}
